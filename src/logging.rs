//! File-backed logging setup.
//!
//! The TUI owns the terminal, so log output goes to a rolling gzip file
//! under `logs/` instead of stderr. A `config/log4rs.yaml` next to the
//! binary takes precedence when present.

use std::path::Path;

use anyhow::{Context, Result};
use log::LevelFilter;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

const LOG_FILE: &str = "logs/mignon.log";
const ROLL_PATTERN: &str = "logs/mignon.{}.log.gz";
const MAX_LOG_SIZE: u64 = 1024 * 1024;
const KEPT_LOGS: u32 = 3;

pub fn init(root: &Path) -> Result<()> {
    let yaml = root.join("config/log4rs.yaml");
    if yaml.exists() {
        log4rs::init_file(&yaml, Default::default())
            .with_context(|| format!("failed to load logging config: {}", yaml.display()))?;
        return Ok(());
    }

    let roller = FixedWindowRoller::builder()
        .build(&root.join(ROLL_PATTERN).to_string_lossy(), KEPT_LOGS)
        .context("invalid log roll pattern")?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(MAX_LOG_SIZE)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}",
        )))
        .build(root.join(LOG_FILE), Box::new(policy))
        .context("failed to open log file")?;

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(appender)))
        .build(Root::builder().appender("file").build(LevelFilter::Info))
        .context("invalid logging config")?;
    log4rs::init_config(config).context("failed to initialize logging")?;
    Ok(())
}
