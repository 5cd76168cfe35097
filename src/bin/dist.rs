//! Release packaging helper: builds the kiosk binary and stages it under
//! `dist/` together with the sample configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

const BIN: &str = "mignon";

fn main() -> Result<()> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let dist_dir = manifest_dir.join("dist");
    reset_dir(&dist_dir)?;

    // Native build for the machine running this script.
    let native = release_binary(&manifest_dir, None)?;
    stage(&native, &dist_dir)?;

    // Kiosk hardware at the shop runs Windows; cross-build when this runs on
    // the Linux build box and the toolchain is available.
    if cfg!(target_os = "linux") {
        match release_binary(&manifest_dir, Some("x86_64-pc-windows-gnu")) {
            Ok(binary) => stage(&binary, &dist_dir)?,
            Err(err) => println!(">> skipping Windows build: {err:#}"),
        }
    }

    let config_src = manifest_dir.join("config/mignon.toml");
    if config_src.exists() {
        fs::create_dir_all(dist_dir.join("config"))?;
        fs::copy(&config_src, dist_dir.join("config/mignon.toml"))
            .context("failed to stage sample config")?;
    }
    fs::write(
        dist_dir.join("VERSION"),
        concat!(env!("CARGO_PKG_VERSION"), "\n"),
    )
    .context("failed to write VERSION")?;

    println!(">> release staged in {}", dist_dir.display());
    Ok(())
}

fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        fs::remove_dir_all(dir).with_context(|| format!("failed to clear {}", dir.display()))?;
    }
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))
}

/// Runs the release build and returns the path of the produced binary.
fn release_binary(manifest_dir: &Path, triple: Option<&str>) -> Result<PathBuf> {
    let mut command = Command::new("cargo");
    command
        .args(["build", "--release", "--bin", BIN])
        .current_dir(manifest_dir);
    if let Some(triple) = triple {
        command.args(["--target", triple]);
        println!(">> cross-building {BIN} for {triple}");
    } else {
        println!(">> building {BIN} for the host");
    }
    let status = command.status().context("failed to run cargo build")?;
    if !status.success() {
        if let Some(triple) = triple {
            bail!("build for {triple} failed; run `rustup target add {triple}` first");
        }
        bail!("release build failed");
    }

    let windows = triple.map_or(cfg!(target_os = "windows"), |t| t.contains("windows"));
    let file = if windows {
        format!("{BIN}.exe")
    } else {
        BIN.to_string()
    };
    let mut path = manifest_dir.join("target");
    if let Some(triple) = triple {
        path.push(triple);
    }
    path.push("release");
    path.push(&file);
    if !path.exists() {
        bail!("build output missing: {}", path.display());
    }
    Ok(path)
}

/// Copies a built binary into the dist directory, keeping the executable bit.
fn stage(binary: &Path, dist_dir: &Path) -> Result<()> {
    let name = binary.file_name().context("binary path has no file name")?;
    let dest = dist_dir.join(name);
    fs::copy(binary, &dest).with_context(|| {
        format!(
            "failed to copy {} -> {}",
            binary.display(),
            dest.display()
        )
    })?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = fs::metadata(&dest)?.permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&dest, permissions)?;
    }
    println!(">> staged {}", dest.display());
    Ok(())
}
