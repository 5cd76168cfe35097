//! Per-item vote counting over a locally persisted ledger.
//!
//! Votes are best-effort social proof scoped to one device: a plain JSON
//! object mapping item key to count, rewritten wholesale on every vote.
//! Nothing here is authoritative and nothing here may ever take the
//! storefront down, so both failure modes (unreadable storage, malformed
//! content) degrade to an empty ledger instead of propagating.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::warn;

/// File name of the persisted ledger inside the data directory.
pub const LEDGER_FILE: &str = "mignon_votes.json";

/// Item key to non-negative vote count. `BTreeMap` keeps the serialized
/// object stable for anyone inspecting the data file by hand.
pub type Ledger = BTreeMap<String, u64>;

/// The only two ways vote persistence can fail. Call sites treat both
/// identically; neither ever reaches the viewer.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("ledger storage unreadable: {0}")]
    Storage(#[from] io::Error),
    #[error("ledger content malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Storage capability for the vote ledger.
///
/// Injected into [`VoteStore`] so the read-modify-write behavior and the
/// corrupt-data tolerance can be exercised against an in-memory fake.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger, LedgerError>;
    fn save(&self, ledger: &Ledger) -> Result<(), LedgerError>;
}

/// Ledger persisted as a JSON object in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LedgerStore for JsonFileStore {
    fn load(&self) -> Result<Ledger, LedgerError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // A missing file is the normal first-run state, not a failure.
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Ledger::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string(ledger)?)?;
        Ok(())
    }
}

/// Read and increment vote counts over an injected [`LedgerStore`].
pub struct VoteStore {
    store: Box<dyn LedgerStore>,
}

impl VoteStore {
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// Vote store over the JSON file ledger at `path`.
    pub fn open(path: PathBuf) -> Self {
        Self::new(Box::new(JsonFileStore::new(path)))
    }

    /// Current persisted count for `key`; 0 when absent or when the ledger
    /// cannot be read.
    pub fn count(&self, key: &str) -> u64 {
        self.load_tolerant().get(key).copied().unwrap_or(0)
    }

    /// Adds one vote for `key` and returns the new count.
    ///
    /// This is a read-modify-write of the whole ledger, not a per-key atomic
    /// increment; concurrent writers to the same storage scope race
    /// last-write-wins. A failed write is swallowed (logged only) and the
    /// advanced count is still returned, so the session's displayed counter
    /// keeps moving — displayed and persisted counts may diverge, see
    /// DESIGN.md.
    pub fn increment(&mut self, key: &str) -> u64 {
        let mut ledger = self.load_tolerant();
        let next = ledger.get(key).copied().unwrap_or(0) + 1;
        ledger.insert(key.to_string(), next);
        if let Err(err) = self.store.save(&ledger) {
            warn!("vote for {key} not persisted: {err}");
        }
        next
    }

    fn load_tolerant(&self) -> Ledger {
        match self.store.load() {
            Ok(ledger) => ledger,
            Err(err) => {
                warn!("vote ledger unavailable, treating as empty: {err}");
                Ledger::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use tempfile::TempDir;

    use super::*;

    /// In-memory fake with a switch to make every save fail.
    #[derive(Default)]
    struct MemoryStore {
        ledger: Rc<RefCell<Ledger>>,
        fail_saves: bool,
    }

    impl LedgerStore for MemoryStore {
        fn load(&self) -> Result<Ledger, LedgerError> {
            Ok(self.ledger.borrow().clone())
        }

        fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
            if self.fail_saves {
                return Err(LedgerError::Storage(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "read-only storage",
                )));
            }
            *self.ledger.borrow_mut() = ledger.clone();
            Ok(())
        }
    }

    fn file_store(dir: &TempDir) -> VoteStore {
        VoteStore::open(dir.path().join(LEDGER_FILE))
    }

    #[test]
    fn absent_ledger_counts_zero() {
        let dir = TempDir::new().expect("tempdir should create");
        let store = file_store(&dir);
        assert_eq!(store.count("matcha"), 0);
    }

    #[test]
    fn sequential_increments_accumulate() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut store = file_store(&dir);
        assert_eq!(store.increment("matcha"), 1);
        assert_eq!(store.increment("matcha"), 2);
        assert_eq!(store.increment("matcha"), 3);
        assert_eq!(store.count("matcha"), 3);
    }

    #[test]
    fn keys_are_independent() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut store = file_store(&dir);
        store.increment("matcha");
        assert_eq!(store.count("plain"), 0);
        assert_eq!(store.increment("plain"), 1);
        assert_eq!(store.count("matcha"), 1);
    }

    #[test]
    fn ledger_file_is_a_plain_json_object() {
        let dir = TempDir::new().expect("tempdir should create");
        let mut store = file_store(&dir);
        store.increment("matcha");
        let raw = fs::read_to_string(dir.path().join(LEDGER_FILE))
            .expect("ledger file should exist after a vote");
        assert_eq!(raw, r#"{"matcha":1}"#);
    }

    #[test]
    fn corrupt_ledger_is_treated_as_empty() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join(LEDGER_FILE);
        fs::write(&path, "{not json").expect("corrupt ledger should write");

        let mut store = VoteStore::open(path.clone());
        assert_eq!(store.count("matcha"), 0);
        // First vote over corrupt content restarts from an empty ledger.
        assert_eq!(store.increment("matcha"), 1);
        let raw = fs::read_to_string(&path).expect("ledger should be rewritten");
        assert_eq!(raw, r#"{"matcha":1}"#);
    }

    #[test]
    fn wrong_shape_is_also_treated_as_empty() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join(LEDGER_FILE);
        fs::write(&path, r#"{"matcha":"lots"}"#).expect("ledger should write");

        let store = VoteStore::open(path);
        assert_eq!(store.count("matcha"), 0);
    }

    #[test]
    fn counts_survive_reopening() {
        let dir = TempDir::new().expect("tempdir should create");
        let path = dir.path().join(LEDGER_FILE);
        let mut store = VoteStore::open(path.clone());
        store.increment("choco");
        store.increment("choco");

        let reopened = VoteStore::open(path);
        assert_eq!(reopened.count("choco"), 2);
    }

    #[test]
    fn failed_save_still_returns_the_advanced_count() {
        let ledger = Rc::new(RefCell::new(Ledger::new()));
        let mut store = VoteStore::new(Box::new(MemoryStore {
            ledger: Rc::clone(&ledger),
            fail_saves: true,
        }));

        // The caller sees the optimistic value; storage never advances.
        assert_eq!(store.increment("matcha"), 1);
        assert_eq!(store.increment("matcha"), 1);
        assert!(ledger.borrow().is_empty());
        assert_eq!(store.count("matcha"), 0);
    }

    #[test]
    fn memory_fake_round_trips() {
        let ledger = Rc::new(RefCell::new(Ledger::new()));
        let mut store = VoteStore::new(Box::new(MemoryStore {
            ledger: Rc::clone(&ledger),
            fail_saves: false,
        }));
        for expected in 1..=5 {
            assert_eq!(store.increment("bread"), expected);
        }
        assert_eq!(store.count("bread"), 5);
        assert_eq!(ledger.borrow().get("bread"), Some(&5));
    }
}
