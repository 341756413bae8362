use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use simon_engine::{ScoreStore, StoreUnavailable};

/// The single logical key the high score lives under.
const HIGH_SCORE_KEY: &str = "highScore";

/// JSON-file-backed score store.
///
/// The payload is a flat string-to-string map under a single fixed key,
/// e.g. `{"highScore": "7"}`, a string-encoded integer. A
/// missing file or an unparseable value loads as no score; only an
/// unreadable or unwritable medium is reported as unavailable.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<HashMap<String, String>, StoreUnavailable> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(self.unavailable("read", e)),
        };

        match serde_json::from_str(&raw) {
            Ok(map) => Ok(map),
            Err(e) => {
                log::warn!("{}: corrupt score file, ignoring: {e}", self.path.display());
                Ok(HashMap::new())
            }
        }
    }

    fn unavailable(&self, op: &str, err: impl std::fmt::Display) -> StoreUnavailable {
        StoreUnavailable {
            reason: format!("{} {}: {err}", op, self.path.display()),
        }
    }
}

impl ScoreStore for FileStore {
    fn load(&mut self) -> Result<Option<u32>, StoreUnavailable> {
        let map = self.read_map()?;
        let Some(raw) = map.get(HIGH_SCORE_KEY) else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(score) => Ok(Some(score)),
            Err(_) => {
                log::warn!(
                    "{}: unparseable high score '{raw}', ignoring",
                    self.path.display()
                );
                Ok(None)
            }
        }
    }

    fn save(&mut self, high_score: u32) -> Result<(), StoreUnavailable> {
        // Keep any other keys a future version may have written.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(HIGH_SCORE_KEY.to_string(), high_score.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.unavailable("create", e))?;
            }
        }

        let payload = serde_json::to_string_pretty(&map)
            .map_err(|e| self.unavailable("encode", e))?;
        fs::write(&self.path, payload).map_err(|e| self.unavailable("write", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique per-test file under the system temp dir, removed on drop.
    struct TempScoreFile {
        path: PathBuf,
    }

    impl TempScoreFile {
        fn new(name: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "simon-store-{}-{name}.json",
                std::process::id()
            ));
            let _ = fs::remove_file(&path);
            Self { path }
        }
    }

    impl Drop for TempScoreFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn test_missing_file_loads_none() {
        let tmp = TempScoreFile::new("missing");
        let mut store = FileStore::new(&tmp.path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempScoreFile::new("round-trip");
        let mut store = FileStore::new(&tmp.path);
        store.save(7).unwrap();
        assert_eq!(store.load().unwrap(), Some(7));

        // A fresh store over the same path sees the persisted value.
        let mut fresh = FileStore::new(&tmp.path);
        assert_eq!(fresh.load().unwrap(), Some(7));
    }

    #[test]
    fn test_save_overwrites_previous_score() {
        let tmp = TempScoreFile::new("overwrite");
        let mut store = FileStore::new(&tmp.path);
        store.save(3).unwrap();
        store.save(8).unwrap();
        assert_eq!(store.load().unwrap(), Some(8));
    }

    #[test]
    fn test_unparseable_value_loads_none() {
        let tmp = TempScoreFile::new("unparseable");
        fs::write(&tmp.path, r#"{"highScore": "not a number"}"#).unwrap();
        let mut store = FileStore::new(&tmp.path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_corrupt_json_loads_none() {
        let tmp = TempScoreFile::new("corrupt");
        fs::write(&tmp.path, "{ this is not json").unwrap();
        let mut store = FileStore::new(&tmp.path);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_payload_uses_string_encoded_integer() {
        let tmp = TempScoreFile::new("payload");
        let mut store = FileStore::new(&tmp.path);
        store.save(12).unwrap();

        let raw = fs::read_to_string(&tmp.path).unwrap();
        let map: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get("highScore").map(String::as_str), Some("12"));
    }

    #[test]
    fn test_save_keeps_unknown_keys() {
        let tmp = TempScoreFile::new("unknown-keys");
        fs::write(&tmp.path, r#"{"theme": "classic"}"#).unwrap();
        let mut store = FileStore::new(&tmp.path);
        store.save(2).unwrap();

        let raw = fs::read_to_string(&tmp.path).unwrap();
        let map: HashMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(map.get("theme").map(String::as_str), Some("classic"));
        assert_eq!(map.get("highScore").map(String::as_str), Some("2"));
    }
}
