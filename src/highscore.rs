use std::fs;
use std::io::ErrorKind;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("high score file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("high score file does not hold a non-negative integer: {0}")]
    Parse(#[from] ParseIntError),
}

/// Best score of the process lifetime. Never decreases.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn get(&self) -> u32 {
        self.best
    }

    /// Returns true when `score` beat the previous best.
    pub fn submit(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

/// One-line text file holding the decimal high score.
#[derive(Clone, Debug)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<u32, HighScoreError> {
        let text = fs::read_to_string(&self.path)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(0);
        }
        Ok(text.parse()?)
    }

    pub fn try_save(&self, score: u32) -> Result<(), HighScoreError> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }

    /// Stored score, or 0 when the file is missing, unreadable or malformed.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(HighScoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no high score file yet");
                0
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring unreadable high score");
                0
            }
        }
    }

    /// Best-effort overwrite; failures are logged and dropped.
    pub fn save(&self, score: u32) {
        if let Err(e) = self.try_save(score) {
            warn!(path = %self.path.display(), error = %e, score, "failed to save high score");
        }
    }
}

#[cfg(test)]
pub(crate) fn temp_store(name: &str) -> HighScoreStore {
    let path = std::env::temp_dir().join(format!(
        "snake_glow_{}_{}.txt",
        std::process::id(),
        name
    ));
    let _ = fs::remove_file(&path);
    HighScoreStore::new(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_zero() {
        let store = temp_store("missing");
        assert_eq!(store.load(), 0);
        assert!(matches!(store.try_load(), Err(HighScoreError::Io(_))));
    }

    #[test]
    fn garbage_loads_zero() {
        let store = temp_store("garbage");
        fs::write(store.path(), "abc").unwrap();
        assert_eq!(store.load(), 0);
        assert!(matches!(store.try_load(), Err(HighScoreError::Parse(_))));
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn negative_loads_zero() {
        let store = temp_store("negative");
        fs::write(store.path(), "-4").unwrap();
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn empty_and_whitespace() {
        let store = temp_store("empty");
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load(), 0);
        fs::write(store.path(), " 17\n").unwrap();
        assert_eq!(store.load(), 17);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_overwrites() {
        let store = temp_store("overwrite");
        store.save(123);
        store.save(7);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7");
        assert_eq!(store.load(), 7);
        let _ = fs::remove_file(store.path());
    }

    #[test]
    fn save_into_missing_dir_is_silent() {
        let store = HighScoreStore::new(
            std::env::temp_dir()
                .join(format!("snake_glow_no_such_dir_{}", std::process::id()))
                .join("highscore.txt"),
        );
        store.save(5);
        assert!(store.try_save(5).is_err());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn submit_is_monotonic() {
        let mut hs = HighScore::new(10);
        assert!(!hs.submit(3));
        assert!(!hs.submit(10));
        assert_eq!(hs.get(), 10);
        assert!(hs.submit(11));
        assert_eq!(hs.get(), 11);
    }

    #[test]
    fn persisted_value_is_max_of_previous_and_new() {
        let store = temp_store("max");
        store.save(9);
        for (submitted, expected) in [(4, 9), (12, 12)] {
            let mut hs = HighScore::new(store.load());
            if hs.submit(submitted) {
                store.save(hs.get());
            }
            assert_eq!(store.load(), expected);
        }
        let _ = fs::remove_file(store.path());
    }
}
