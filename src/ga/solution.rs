//! Final solver output and its JSON form.

use super::types::Coloring;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Best coloring found and its conflict score.
///
/// Persisted as `{"Coloring": [...], "Score": n}`. Run statistics
/// (`iterations`, `cancelled`) are not persisted and read back as defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    #[serde(rename = "Coloring")]
    pub coloring: Coloring,

    #[serde(rename = "Score")]
    pub score: usize,

    /// Generations executed.
    #[serde(skip)]
    pub iterations: usize,

    /// Whether the run was stopped through its cancellation flag.
    #[serde(skip)]
    pub cancelled: bool,
}

impl Solution {
    /// Whether the coloring has no conflicts.
    pub fn is_proper(&self) -> bool {
        self.score == 0
    }

    /// Writes the solution as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = serde_json::to_vec(self)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Reads a solution written by [`save_json`](Self::save_json).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample() -> Solution {
        Solution {
            coloring: Coloring::from(vec![0, 2, 1, 0]),
            score: 3,
            iterations: 120,
            cancelled: false,
        }
    }

    #[test]
    fn test_json_document() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"Coloring":[0,2,1,0],"Score":3}"#);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        let saved = sample();

        saved.save_json(&path).unwrap();
        let loaded = Solution::load_json(&path).unwrap();

        assert_eq!(loaded.coloring, saved.coloring);
        assert_eq!(loaded.score, saved.score);
        assert_eq!(loaded.iterations, 0);
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.json");
        fs::write(&path, "{\"Coloring\": 5}").unwrap();
        assert!(matches!(Solution::load_json(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_is_proper() {
        let mut s = sample();
        assert!(!s.is_proper());
        s.score = 0;
        assert!(s.is_proper());
    }
}
