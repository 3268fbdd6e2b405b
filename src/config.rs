use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{BulStemError, Result};
use crate::rules::RuleEncoding;

pub const DEFAULT_MIN_FREQUENCY: u64 = 2;
pub const DEFAULT_LEFT_CONTEXT_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StemmerConfig {
    /// Rules seen fewer times than this are dropped at load time.
    pub min_frequency: u64,
    /// Tokens of at most this many characters are returned unstemmed.
    pub left_context_length: usize,
    pub allow_duplicates: bool,
    pub rules_path: Option<PathBuf>,
    pub encoding: RuleEncoding,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        StemmerConfig {
            min_frequency: DEFAULT_MIN_FREQUENCY,
            left_context_length: DEFAULT_LEFT_CONTEXT_LENGTH,
            allow_duplicates: false,
            rules_path: None,
            encoding: RuleEncoding::Utf8,
        }
    }
}

impl StemmerConfig {
    pub fn new(min_frequency: u64, left_context_length: usize, allow_duplicates: bool) -> Self {
        StemmerConfig {
            min_frequency,
            left_context_length,
            allow_duplicates,
            ..StemmerConfig::default()
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BulStemError::Io(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| BulStemError::Config(format!("Invalid stemmer config: {}", e)))
    }
}
