use std::fmt;

/// Raised while building a rule store when two rules share a suffix and
/// duplicates are not allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateRuleError {
    pub suffix: String,
    pub replacement: String,
}

impl fmt::Display for DuplicateRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate rule for suffix '{}' (replacement '{}')",
            self.suffix, self.replacement
        )
    }
}

impl std::error::Error for DuplicateRuleError {}

#[derive(Debug, PartialEq)]
pub enum BulStemError {
    DuplicateRule(DuplicateRuleError),
    Io(String),
    Encoding(String),
    Config(String),
    Serialization(String),
}

impl fmt::Display for BulStemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BulStemError::DuplicateRule(err) => write!(f, "{}", err),
            BulStemError::Io(msg) => write!(f, "I/O error: {}", msg),
            BulStemError::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            BulStemError::Config(msg) => write!(f, "Configuration error: {}", msg),
            BulStemError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for BulStemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BulStemError::DuplicateRule(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DuplicateRuleError> for BulStemError {
    fn from(err: DuplicateRuleError) -> Self {
        BulStemError::DuplicateRule(err)
    }
}

pub type Result<T> = std::result::Result<T, BulStemError>;
