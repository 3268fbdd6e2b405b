use serde::{Deserialize, Serialize};

pub mod encoding;
pub mod parser;
pub mod source;

pub use self::encoding::RuleEncoding;
pub use self::parser::parse_rule_line;
pub use self::source::{parse_rules, read_rules, read_rules_file};

/// `suffix ==> replacement`, seen `frequency` times in the training corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub suffix: String,
    pub replacement: String,
    pub frequency: u64,
}

impl Rule {
    pub fn new(suffix: impl Into<String>, replacement: impl Into<String>, frequency: u64) -> Self {
        Rule {
            suffix: suffix.into(),
            replacement: replacement.into(),
            frequency,
        }
    }
}

impl<S: Into<String>, R: Into<String>> From<(S, R, u64)> for Rule {
    fn from((suffix, replacement, frequency): (S, R, u64)) -> Self {
        Rule::new(suffix, replacement, frequency)
    }
}

/// The published rule sets, one per left-context size used when they were
/// extracted from the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleContext {
    One,
    Two,
    Three,
}

impl RuleContext {
    pub fn left_context_length(&self) -> usize {
        match self {
            RuleContext::One => 1,
            RuleContext::Two => 2,
            RuleContext::Three => 3,
        }
    }

    pub fn file_name(&self) -> String {
        format!("stem_rules_context_{}_utf8.txt", self.left_context_length())
    }

    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            1 => Some(RuleContext::One),
            2 => Some(RuleContext::Two),
            3 => Some(RuleContext::Three),
            _ => None,
        }
    }
}
