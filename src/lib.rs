//! BulStem: an inflectional stemmer for Bulgarian.
//!
//! Stemming rules of the form `suffix ==> replacement frequency` are loaded
//! into a reverse suffix trie; each token then has its longest eligible
//! suffix rewritten.
//!
//! ```
//! use bulstem::{Stemmer, StemmerConfig};
//!
//! let config = StemmerConfig::new(0, 0, false);
//! let stemmer = Stemmer::from_lines(["ой ==> о 10"], &config)?;
//! assert_eq!(stemmer.stem("порой"), "поро");
//! # Ok::<(), bulstem::BulStemError>(())
//! ```

pub mod config;
pub mod disk;
pub mod error;
pub mod rule_store;
pub mod rules;
pub mod stemmer;

pub use config::StemmerConfig;
pub use error::{BulStemError, DuplicateRuleError, Result};
pub use rule_store::RuleStore;
pub use rules::{Rule, RuleContext, RuleEncoding};
pub use stemmer::Stemmer;

#[cfg(test)]
mod tests;
