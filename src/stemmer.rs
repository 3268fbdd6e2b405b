use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::StemmerConfig;
use crate::error::{BulStemError, DuplicateRuleError, Result};
use crate::rule_store::RuleStore;
use crate::rules::{self, Rule, RuleContext};

lazy_static! {
    static ref VOWELS: HashSet<char> = ['а', 'ъ', 'о', 'у', 'е', 'и', 'я', 'ю']
        .into_iter()
        .collect();
}

/// BulStem inflectional stemmer.
///
/// Applies the longest matching suffix rule to a token, but never strips the
/// token's first vowel or anything before it, and leaves tokens of at most
/// `left_context_length` characters alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stemmer {
    rules: RuleStore,
    min_frequency: u64,
    left_context_length: usize,
}

impl Stemmer {
    pub fn new<I, R>(
        rules: I,
        min_frequency: u64,
        left_context_length: usize,
        allow_duplicates: bool,
    ) -> std::result::Result<Self, DuplicateRuleError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        let mut store = RuleStore::new(allow_duplicates);
        let mut offered = 0usize;
        let mut filtered = 0usize;

        for rule in rules {
            let rule = rule.into();
            offered += 1;
            if rule.frequency < min_frequency {
                filtered += 1;
                continue;
            }
            if let Err(err) = store.insert(&rule.suffix, &rule.replacement) {
                warn!(suffix = %err.suffix, "duplicate stemming rule, aborting construction");
                return Err(err);
            }
        }

        debug!(
            offered,
            filtered,
            suffixes = store.len(),
            nodes = store.node_count(),
            "built stemming rule store"
        );

        Ok(Stemmer {
            rules: store,
            min_frequency,
            left_context_length,
        })
    }

    pub fn with_config<I, R>(rules: I, config: &StemmerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        Ok(Self::new(
            rules,
            config.min_frequency,
            config.left_context_length,
            config.allow_duplicates,
        )?)
    }

    /// Builds a stemmer from raw `suffix ==> replacement frequency` lines.
    pub fn from_lines<I, S>(lines: I, config: &StemmerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(rules::parse_rules(lines), config)
    }

    pub fn from_reader<R: Read>(reader: R, config: &StemmerConfig) -> Result<Self> {
        Self::with_config(rules::read_rules(reader, config.encoding)?, config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P, config: &StemmerConfig) -> Result<Self> {
        Self::with_config(rules::read_rules_file(path, config.encoding)?, config)
    }

    /// Loads the rule file named by `config.rules_path`.
    pub fn from_config(config: &StemmerConfig) -> Result<Self> {
        let path = config
            .rules_path
            .as_ref()
            .ok_or_else(|| BulStemError::Config("No rules_path configured".to_string()))?;
        Self::from_file(path, config)
    }

    /// Loads one of the published rule sets from `dir`, using the left
    /// context the set was extracted with.
    pub fn from_rules_dir<P: AsRef<Path>>(
        dir: P,
        context: RuleContext,
        min_frequency: u64,
    ) -> Result<Self> {
        let config = StemmerConfig::new(min_frequency, context.left_context_length(), false);
        Self::from_file(dir.as_ref().join(context.file_name()), &config)
    }

    /// Character index of the first vowel in `token`, or its length when it
    /// has none.
    pub fn first_vowel_position(token: &str) -> usize {
        let mut position = 0;
        for c in token.chars() {
            if VOWELS.contains(&c) {
                return position;
            }
            position += 1;
        }
        position
    }

    pub fn stem(&self, token: &str) -> String {
        let stem = token.to_lowercase();
        if stem.chars().count() <= self.left_context_length {
            return stem;
        }

        // The stem keeps at least one vowel: only characters after the first
        // one may be rewritten.
        let min_index = Self::first_vowel_position(&stem) + 1;
        self.rules.longest_match(&stem, min_index)
    }

    pub fn min_frequency(&self) -> u64 {
        self.min_frequency
    }

    pub fn left_context_length(&self) -> usize {
        self.left_context_length
    }

    pub fn rules(&self) -> &RuleStore {
        &self.rules
    }
}
