use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DuplicateRuleError;

type NodeId = usize;

const ROOT: NodeId = 0;

/// A single trie node. Edges are keyed by suffix characters read back to front.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
struct Node {
    children: HashMap<char, NodeId>,
    replacement: Option<String>,
}

/// Reverse suffix trie holding every stemming rule.
///
/// Nodes live in a single arena and refer to each other by index. The root is
/// always at index 0 and never carries a replacement that `longest_match`
/// would consider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RuleStore {
    nodes: Vec<Node>,
    rule_count: usize,
    allow_duplicates: bool,
}

impl RuleStore {
    pub fn new(allow_duplicates: bool) -> Self {
        RuleStore {
            nodes: vec![Node::default()],
            rule_count: 0,
            allow_duplicates,
        }
    }

    /// Adds `suffix ==> replacement`. The suffix is lower-cased; the
    /// replacement is stored as given.
    pub fn insert(&mut self, suffix: &str, replacement: &str) -> Result<(), DuplicateRuleError> {
        let suffix = suffix.to_lowercase();
        let mut curr = ROOT;
        for c in suffix.chars().rev() {
            curr = match self.nodes[curr].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[curr].children.insert(c, child);
                    child
                }
            };
        }

        let node = &mut self.nodes[curr];
        if node.replacement.is_some() && !self.allow_duplicates {
            return Err(DuplicateRuleError {
                suffix,
                replacement: replacement.to_string(),
            });
        }

        // An empty replacement is not a rule: it clears the node instead.
        let previous = if replacement.is_empty() {
            node.replacement.take()
        } else {
            node.replacement.replace(replacement.to_string())
        };
        match (previous.is_some(), replacement.is_empty()) {
            (false, false) => self.rule_count += 1,
            (true, true) => self.rule_count -= 1,
            _ => {}
        }
        Ok(())
    }

    /// Replaces the longest suffix of `word` that has a rule, never consuming
    /// characters before `min_index`. `word` must already be lower-cased and
    /// `min_index` counts characters, not bytes.
    pub fn longest_match(&self, word: &str, min_index: usize) -> String {
        let chars: Vec<char> = word.chars().collect();
        let mut match_index = chars.len();
        let mut replacement = "";
        let mut curr = ROOT;

        for (i, c) in chars.iter().enumerate().rev() {
            if i < min_index {
                break;
            }
            curr = match self.nodes[curr].children.get(c) {
                Some(&child) => child,
                None => break,
            };
            if let Some(stem) = &self.nodes[curr].replacement {
                replacement = stem.as_str();
                match_index = i;
            }
        }

        let mut stem: String = chars[..match_index].iter().collect();
        stem.push_str(replacement);
        stem
    }

    /// Exact lookup of the replacement registered for `suffix`.
    pub fn get(&self, suffix: &str) -> Option<&str> {
        let mut curr = ROOT;
        for c in suffix.to_lowercase().chars().rev() {
            curr = *self.nodes[curr].children.get(&c)?;
        }
        self.nodes[curr].replacement.as_deref()
    }

    /// Number of distinct suffixes carrying a rule.
    pub fn len(&self) -> usize {
        self.rule_count
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn allows_duplicates(&self) -> bool {
        self.allow_duplicates
    }
}

impl Default for RuleStore {
    fn default() -> Self {
        RuleStore::new(false)
    }
}
