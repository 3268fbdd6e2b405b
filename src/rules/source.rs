use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, trace};

use super::encoding::RuleEncoding;
use super::parser::parse_rule_line;
use super::Rule;
use crate::error::{BulStemError, Result};

/// Parses every well-formed rule out of `lines`, silently skipping the rest.
pub fn parse_rules<I, S>(lines: I) -> Vec<Rule>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rules = Vec::new();
    let mut skipped = 0usize;
    for (line_no, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_rule_line(line) {
            Some(rule) => rules.push(rule),
            None => {
                skipped += 1;
                trace!(line = line_no + 1, content = line, "skipping malformed rule line");
            }
        }
    }
    debug!(parsed = rules.len(), skipped, "parsed rule source");
    rules
}

pub fn read_rules<R: Read>(mut reader: R, encoding: RuleEncoding) -> Result<Vec<Rule>> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| BulStemError::Io(format!("Failed to read rule source: {}", e)))?;
    let text = encoding.decode(&bytes)?;
    Ok(parse_rules(split_lines(&text)))
}

/// Splits on `\n`, `\r\n` and lone `\r`, so files with old Mac line endings
/// are read line by line too.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .flat_map(|line| line.split('\r'))
}

pub fn read_rules_file<P: AsRef<Path>>(path: P, encoding: RuleEncoding) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BulStemError::Io(format!("Failed to open rule file {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), %encoding, "reading rule file");
    read_rules(file, encoding)
}
