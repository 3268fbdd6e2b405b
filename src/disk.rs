use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{BulStemError, Result};
use crate::stemmer::Stemmer;

/// Compiled rule sets: a built stemmer serialized with bincode, so the rule
/// file does not have to be parsed and filtered again.
impl Stemmer {
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let encoded_data = bincode::serialize(self).map_err(|e| {
            BulStemError::Serialization(format!("Failed to serialize stemmer: {}", e))
        })?;
        let mut file = File::create(path).map_err(|e| {
            BulStemError::Io(format!("Failed to create {}: {}", path.display(), e))
        })?;
        file.write_all(&encoded_data).map_err(|e| {
            BulStemError::Io(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!(path = %path.display(), bytes = encoded_data.len(), "saved compiled rule set");
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|e| {
            BulStemError::Io(format!("Failed to open {}: {}", path.display(), e))
        })?;
        let mut encoded_data = Vec::new();
        file.read_to_end(&mut encoded_data).map_err(|e| {
            BulStemError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let stemmer: Stemmer = bincode::deserialize(&encoded_data).map_err(|e| {
            BulStemError::Serialization(format!(
                "Failed to deserialize compiled rule set {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!(
            path = %path.display(),
            suffixes = stemmer.rules().len(),
            "loaded compiled rule set"
        );
        Ok(stemmer)
    }
}
