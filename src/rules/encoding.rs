use std::fmt;
use std::str::FromStr;

use encoding_rs::{UTF_8, WINDOWS_1251};
use serde::{Deserialize, Serialize};

use crate::error::{BulStemError, Result};

/// Character encodings in which rule files are published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleEncoding {
    #[default]
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "windows-1251")]
    Windows1251,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

impl RuleEncoding {
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self {
            RuleEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                UTF_8
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
                    .ok_or_else(|| {
                        BulStemError::Encoding("Rule source is not valid UTF-8".to_string())
                    })
            }
            // every byte is mapped in windows-1251, so decoding cannot fail
            RuleEncoding::Windows1251 => {
                Ok(WINDOWS_1251.decode_without_bom_handling(bytes).0.into_owned())
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleEncoding::Utf8 => "utf-8",
            RuleEncoding::Windows1251 => "windows-1251",
        }
    }
}

impl fmt::Display for RuleEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleEncoding {
    type Err = BulStemError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(RuleEncoding::Utf8),
            "windows-1251" | "cp1251" => Ok(RuleEncoding::Windows1251),
            other => Err(BulStemError::Encoding(format!("Unsupported encoding: {}", other))),
        }
    }
}
