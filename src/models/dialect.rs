//! Identifier dialects for tag and label sanitization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Punctuation allowed in AWS tag keys and values, besides ASCII letters and digits.
const AWS_PUNCTUATION: &[char] = &['.', ':', '/', '_', '@', '+', '=', '-'];

/// Punctuation allowed in Kubernetes label values.
const KUBE_VALUE_PUNCTUATION: &[char] = &['.', '_', '-'];

/// Punctuation allowed in Kubernetes label keys (`/` separates the prefix).
const KUBE_KEY_PUNCTUATION: &[char] = &['.', '_', '-', '/'];

/// Target identifier system for sanitization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// AWS resource tags: keys and values share one character set, no trimming.
    Aws,
    /// Kubernetes labels: keys also allow `/`, both ends trimmed to alphanumerics.
    Kubernetes,
}

impl Dialect {
    /// Whether `c` may appear in a key of this dialect.
    pub fn allows_in_key(self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || match self {
                Dialect::Aws => AWS_PUNCTUATION.contains(&c),
                Dialect::Kubernetes => KUBE_KEY_PUNCTUATION.contains(&c),
            }
    }

    /// Whether `c` may appear in a value of this dialect.
    pub fn allows_in_value(self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || match self {
                Dialect::Aws => AWS_PUNCTUATION.contains(&c),
                Dialect::Kubernetes => KUBE_VALUE_PUNCTUATION.contains(&c),
            }
    }

    /// Whether non-alphanumeric characters are stripped from both ends.
    pub fn trims_boundaries(self) -> bool {
        matches!(self, Dialect::Kubernetes)
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Dialect, String> {
        match s.to_ascii_lowercase().as_str() {
            "aws" => Ok(Dialect::Aws),
            "kubernetes" | "kube" | "k8s" => Ok(Dialect::Kubernetes),
            other => Err(format!("unknown dialect: {other}")),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dialect::Aws => write!(f, "aws"),
            Dialect::Kubernetes => write!(f, "kubernetes"),
        }
    }
}
