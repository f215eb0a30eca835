//! Error types for fiximports-rules

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    /// A rule's pattern failed to compile. This is fatal for the whole
    /// rules-file load: a silently dead rule is indistinguishable from
    /// one that never matches.
    #[error("Invalid pattern {pattern:?} in rule line {line:?}: {source}")]
    InvalidPattern {
        line: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("IO error reading rules file")]
    IoError(#[from] io::Error),
}
