//! Error types for fiximports-ledger

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Ledger file not found: {path}")]
    FileNotFound { path: String },

    #[error("Ledger file is locked (stale lock?): {path}")]
    Locked { path: String },

    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("Session is read-only")]
    ReadOnly,

    #[error("IO error")]
    IoError(#[from] io::Error),
}
