//! Error types for fiximports-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// The account under repair could not be resolved; the run has
    /// nothing to process and must abort.
    #[error("Account not found: {path}")]
    AccountNotFound { path: String },
}
