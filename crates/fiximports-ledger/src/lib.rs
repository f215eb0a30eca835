//! Plain-text journal store
//!
//! The ledger collaborator: a journal file parsed into an in-memory
//! [`Book`] (account tree, transactions, splits), mutated through split
//! reassignment, and written back in one save. A [`Session`] wraps the
//! file plus its lock-file lifecycle.

pub mod book;
pub mod error;
pub mod parser;
pub mod session;
pub mod writer;

pub use book::{Account, AccountId, Book, Split, SplitId, Transaction, TxnId};
pub use error::LedgerError;
pub use parser::parse;
pub use session::Session;
pub use writer::render;
