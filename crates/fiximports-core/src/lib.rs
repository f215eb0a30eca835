//! Rule matching engine and imbalance-fixing pass
//!
//! Given a loaded rule list and an open book, [`fix_account`] makes one
//! pass over the account under repair and moves matching imbalance
//! splits to their rule targets. Nothing here touches the filesystem.

pub mod error;
pub mod fixer;
pub mod matcher;

pub use error::CoreError;
pub use fixer::{fix_account, FixOptions, FixStats};
pub use matcher::{account_from_path, find_target, resolve_account};
