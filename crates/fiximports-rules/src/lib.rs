//! Categorization rules
//!
//! The rule model and the tab-separated rules-file parser. Rules are an
//! ordered list; evaluation is first-match-wins, so file order matters.

pub mod error;
pub mod parser;
pub mod rule;

pub use error::RuleError;
pub use parser::{load_rules, parse_rule};
pub use rule::{Rule, AMOUNT_MAX};
