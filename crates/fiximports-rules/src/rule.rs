//! Categorization rule model

use regex::Regex;

pub use fiximports_utils::AMOUNT_MAX;

/// One categorization rule from the rules file
///
/// Rules are ordered: the first rule whose pattern matches the
/// transaction text and whose range covers the amount wins. Bounds are
/// inclusive, in minor currency units; an omitted maximum (or one not
/// greater than its minimum) is stored as [`AMOUNT_MAX`].
#[derive(Debug, Clone)]
pub struct Rule {
    /// Compiled pattern searched (unanchored) in the transaction text
    pub pattern: Regex,
    /// Target account path segments (colon-separated in the file)
    pub account_path: Vec<String>,
    /// Lower bound applied when the amount is negative (a debit)
    pub debit_min: i64,
    /// Upper bound applied when the amount is negative
    pub debit_max: i64,
    /// Lower bound applied when the amount is non-negative (a credit)
    pub credit_min: i64,
    /// Upper bound applied when the amount is non-negative
    pub credit_max: i64,
}

impl Rule {
    /// Test whether the pattern occurs anywhere in `text`
    pub fn matches_text(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Test whether `amount` (signed, minor units) falls in the range
    /// for its sign: negative amounts are debits and are compared by
    /// absolute value, non-negative amounts are credits.
    pub fn matches_amount(&self, amount: i64) -> bool {
        if amount < 0 {
            let debit = -amount;
            debit >= self.debit_min && debit <= self.debit_max
        } else {
            amount >= self.credit_min && amount <= self.credit_max
        }
    }
}
