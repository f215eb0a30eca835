//! Journal file parser
//!
//! Line-based parser for the plain-text journal format:
//!
//! ```text
//! ; comment
//! account Assets:Current Assets:Checking Account
//!
//! 2023-01-15 Random Store  ; optional memo
//!     Assets:Current Assets:Checking Account    5.00
//!     Imbalance-USD    -5.00 USD
//! ```
//!
//! `account` lines declare an account path. A dated header line starts a
//! transaction; its postings follow on indented lines, with two or more
//! spaces between the account name and the signed amount. Account names
//! may contain spaces, which is why a single space cannot delimit them.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::book::Book;
use crate::error::LedgerError;
use fiximports_utils::decimal_to_minor;

static ACCOUNT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^account\s+(.+?)\s*$").unwrap());

static TXN_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})\s+([^;]+?)\s*(?:;\s*(.*?))?\s*$").unwrap());

static POSTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s{2,}(-?\d+(?:\.\d+)?)(?:\s+([A-Z]{3}))?\s*$").unwrap());

/// Parse journal text into a [`Book`]
///
/// Blank lines and `;`/`#` comments are ignored. Anything else that is
/// not an account declaration, a transaction header, or a posting is a
/// syntax error carrying the 1-indexed line number.
pub fn parse(content: &str) -> Result<Book, LedgerError> {
    let mut book = Book::new();
    let mut current = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
            continue;
        }

        // Indented lines are postings of the transaction being read
        if raw.starts_with(' ') || raw.starts_with('\t') {
            let txn = current.ok_or_else(|| LedgerError::Syntax {
                line,
                message: format!("posting outside of a transaction: {:?}", trimmed),
            })?;
            let caps = POSTING.captures(trimmed).ok_or_else(|| LedgerError::Syntax {
                line,
                message: format!("malformed posting: {:?}", trimmed),
            })?;
            let account = book.ensure_account(caps.get(1).unwrap().as_str());
            let amount = parse_amount(caps.get(2).unwrap().as_str()).ok_or_else(|| {
                LedgerError::Syntax {
                    line,
                    message: format!("unreadable amount: {:?}", trimmed),
                }
            })?;
            let currency = caps.get(3).map(|m| m.as_str().to_string());
            book.add_split(txn, account, amount, currency);
        } else if let Some(caps) = ACCOUNT_LINE.captures(trimmed) {
            book.ensure_account(caps.get(1).unwrap().as_str());
            current = None;
        } else if let Some(caps) = TXN_HEADER.captures(trimmed) {
            let date = NaiveDate::parse_from_str(caps.get(1).unwrap().as_str(), "%Y-%m-%d")
                .map_err(|e| LedgerError::Syntax {
                    line,
                    message: format!("bad date: {}", e),
                })?;
            let description = caps.get(2).unwrap().as_str().to_string();
            let memo = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();
            current = Some(book.add_transaction(date, description, memo));
        } else {
            return Err(LedgerError::Syntax {
                line,
                message: format!("unrecognized line: {:?}", trimmed),
            });
        }
    }

    Ok(book)
}

/// Signed decimal text to minor units (×100, truncating)
fn parse_amount(text: &str) -> Option<i64> {
    let value = Decimal::from_str(text).ok()?;
    decimal_to_minor(value)
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
; sample journal
account Assets:Current Assets:Checking Account
account Imbalance-USD

2023-01-15 Random Store  ; weekly shop
    Assets:Current Assets:Checking Account    5.00
    Imbalance-USD    -5.00 USD

2023-01-20 PIZZA PALACE
    Assets:Current Assets:Checking Account    -15.50
    Imbalance-USD    15.50
";

    #[test]
    fn test_parse_sample_journal() {
        let book = parse(SAMPLE).unwrap();
        assert_eq!(book.transaction_ids().count(), 2);

        let assets = book.child_by_name(book.root(), "Assets").unwrap();
        let current = book.child_by_name(assets, "Current Assets").unwrap();
        let checking = book.child_by_name(current, "Checking Account").unwrap();
        assert_eq!(book.account(checking).splits().len(), 2);
    }

    #[test]
    fn test_parse_header_fields() {
        let book = parse(SAMPLE).unwrap();
        let first = book.transaction_ids().next().unwrap();
        let txn = book.transaction(first);
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(txn.description, "Random Store");
        assert_eq!(txn.memo, "weekly shop");
    }

    #[test]
    fn test_parse_header_without_memo() {
        let book = parse(SAMPLE).unwrap();
        let second = book.transaction_ids().nth(1).unwrap();
        let txn = book.transaction(second);
        assert_eq!(txn.description, "PIZZA PALACE");
        assert_eq!(txn.memo, "");
    }

    #[test]
    fn test_amounts_in_minor_units() {
        let book = parse(SAMPLE).unwrap();
        let first = book.transaction_ids().next().unwrap();
        let splits = book.transaction(first).splits();
        assert_eq!(book.split(splits[0]).amount, 500);
        assert_eq!(book.split(splits[1]).amount, -500);
        assert_eq!(book.split(splits[1]).currency.as_deref(), Some("USD"));
    }

    #[test]
    fn test_posting_outside_transaction_is_error() {
        let result = parse("    Assets:Cash    5.00\n");
        assert!(matches!(result, Err(LedgerError::Syntax { line: 1, .. })));
    }

    #[test]
    fn test_malformed_posting_is_error() {
        let input = "2023-01-15 Shop\n    Assets:Cash five dollars\n";
        let result = parse(input);
        assert!(matches!(result, Err(LedgerError::Syntax { line: 2, .. })));
    }

    #[test]
    fn test_unrecognized_line_is_error() {
        let result = parse("hello world\n");
        assert!(matches!(result, Err(LedgerError::Syntax { line: 1, .. })));
    }

    #[test]
    fn test_empty_input() {
        let book = parse("").unwrap();
        assert_eq!(book.transaction_ids().count(), 0);
        assert_eq!(book.account_ids().count(), 0);
    }
}
