//! Rule matching engine
//!
//! Walks the rule list in file order and returns the target account of
//! the first rule whose pattern occurs in the transaction text and whose
//! debit/credit range covers the amount.

use fiximports_ledger::{AccountId, Book};
use fiximports_rules::Rule;

use crate::error::CoreError;

/// Resolve a sequence of path segments against the account tree
///
/// Lookup is exact, case-sensitive, one segment at a time starting at
/// `root`. A missing segment logs a warning and yields `None`.
pub fn account_from_path(book: &Book, root: AccountId, path: &[String]) -> Option<AccountId> {
    let mut current = root;
    for segment in path {
        match book.child_by_name(current, segment) {
            Some(child) => current = child,
            None => {
                log::warn!("path {} could not be found", path.join(":"));
                return None;
            }
        }
    }
    Some(current)
}

/// Resolve a colon-separated account path from the book root
pub fn resolve_account(book: &Book, path: &str) -> Result<AccountId, CoreError> {
    let segments: Vec<String> = path.split(':').map(|s| s.to_string()).collect();
    account_from_path(book, book.root(), &segments).ok_or_else(|| CoreError::AccountNotFound {
        path: path.to_string(),
    })
}

/// Find the target account for a transaction, first-match-wins
///
/// `amount` is signed, in minor units: negative amounts are debits and
/// compared by absolute value against the debit range, non-negative
/// amounts against the credit range. A rule whose pattern matches but
/// whose range does not is skipped in favor of later rules.
///
/// When the winning rule's target path cannot be resolved, the search
/// ends with `None` instead of trying later rules. That mirrors the
/// long-standing behavior rule authors depend on, surprising as it is.
pub fn find_target(
    search_text: &str,
    amount: i64,
    rules: &[Rule],
    book: &Book,
    root: AccountId,
) -> Option<AccountId> {
    for rule in rules {
        if !rule.matches_text(search_text) {
            continue;
        }
        if amount < 0 {
            log::debug!("Is a debit: {}", search_text);
        } else {
            log::debug!("Is a credit: {}", search_text);
        }
        if !rule.matches_amount(amount) {
            continue;
        }
        log::debug!(
            "{:?} for {} matches pattern {:?}",
            search_text,
            amount,
            rule.pattern.as_str()
        );
        return match account_from_path(book, root, &rule.account_path) {
            Some(account) => Some(account),
            None => {
                log::warn!(
                    "Can't find account for path {}",
                    rule.account_path.join(":")
                );
                None
            }
        };
    }
    None
}

// ==================== Tests ====================
