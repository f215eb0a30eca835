//! Journal file writer
//!
//! Renders a [`Book`] back to journal text in one pass: account
//! declarations in creation order, then transactions in file order.
//! The output parses back to an equivalent book.

use crate::book::Book;
use fiximports_utils::format_minor;

/// Render the whole book as journal text
pub fn render(book: &Book) -> String {
    let mut out = String::new();

    for account in book.account_ids() {
        out.push_str("account ");
        out.push_str(&book.full_name(account));
        out.push('\n');
    }

    for txn_id in book.transaction_ids() {
        let txn = book.transaction(txn_id);
        out.push('\n');
        out.push_str(&txn.date.format("%Y-%m-%d").to_string());
        out.push(' ');
        out.push_str(&txn.description);
        if !txn.memo.is_empty() {
            out.push_str("  ; ");
            out.push_str(&txn.memo);
        }
        out.push('\n');

        for &split_id in txn.splits() {
            let split = book.split(split_id);
            out.push_str("    ");
            out.push_str(&book.full_name(split.account()));
            out.push_str("    ");
            out.push_str(&format_minor(split.amount));
            if let Some(currency) = &split.currency {
                out.push(' ');
                out.push_str(currency);
            }
            out.push('\n');
        }
    }

    out
}

// ==================== Tests ====================
