//! Account-fixing pass
//!
//! Enumerates the splits of the account under repair, and for every
//! sibling split sitting in an imbalance account, asks the matching
//! engine for a better home and reassigns it there.

use regex::Regex;
use serde::{Deserialize, Serialize};

use fiximports_ledger::{AccountId, Book, SplitId};
use fiximports_rules::Rule;

use crate::matcher::find_target;

/// Options for one fixing run, built once from the command line
#[derive(Debug, Clone)]
pub struct FixOptions {
    /// Pattern an account's bare name must start with to count as an
    /// imbalance account
    pub imbalance_pattern: Regex,
    /// Match rules against the transaction memo instead of its description
    pub use_memo: bool,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixStats {
    /// Splits visited in the account under repair
    pub total: usize,
    /// Sibling splits whose account matched the imbalance pattern
    pub imbalance: usize,
    /// Splits actually reassigned
    pub fixed: usize,
}

impl std::fmt::Display for FixStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total splits={}, imbalance={}, fixed={}",
            self.total, self.imbalance, self.fixed
        )
    }
}

/// Run the fixing pass over every split of `origin`
///
/// For each of the origin's splits, every split of the parent
/// transaction is inspected; the ones in an imbalance account are
/// matched using the transaction's description (or memo) and the
/// *origin* split's amount, and moved to the rule target if one is
/// found. Reassignments happen in memory only; persisting them is the
/// caller's decision.
pub fn fix_account(
    book: &mut Book,
    origin: AccountId,
    rules: &[Rule],
    options: &FixOptions,
) -> FixStats {
    let mut stats = FixStats::default();
    let root = book.root();

    let origin_splits: Vec<SplitId> = book.account(origin).splits().to_vec();
    for split_id in origin_splits {
        stats.total += 1;
        let split = book.split(split_id);
        let amount = split.amount;
        let txn_id = split.transaction;

        let txn = book.transaction(txn_id);
        let date = txn.date;
        let description = txn.description.clone();
        let memo = txn.memo.clone();
        let siblings: Vec<SplitId> = txn.splits().to_vec();

        let search_text = if options.use_memo { &memo } else { &description };

        for sibling in siblings {
            let name = book.account(book.split(sibling).account()).name.clone();
            log::debug!("{}: {} => {}", date, description, name);
            if !prefix_match(&options.imbalance_pattern, &name) {
                continue;
            }
            stats.imbalance += 1;

            if let Some(target) = find_target(search_text, amount, rules, book, root) {
                log::debug!("\tChanging account to: {}", book.account(target).name);
                book.set_split_account(sibling, target);
                stats.fixed += 1;
            }
        }
    }

    stats
}

/// Prefix match: the pattern must match starting at the first character
/// of the name, with no anchor at the end
fn prefix_match(pattern: &Regex, name: &str) -> bool {
    pattern.find(name).is_some_and(|m| m.start() == 0)
}

// ==================== Tests ====================
