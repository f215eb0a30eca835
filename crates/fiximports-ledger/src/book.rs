//! In-memory ledger book
//!
//! Arena-style store for the account tree, transactions, and splits.
//! Handles are plain indices; a split belongs to exactly one transaction
//! and one account at a time, and reassigning it keeps both sides'
//! ordered lists consistent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Handle to an account in a [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId(usize);

/// Handle to a transaction in a [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxnId(usize);

/// Handle to a split in a [`Book`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitId(usize);

/// One node of the account tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Bare name of this node (one path segment, may contain spaces)
    pub name: String,
    /// Parent account; `None` only for the root
    pub parent: Option<AccountId>,
    children: Vec<AccountId>,
    splits: Vec<SplitId>,
}

impl Account {
    /// Child accounts in creation order
    pub fn children(&self) -> &[AccountId] {
        &self.children
    }

    /// Splits currently assigned to this account, in creation order
    pub fn splits(&self) -> &[SplitId] {
        &self.splits
    }
}

/// One transaction: a dated description/memo owning an ordered set of splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    pub memo: String,
    splits: Vec<SplitId>,
}

impl Transaction {
    /// All splits of this transaction, across accounts
    pub fn splits(&self) -> &[SplitId] {
        &self.splits
    }
}

/// One leg of a transaction, with a signed amount in minor units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Split {
    pub transaction: TxnId,
    account: AccountId,
    pub amount: i64,
    pub currency: Option<String>,
}

impl Split {
    /// The account this split is currently assigned to
    pub fn account(&self) -> AccountId {
        self.account
    }
}

/// The whole ledger: account tree plus transactions and their splits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    splits: Vec<Split>,
}

impl Book {
    /// Create an empty book containing only the root account
    pub fn new() -> Self {
        Book {
            accounts: vec![Account {
                name: String::new(),
                parent: None,
                children: Vec::new(),
                splits: Vec::new(),
            }],
            transactions: Vec::new(),
            splits: Vec::new(),
        }
    }

    /// The root of the account tree
    pub fn root(&self) -> AccountId {
        AccountId(0)
    }

    pub fn account(&self, id: AccountId) -> &Account {
        &self.accounts[id.0]
    }

    pub fn transaction(&self, id: TxnId) -> &Transaction {
        &self.transactions[id.0]
    }

    pub fn split(&self, id: SplitId) -> &Split {
        &self.splits[id.0]
    }

    /// Look up a direct child by exact, case-sensitive name
    pub fn child_by_name(&self, parent: AccountId, name: &str) -> Option<AccountId> {
        self.accounts[parent.0]
            .children
            .iter()
            .copied()
            .find(|&child| self.accounts[child.0].name == name)
    }

    /// Find or create the account at a colon-separated path, creating
    /// intermediate nodes as needed
    pub fn ensure_account(&mut self, full_name: &str) -> AccountId {
        let mut current = self.root();
        for segment in full_name.split(':') {
            current = match self.child_by_name(current, segment) {
                Some(child) => child,
                None => {
                    let id = AccountId(self.accounts.len());
                    self.accounts.push(Account {
                        name: segment.to_string(),
                        parent: Some(current),
                        children: Vec::new(),
                        splits: Vec::new(),
                    });
                    self.accounts[current.0].children.push(id);
                    id
                }
            };
        }
        current
    }

    /// Colon-separated path of an account from the root
    pub fn full_name(&self, id: AccountId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(acct) = current {
            let account = &self.accounts[acct.0];
            if account.parent.is_some() {
                segments.push(account.name.as_str());
            }
            current = account.parent;
        }
        segments.reverse();
        segments.join(":")
    }

    /// All accounts except the root, in creation order
    pub fn account_ids(&self) -> impl Iterator<Item = AccountId> + '_ {
        (1..self.accounts.len()).map(AccountId)
    }

    /// All transactions in file order
    pub fn transaction_ids(&self) -> impl Iterator<Item = TxnId> + '_ {
        (0..self.transactions.len()).map(TxnId)
    }

    pub fn add_transaction(&mut self, date: NaiveDate, description: String, memo: String) -> TxnId {
        let id = TxnId(self.transactions.len());
        self.transactions.push(Transaction {
            date,
            description,
            memo,
            splits: Vec::new(),
        });
        id
    }

    pub fn add_split(
        &mut self,
        transaction: TxnId,
        account: AccountId,
        amount: i64,
        currency: Option<String>,
    ) -> SplitId {
        let id = SplitId(self.splits.len());
        self.splits.push(Split {
            transaction,
            account,
            amount,
            currency,
        });
        self.transactions[transaction.0].splits.push(id);
        self.accounts[account.0].splits.push(id);
        id
    }

    /// Reassign a split to a different account
    pub fn set_split_account(&mut self, split: SplitId, account: AccountId) {
        let old = self.splits[split.0].account;
        if old == account {
            return;
        }
        self.accounts[old.0].splits.retain(|&s| s != split);
        self.accounts[account.0].splits.push(split);
        self.splits[split.0].account = account;
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
    }

    #[test]
    fn test_ensure_account_builds_tree() {
        let mut book = Book::new();
        let checking = book.ensure_account("Assets:Current Assets:Checking Account");

        let assets = book.child_by_name(book.root(), "Assets").unwrap();
        let current = book.child_by_name(assets, "Current Assets").unwrap();
        assert_eq!(book.child_by_name(current, "Checking Account"), Some(checking));
        assert_eq!(book.full_name(checking), "Assets:Current Assets:Checking Account");
    }

    #[test]
    fn test_ensure_account_is_idempotent() {
        let mut book = Book::new();
        let first = book.ensure_account("Expenses:Dining");
        let second = book.ensure_account("Expenses:Dining");
        assert_eq!(first, second);
        assert_eq!(book.account_ids().count(), 2);
    }

    #[test]
    fn test_child_lookup_is_case_sensitive() {
        let mut book = Book::new();
        book.ensure_account("Expenses");
        assert!(book.child_by_name(book.root(), "Expenses").is_some());
        assert!(book.child_by_name(book.root(), "expenses").is_none());
    }

    #[test]
    fn test_set_split_account_moves_between_lists() {
        let mut book = Book::new();
        let checking = book.ensure_account("Assets:Checking");
        let imbalance = book.ensure_account("Imbalance-USD");
        let dining = book.ensure_account("Expenses:Dining");

        let txn = book.add_transaction(date(), "Pizza place".to_string(), String::new());
        book.add_split(txn, checking, -1500, None);
        let split = book.add_split(txn, imbalance, 1500, None);

        assert_eq!(book.account(imbalance).splits(), &[split]);
        book.set_split_account(split, dining);

        assert!(book.account(imbalance).splits().is_empty());
        assert_eq!(book.account(dining).splits(), &[split]);
        assert_eq!(book.split(split).account(), dining);
        // The transaction still owns both splits
        assert_eq!(book.transaction(txn).splits().len(), 2);
    }

    #[test]
    fn test_set_split_account_same_account_is_noop() {
        let mut book = Book::new();
        let checking = book.ensure_account("Assets:Checking");
        let txn = book.add_transaction(date(), "x".to_string(), String::new());
        let split = book.add_split(txn, checking, 100, None);

        book.set_split_account(split, checking);
        assert_eq!(book.account(checking).splits(), &[split]);
    }
}
