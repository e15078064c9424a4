//! Transaction storage
//!
//! The booking engine only writes transactions from payment capture flows
//! that live above this crate; here they are read for report aggregation.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;
use serene_booking::transaction::Transaction;
use serene_booking::Result;
use uuid::Uuid;

/// Transaction repository trait.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction>;

    async fn list_all(&self) -> Result<Vec<Transaction>>;

    /// Transactions whose date falls within the inclusive range.
    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Transaction>>;
}

/// In-memory transaction repository implementation
pub struct InMemoryTransactionRepository {
    transactions: RwLock<HashMap<Uuid, Transaction>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryTransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> Result<Transaction> {
        let mut transactions = self.transactions.write().unwrap();
        transactions.insert(transaction.id, transaction.clone());
        Ok(transaction.clone())
    }

    async fn list_all(&self) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().unwrap();
        Ok(transactions.values().cloned().collect())
    }

    async fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        let transactions = self.transactions.read().unwrap();
        Ok(transactions
            .values()
            .filter(|t| t.date >= start && t.date <= end)
            .cloned()
            .collect())
    }
}
