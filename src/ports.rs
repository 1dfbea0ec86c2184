//! Persistence port consumed by the use cases.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Transaction;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("transaction not found: {0}")]
    NotFound(String),

    #[error("uniqueness violation: {0}")]
    Conflict(String),

    #[error("corrupt row: {0}")]
    Decode(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Conjunctive exact-match filters for transaction listing. Every provided
/// field narrows the result set; an empty filter means "list everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub merchant_id: Option<String>,
    pub partner_reference_no: Option<String>,
    pub reference_no: Option<String>,
    pub status: Option<String>,
}

impl TransactionFilter {
    pub fn is_empty(&self) -> bool {
        self.merchant_id.is_none()
            && self.partner_reference_no.is_none()
            && self.reference_no.is_none()
            && self.status.is_none()
    }
}

/// Store abstraction over transactions. Lookups signal `NotFound` distinctly
/// so callers can map it to a domain-level outcome; soft-deleted rows are
/// invisible to every operation.
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Persists a new transaction and returns it with its store-assigned id.
    async fn create(&self, transaction: &Transaction) -> RepositoryResult<Transaction>;

    async fn find_by_reference_number(&self, reference_number: &str)
        -> RepositoryResult<Transaction>;

    async fn find_by_partner_reference_number(
        &self,
        partner_reference_no: &str,
    ) -> RepositoryResult<Transaction>;

    /// Full-row update keyed by the transaction's id.
    async fn update(&self, transaction: &Transaction) -> RepositoryResult<Transaction>;

    /// All live transactions, newest first.
    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>>;

    /// Live transactions matching every provided filter, newest first.
    async fn find_by_filters(&self, filter: &TransactionFilter)
        -> RepositoryResult<Vec<Transaction>>;
}
