//! In-memory implementation of TransactionRepository.
//!
//! Mirrors the Postgres adapter's observable semantics (uniqueness among
//! live rows, soft-delete filtering, newest-first ordering) so use cases and
//! the HTTP surface can be exercised without a database.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::Transaction;
use crate::ports::{RepositoryError, RepositoryResult, TransactionFilter, TransactionRepository};

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    transactions: Vec<Transaction>,
    next_id: i64,
}

impl Inner {
    fn live(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.deleted_at.is_none())
    }
}

fn newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> RepositoryResult<Transaction> {
        let mut inner = self.inner.lock().expect("repository lock poisoned");

        if inner
            .live()
            .any(|existing| existing.reference_number == transaction.reference_number)
        {
            return Err(RepositoryError::Conflict(format!(
                "duplicate reference_number: {}",
                transaction.reference_number
            )));
        }
        if inner.live().any(|existing| {
            existing.partner_reference_number == transaction.partner_reference_number
        }) {
            return Err(RepositoryError::Conflict(format!(
                "duplicate partner_reference_number: {}",
                transaction.partner_reference_number
            )));
        }

        inner.next_id += 1;
        let mut created = transaction.clone();
        created.id = inner.next_id;
        inner.transactions.push(created.clone());

        Ok(created)
    }

    async fn find_by_reference_number(
        &self,
        reference_number: &str,
    ) -> RepositoryResult<Transaction> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let found = inner
            .live()
            .find(|transaction| transaction.reference_number == reference_number)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(reference_number.to_string()));
        found
    }

    async fn find_by_partner_reference_number(
        &self,
        partner_reference_no: &str,
    ) -> RepositoryResult<Transaction> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let found = inner
            .live()
            .find(|transaction| transaction.partner_reference_number == partner_reference_no)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(partner_reference_no.to_string()));
        found
    }

    async fn update(&self, transaction: &Transaction) -> RepositoryResult<Transaction> {
        let mut inner = self.inner.lock().expect("repository lock poisoned");
        let slot = inner
            .transactions
            .iter_mut()
            .find(|existing| existing.id == transaction.id && existing.deleted_at.is_none())
            .ok_or_else(|| RepositoryError::NotFound(transaction.id.to_string()))?;

        *slot = transaction.clone();
        Ok(transaction.clone())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let mut transactions: Vec<Transaction> = inner.live().cloned().collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }

    async fn find_by_filters(
        &self,
        filter: &TransactionFilter,
    ) -> RepositoryResult<Vec<Transaction>> {
        let inner = self.inner.lock().expect("repository lock poisoned");
        let mut transactions: Vec<Transaction> = inner
            .live()
            .filter(|transaction| {
                filter
                    .merchant_id
                    .as_ref()
                    .map_or(true, |merchant_id| &transaction.merchant_id == merchant_id)
                    && filter.partner_reference_no.as_ref().map_or(true, |partner| {
                        &transaction.partner_reference_number == partner
                    })
                    && filter
                        .reference_no
                        .as_ref()
                        .map_or(true, |reference| &transaction.reference_number == reference)
                    && filter
                        .status
                        .as_ref()
                        .map_or(true, |status| transaction.status.as_str() == status)
            })
            .cloned()
            .collect();
        newest_first(&mut transactions);
        Ok(transactions)
    }
}
