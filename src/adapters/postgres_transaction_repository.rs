//! Postgres implementation of TransactionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::str::FromStr;

use crate::domain::{Transaction, TransactionStatus};
use crate::ports::{RepositoryError, RepositoryResult, TransactionFilter, TransactionRepository};

const TRANSACTION_COLUMNS: &str = "id, merchant_id, amount, currency, trx_id, \
     partner_reference_number, reference_number, status, transaction_date, \
     paid_date, qr_content, created_at, updated_at, deleted_at";

/// Postgres-backed transaction repository.
#[derive(Clone)]
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    async fn create(&self, transaction: &Transaction) -> RepositoryResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions (
                merchant_id, amount, currency, trx_id,
                partner_reference_number, reference_number, status,
                transaction_date, paid_date, qr_content, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, merchant_id, amount, currency, trx_id,
                partner_reference_number, reference_number, status,
                transaction_date, paid_date, qr_content, created_at, updated_at,
                deleted_at
            "#,
        )
        .bind(&transaction.merchant_id)
        .bind(&transaction.amount)
        .bind(&transaction.currency)
        .bind(&transaction.trx_id)
        .bind(&transaction.partner_reference_number)
        .bind(&transaction.reference_number)
        .bind(transaction.status.as_str())
        .bind(transaction.transaction_date)
        .bind(transaction.paid_date)
        .bind(&transaction.qr_content)
        .bind(transaction.created_at)
        .bind(transaction.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.into_domain()
    }

    async fn find_by_reference_number(
        &self,
        reference_number: &str,
    ) -> RepositoryResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE reference_number = $1 AND deleted_at IS NULL",
        ))
        .bind(reference_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        row.map(TransactionRow::into_domain)
            .ok_or_else(|| RepositoryError::NotFound(reference_number.to_string()))?
    }

    async fn find_by_partner_reference_number(
        &self,
        partner_reference_no: &str,
    ) -> RepositoryResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE partner_reference_number = $1 AND deleted_at IS NULL",
        ))
        .bind(partner_reference_no)
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        row.map(TransactionRow::into_domain)
            .ok_or_else(|| RepositoryError::NotFound(partner_reference_no.to_string()))?
    }

    async fn update(&self, transaction: &Transaction) -> RepositoryResult<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            UPDATE transactions SET
                merchant_id = $2, amount = $3, currency = $4, trx_id = $5,
                partner_reference_number = $6, reference_number = $7,
                status = $8, transaction_date = $9, paid_date = $10,
                qr_content = $11, updated_at = $12
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, merchant_id, amount, currency, trx_id,
                partner_reference_number, reference_number, status,
                transaction_date, paid_date, qr_content, created_at, updated_at,
                deleted_at
            "#,
        )
        .bind(transaction.id)
        .bind(&transaction.merchant_id)
        .bind(&transaction.amount)
        .bind(&transaction.currency)
        .bind(&transaction.trx_id)
        .bind(&transaction.partner_reference_number)
        .bind(&transaction.reference_number)
        .bind(transaction.status.as_str())
        .bind(transaction.transaction_date)
        .bind(transaction.paid_date)
        .bind(&transaction.qr_content)
        .bind(transaction.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?;

        row.map(TransactionRow::into_domain)
            .ok_or_else(|| RepositoryError::NotFound(transaction.id.to_string()))?
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions \
             WHERE deleted_at IS NULL ORDER BY created_at DESC",
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }

    async fn find_by_filters(
        &self,
        filter: &TransactionFilter,
    ) -> RepositoryResult<Vec<Transaction>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE deleted_at IS NULL",
        ));

        if let Some(merchant_id) = &filter.merchant_id {
            builder.push(" AND merchant_id = ").push_bind(merchant_id);
        }
        if let Some(partner_reference_no) = &filter.partner_reference_no {
            builder
                .push(" AND partner_reference_number = ")
                .push_bind(partner_reference_no);
        }
        if let Some(reference_no) = &filter.reference_no {
            builder
                .push(" AND reference_number = ")
                .push_bind(reference_no);
        }
        if let Some(status) = &filter.status {
            builder.push(" AND status = ").push_bind(status);
        }

        builder.push(" ORDER BY created_at DESC");

        let rows = builder
            .build_query_as::<TransactionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        rows.into_iter().map(TransactionRow::into_domain).collect()
    }
}

fn map_write_error(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Conflict(db.message().to_string())
        }
        _ => RepositoryError::Database(err),
    }
}

/// Internal row type for SQLx. Not exposed outside the adapter.
#[derive(Debug, sqlx::FromRow)]
struct TransactionRow {
    id: i64,
    merchant_id: String,
    amount: bigdecimal::BigDecimal,
    currency: String,
    trx_id: Option<String>,
    partner_reference_number: String,
    reference_number: String,
    status: String,
    transaction_date: chrono::DateTime<chrono::Utc>,
    paid_date: Option<chrono::DateTime<chrono::Utc>>,
    qr_content: String,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
    deleted_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl TransactionRow {
    fn into_domain(self) -> RepositoryResult<Transaction> {
        let status = TransactionStatus::from_str(&self.status)
            .map_err(|err| RepositoryError::Decode(err.to_string()))?;

        Ok(Transaction {
            id: self.id,
            merchant_id: self.merchant_id,
            amount: self.amount,
            currency: self.currency,
            trx_id: self.trx_id,
            partner_reference_number: self.partner_reference_number,
            reference_number: self.reference_number,
            status,
            transaction_date: self.transaction_date,
            paid_date: self.paid_date,
            qr_content: self.qr_content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        })
    }
}
