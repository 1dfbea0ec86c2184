//! Process payment use case: settles a PENDING transaction from an
//! asynchronous confirmation callback.

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::Transaction;
use crate::ports::{RepositoryError, TransactionRepository};
use crate::use_cases::UseCaseError;
use crate::validation;

#[derive(Debug)]
pub struct ProcessPaymentInput {
    pub reference_no: String,
    pub amount: BigDecimal,
    pub status_desc: String,
    pub paid_time: String,
}

#[derive(Clone)]
pub struct ProcessPayment {
    repository: Arc<dyn TransactionRepository>,
}

impl ProcessPayment {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: ProcessPaymentInput) -> Result<Transaction, UseCaseError> {
        let mut transaction = match self
            .repository
            .find_by_reference_number(&input.reference_no)
            .await
        {
            Ok(transaction) => transaction,
            Err(RepositoryError::NotFound(_)) => return Err(UseCaseError::NotFound),
            Err(err) => return Err(err.into()),
        };

        if transaction.amount != input.amount {
            return Err(UseCaseError::AmountMismatch);
        }

        let status = validation::validate_terminal_status("transactionStatusDesc", &input.status_desc)?;

        if transaction.status.is_terminal() {
            return Err(UseCaseError::AlreadySettled(transaction.status));
        }

        // Malformed paid times are tolerated; the confirmation still lands
        // with the gateway's own clock.
        let paid_date = DateTime::parse_from_rfc3339(&input.paid_time)
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now());

        transaction.status = status;
        transaction.paid_date = Some(paid_date);
        transaction.updated_at = Utc::now();

        let updated = self.repository.update(&transaction).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionRepository;
    use crate::domain::TransactionStatus;
    use crate::use_cases::generate_qr::{GenerateQr, GenerateQrInput};
    use std::str::FromStr;

    async fn seeded() -> (ProcessPayment, Arc<InMemoryTransactionRepository>, Transaction) {
        let repository = Arc::new(InMemoryTransactionRepository::default());
        let seeded = GenerateQr::new(repository.clone())
            .execute(GenerateQrInput {
                merchant_id: "MERCHANT01".to_string(),
                amount: BigDecimal::from_str("100.50").unwrap(),
                currency: "IDR".to_string(),
                partner_reference_no: "P-1000".to_string(),
            })
            .await
            .unwrap();
        (ProcessPayment::new(repository.clone()), repository, seeded)
    }

    fn confirmation(reference_no: &str, amount: &str, status: &str, paid_time: &str) -> ProcessPaymentInput {
        ProcessPaymentInput {
            reference_no: reference_no.to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            status_desc: status.to_string(),
            paid_time: paid_time.to_string(),
        }
    }

    #[tokio::test]
    async fn settles_a_pending_transaction() {
        let (use_case, repository, seed) = seeded().await;

        let updated = use_case
            .execute(confirmation(
                &seed.reference_number,
                "100.50",
                "SUCCESS",
                "2026-08-06T10:15:30+07:00",
            ))
            .await
            .unwrap();

        assert_eq!(updated.status, TransactionStatus::Success);
        let expected = DateTime::parse_from_rfc3339("2026-08-06T10:15:30+07:00")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(updated.paid_date, Some(expected));

        let stored = repository
            .find_by_reference_number(&seed.reference_number)
            .await
            .unwrap();
        assert_eq!(stored.status, TransactionStatus::Success);
        assert_eq!(stored.paid_date, Some(expected));
    }

    #[tokio::test]
    async fn unknown_reference_is_not_found() {
        let (use_case, _repository, _seed) = seeded().await;

        let err = use_case
            .execute(confirmation("A0000000-00", "100.50", "SUCCESS", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::NotFound));
    }

    #[tokio::test]
    async fn amount_mismatch_leaves_transaction_untouched() {
        let (use_case, repository, seed) = seeded().await;

        let err = use_case
            .execute(confirmation(
                &seed.reference_number,
                "999.00",
                "SUCCESS",
                "2026-08-06T10:15:30Z",
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, UseCaseError::AmountMismatch));

        let stored = repository
            .find_by_reference_number(&seed.reference_number)
            .await
            .unwrap();
        assert_eq!(stored.status, TransactionStatus::Pending);
        assert!(stored.paid_date.is_none());
    }

    #[tokio::test]
    async fn amount_comparison_normalizes_scale() {
        let (use_case, _repository, seed) = seeded().await;

        // "100.5" parses to the same decimal value as the stored "100.50".
        let updated = use_case
            .execute(confirmation(
                &seed.reference_number,
                "100.5",
                "SUCCESS",
                "2026-08-06T10:15:30Z",
            ))
            .await
            .unwrap();
        assert_eq!(updated.status, TransactionStatus::Success);
    }

    #[tokio::test]
    async fn non_terminal_status_is_rejected() {
        let (use_case, repository, seed) = seeded().await;

        for status in ["PENDING", "PAID", "success"] {
            let err = use_case
                .execute(confirmation(
                    &seed.reference_number,
                    "100.50",
                    status,
                    "2026-08-06T10:15:30Z",
                ))
                .await
                .unwrap_err();
            assert!(matches!(err, UseCaseError::Validation(_)));
        }

        let stored = repository
            .find_by_reference_number(&seed.reference_number)
            .await
            .unwrap();
        assert_eq!(stored.status, TransactionStatus::Pending);
    }

    #[tokio::test]
    async fn settled_transaction_rejects_reconfirmation() {
        let (use_case, repository, seed) = seeded().await;

        use_case
            .execute(confirmation(
                &seed.reference_number,
                "100.50",
                "SUCCESS",
                "2026-08-06T10:15:30Z",
            ))
            .await
            .unwrap();

        let err = use_case
            .execute(confirmation(
                &seed.reference_number,
                "100.50",
                "FAILED",
                "2026-08-06T11:00:00Z",
            ))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UseCaseError::AlreadySettled(TransactionStatus::Success)
        ));

        let stored = repository
            .find_by_reference_number(&seed.reference_number)
            .await
            .unwrap();
        assert_eq!(stored.status, TransactionStatus::Success);
    }

    #[tokio::test]
    async fn malformed_paid_time_falls_back_to_now() {
        let (use_case, _repository, seed) = seeded().await;

        let before = Utc::now();
        let updated = use_case
            .execute(confirmation(
                &seed.reference_number,
                "100.50",
                "SUCCESS",
                "last tuesday",
            ))
            .await
            .unwrap();
        let after = Utc::now();

        let paid = updated.paid_date.expect("paid date set");
        assert!(paid >= before && paid <= after);
    }
}
