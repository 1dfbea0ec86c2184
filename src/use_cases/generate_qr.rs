//! Generate QR use case: validates the amount, mints a reference number and
//! QR payload, and persists a PENDING transaction.

use bigdecimal::BigDecimal;
use std::sync::Arc;

use crate::domain::Transaction;
use crate::ports::TransactionRepository;
use crate::qr;
use crate::use_cases::UseCaseError;
use crate::validation;

#[derive(Debug)]
pub struct GenerateQrInput {
    pub merchant_id: String,
    pub amount: BigDecimal,
    pub currency: String,
    pub partner_reference_no: String,
}

#[derive(Clone)]
pub struct GenerateQr {
    repository: Arc<dyn TransactionRepository>,
}

impl GenerateQr {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: GenerateQrInput) -> Result<Transaction, UseCaseError> {
        validation::validate_positive_amount(&input.amount)?;

        let reference_number = qr::new_reference_number();
        let qr_content = qr::build_qr_content(&input.merchant_id, &reference_number, &input.amount);

        let transaction = Transaction::new(
            input.merchant_id,
            input.amount,
            input.currency,
            input.partner_reference_no,
            reference_number,
            qr_content,
        );

        let created = self.repository.create(&transaction).await?;

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionRepository;
    use crate::domain::TransactionStatus;
    use crate::ports::RepositoryError;
    use std::str::FromStr;

    fn use_case() -> (GenerateQr, Arc<InMemoryTransactionRepository>) {
        let repository = Arc::new(InMemoryTransactionRepository::default());
        (GenerateQr::new(repository.clone()), repository)
    }

    fn input(amount: &str, partner_ref: &str) -> GenerateQrInput {
        GenerateQrInput {
            merchant_id: "MERCHANT01".to_string(),
            amount: BigDecimal::from_str(amount).unwrap(),
            currency: "IDR".to_string(),
            partner_reference_no: partner_ref.to_string(),
        }
    }

    #[tokio::test]
    async fn persists_a_pending_transaction() {
        let (use_case, repository) = use_case();

        let created = use_case.execute(input("100.5", "P-1000")).await.unwrap();

        assert_eq!(created.status, TransactionStatus::Pending);
        assert!(created.paid_date.is_none());
        assert!(created.id > 0);
        assert!(created.reference_number.starts_with('A'));
        assert_eq!(created.reference_number.len(), 11);
        assert!(created.qr_content.contains("MERCHANT01"));
        assert!(created.qr_content.contains("100.50"));

        let stored = repository
            .find_by_reference_number(&created.reference_number)
            .await
            .unwrap();
        assert_eq!(stored.id, created.id);
    }

    #[tokio::test]
    async fn rejects_zero_amount_before_persisting() {
        let (use_case, repository) = use_case();

        let err = use_case.execute(input("0", "P-1000")).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejects_negative_amount_before_persisting() {
        let (use_case, repository) = use_case();

        let err = use_case.execute(input("-10.00", "P-1000")).await.unwrap_err();
        assert!(matches!(err, UseCaseError::Validation(_)));
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_partner_reference_fails_creation() {
        let (use_case, _repository) = use_case();

        use_case.execute(input("10.00", "P-1000")).await.unwrap();
        let err = use_case.execute(input("20.00", "P-1000")).await.unwrap_err();

        assert!(matches!(
            err,
            UseCaseError::Repository(RepositoryError::Conflict(_))
        ));
    }
}
