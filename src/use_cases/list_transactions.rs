//! Get transactions use case: unfiltered history or conjunctive exact-match
//! filtering, both newest first.

use std::sync::Arc;

use crate::domain::Transaction;
use crate::ports::{TransactionFilter, TransactionRepository};
use crate::use_cases::UseCaseError;

#[derive(Clone)]
pub struct ListTransactions {
    repository: Arc<dyn TransactionRepository>,
}

impl ListTransactions {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, UseCaseError> {
        let transactions = if filter.is_empty() {
            self.repository.find_all().await?
        } else {
            self.repository.find_by_filters(&filter).await?
        };

        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryTransactionRepository;
    use crate::use_cases::generate_qr::{GenerateQr, GenerateQrInput};
    use crate::use_cases::process_payment::{ProcessPayment, ProcessPaymentInput};
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    async fn seeded_repository() -> Arc<InMemoryTransactionRepository> {
        let repository = Arc::new(InMemoryTransactionRepository::default());
        let generate = GenerateQr::new(repository.clone());

        for (merchant, amount, partner_ref) in [
            ("MERCHANT01", "10.00", "P-1"),
            ("MERCHANT01", "20.00", "P-2"),
            ("MERCHANT02", "30.00", "P-3"),
        ] {
            generate
                .execute(GenerateQrInput {
                    merchant_id: merchant.to_string(),
                    amount: BigDecimal::from_str(amount).unwrap(),
                    currency: "IDR".to_string(),
                    partner_reference_no: partner_ref.to_string(),
                })
                .await
                .unwrap();
        }

        // Settle the second transaction so a status filter has something to find.
        let settled_ref = repository
            .find_by_partner_reference_number("P-2")
            .await
            .unwrap()
            .reference_number;
        ProcessPayment::new(repository.clone())
            .execute(ProcessPaymentInput {
                reference_no: settled_ref,
                amount: BigDecimal::from_str("20.00").unwrap(),
                status_desc: "SUCCESS".to_string(),
                paid_time: "2026-08-06T09:00:00Z".to_string(),
            })
            .await
            .unwrap();

        repository
    }

    #[tokio::test]
    async fn empty_filter_lists_everything_newest_first() {
        let repository = seeded_repository().await;
        let use_case = ListTransactions::new(repository);

        let transactions = use_case.execute(TransactionFilter::default()).await.unwrap();

        assert_eq!(transactions.len(), 3);
        for pair in transactions.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[tokio::test]
    async fn status_filter_matches_exactly() {
        let repository = seeded_repository().await;
        let use_case = ListTransactions::new(repository);

        let transactions = use_case
            .execute(TransactionFilter {
                status: Some("SUCCESS".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].partner_reference_number, "P-2");
    }

    #[tokio::test]
    async fn filters_combine_conjunctively() {
        let repository = seeded_repository().await;
        let use_case = ListTransactions::new(repository);

        let transactions = use_case
            .execute(TransactionFilter {
                merchant_id: Some("MERCHANT01".to_string()),
                status: Some("PENDING".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(transactions.len(), 1);
        assert_eq!(transactions[0].partner_reference_number, "P-1");

        let none = use_case
            .execute(TransactionFilter {
                merchant_id: Some("MERCHANT02".to_string()),
                status: Some("SUCCESS".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }
}
