//! Application use cases over the transaction store port.

pub mod generate_qr;
pub mod list_transactions;
pub mod process_payment;

pub use generate_qr::GenerateQr;
pub use list_transactions::ListTransactions;
pub use process_payment::ProcessPayment;

use thiserror::Error;

use crate::domain::TransactionStatus;
use crate::ports::RepositoryError;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("transaction not found")]
    NotFound,

    #[error("amount mismatch")]
    AmountMismatch,

    #[error("transaction already settled as {0}")]
    AlreadySettled(TransactionStatus),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
