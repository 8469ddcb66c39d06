//! Value Object Module

pub mod amount;
pub mod decision;
pub mod transaction_status;
pub mod transaction_type;

pub use amount::Amount;
pub use decision::Decision;
pub use transaction_status::TransactionStatus;
pub use transaction_type::TransactionType;
