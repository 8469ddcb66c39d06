//! Entity Module

pub mod balance;
pub mod notification;
pub mod transaction;

pub use balance::Balance;
pub use notification::EmailNotification;
pub use transaction::Transaction;
