pub mod account;
pub mod common;
pub mod purchase;

pub use account::{Account, AccountKind};
pub use purchase::PlannedPurchase;
