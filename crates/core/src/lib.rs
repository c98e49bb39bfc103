pub mod category;
pub mod transaction;

pub use category::{default_categories, display_name, Category, CategoryId, DEFAULT_CATEGORIES};
pub use transaction::{ParseDirectionError, SmsMessage, TransactionDirection};
