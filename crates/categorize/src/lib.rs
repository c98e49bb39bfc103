//! SMS transaction parsing: detect bank alerts, extract amount/merchant/
//! direction, and assign a spending category with a confidence score.

// Lazily compiled, process-wide regexes.
macro_rules! re {
    ($name:ident, $pat:expr) => {
        fn $name() -> &'static ::regex::Regex {
            static R: ::std::sync::OnceLock<::regex::Regex> = ::std::sync::OnceLock::new();
            R.get_or_init(|| ::regex::Regex::new($pat).expect("invalid regex"))
        }
    };
}

pub mod detect;
pub mod engine;
pub mod error;
pub mod extract;
pub mod feedback;
pub mod pipeline;
pub mod rules;

pub use detect::{identify_bank, is_transaction_sms, is_valid_merchant, OTHER_BANKS};
pub use engine::{CategorizationEngine, CategorizationResult};
pub use error::{CategorizeError, Result};
pub use extract::{ExtractedDetails, SmsExtractor, UNKNOWN_MERCHANT};
pub use feedback::{Correction, CorrectionSink, NoopCorrections};
pub use pipeline::{BatchOutcome, ImportSummary, ParsedTransaction, SmsPipeline};
pub use rules::KeywordRules;
