use kosh_core::CategoryId;

/// A user override of an automatically assigned category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub sms_body: String,
    pub merchant: String,
    pub category_id: CategoryId,
}

/// Receives user corrections. Extension point for a future learning
/// component; the engine never reads anything back from it.
pub trait CorrectionSink: Send + Sync {
    fn record(&self, correction: &Correction);
}

/// Discards every correction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCorrections;

impl CorrectionSink for NoopCorrections {
    fn record(&self, correction: &Correction) {
        tracing::debug!(
            "Ignoring correction of '{}' to {}",
            correction.merchant,
            correction.category_id
        );
    }
}
