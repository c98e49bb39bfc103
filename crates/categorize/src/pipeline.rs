use std::collections::HashSet;

use kosh_core::{Category, SmsMessage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::detect::{identify_bank, is_transaction_sms, is_valid_merchant};
use crate::engine::{CategorizationEngine, CategorizationResult};
use crate::error::{CategorizeError, Result};
use crate::extract::{ExtractedDetails, SmsExtractor};

/// One SMS turned into a categorized transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub sms: SmsMessage,
    pub bank: String,
    pub details: ExtractedDetails,
    pub categorization: CategorizationResult,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub sms_found: usize,
    pub transaction_sms_found: usize,
    /// Same sender and body seen earlier in the batch.
    pub duplicates_skipped: usize,
    /// Transaction alerts without a positive amount or a usable merchant.
    pub unparsed: usize,
    pub transactions_parsed: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub transactions: Vec<ParsedTransaction>,
    pub summary: ImportSummary,
}

/// Orchestrates: detect → extract → validate merchant → categorize.
pub struct SmsPipeline {
    engine: CategorizationEngine,
    categories: Vec<Category>,
}

impl SmsPipeline {
    /// `categories` are the candidates offered to the engine for every
    /// message; an empty list is rejected up front.
    pub fn new(engine: CategorizationEngine, categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(CategorizeError::NoCandidates);
        }
        Ok(Self { engine, categories })
    }

    pub fn engine(&self) -> &CategorizationEngine {
        &self.engine
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// `None` when the message is not a usable transaction alert.
    pub fn process(&self, sms: &SmsMessage) -> Result<Option<ParsedTransaction>> {
        if !is_transaction_sms(&sms.sender, &sms.body) {
            return Ok(None);
        }
        self.parse(sms)
    }

    pub fn process_batch(&self, messages: &[SmsMessage]) -> Result<BatchOutcome> {
        let mut outcome = BatchOutcome::default();
        let mut seen: HashSet<(&str, &str)> = HashSet::new();
        outcome.summary.sms_found = messages.len();

        for sms in messages {
            if !is_transaction_sms(&sms.sender, &sms.body) {
                continue;
            }
            outcome.summary.transaction_sms_found += 1;

            if !seen.insert((sms.sender.as_str(), sms.body.as_str())) {
                debug!("Skipping duplicate SMS from {}", sms.sender);
                outcome.summary.duplicates_skipped += 1;
                continue;
            }

            match self.parse(sms)? {
                Some(tx) => outcome.transactions.push(tx),
                None => outcome.summary.unparsed += 1,
            }
        }

        outcome.summary.transactions_parsed = outcome.transactions.len();
        let s = &outcome.summary;
        info!(
            "Parsed {} transactions from {} SMS ({} alerts, {} duplicates, {} unparsed)",
            s.transactions_parsed, s.sms_found, s.transaction_sms_found, s.duplicates_skipped, s.unparsed
        );
        Ok(outcome)
    }

    fn parse(&self, sms: &SmsMessage) -> Result<Option<ParsedTransaction>> {
        let details = SmsExtractor::extract_details(&sms.body);

        if details.amount <= 0.0 {
            debug!("No amount in SMS from {}", sms.sender);
            return Ok(None);
        }
        if !is_valid_merchant(&details.merchant) {
            debug!("Rejected merchant '{}' from {}", details.merchant, sms.sender);
            return Ok(None);
        }

        let categorization = self.engine.categorize(
            &sms.body,
            &details.merchant,
            details.amount,
            details.direction,
            &self.categories,
        )?;

        Ok(Some(ParsedTransaction {
            sms: sms.clone(),
            bank: identify_bank(&sms.sender, &sms.body).to_string(),
            details,
            categorization,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kosh_core::{default_categories, TransactionDirection};

    fn pipeline() -> SmsPipeline {
        SmsPipeline::new(CategorizationEngine::default(), default_categories()).unwrap()
    }

    fn swiggy() -> SmsMessage {
        SmsMessage::new("VM-HDFCBK", "Rs.250 paid at SWIGGY on 01-02-2024")
    }

    fn salary() -> SmsMessage {
        SmsMessage::new(
            "AD-HDFCBK",
            "Dear Customer, your a/c XX1234 is credited with INR 85,000.00 towards SALARY for MAR. Monthly payroll",
        )
    }

    #[test]
    fn empty_categories_rejected() {
        let err = SmsPipeline::new(CategorizationEngine::default(), vec![]).err().unwrap();
        assert!(matches!(err, CategorizeError::NoCandidates));
    }

    #[test]
    fn process_food_alert() {
        let tx = pipeline().process(&swiggy()).unwrap().unwrap();
        assert_eq!(tx.bank, "HDFC Bank");
        assert_eq!(tx.details.amount, 250.0);
        assert_eq!(tx.details.merchant, "SWIGGY");
        assert_eq!(tx.details.direction, TransactionDirection::Debit);
        assert_eq!(tx.details.description, "Payment to SWIGGY");
        assert_eq!(tx.categorization.category.id.as_str(), "food");
        assert_eq!(tx.categorization.confidence, 1.0);
    }

    #[test]
    fn process_salary_alert() {
        let tx = pipeline().process(&salary()).unwrap().unwrap();
        assert_eq!(tx.details.amount, 85_000.0);
        assert_eq!(tx.details.direction, TransactionDirection::Credit);
        assert!(tx.categorization.category.id.is_salary());
    }

    #[test]
    fn process_ignores_promotions() {
        let promo = SmsMessage::new("VK-MYNTRA", "Flat Rs.500 off on your next order!");
        assert!(pipeline().process(&promo).unwrap().is_none());
    }

    #[test]
    fn process_drops_alert_without_merchant() {
        let sms = SmsMessage::new("VM-HDFCBK", "Rs.100 debited from a/c via UPI");
        assert!(pipeline().process(&sms).unwrap().is_none());
    }

    #[test]
    fn batch_counts_and_deduplicates() {
        let messages = vec![
            swiggy(),
            SmsMessage::new("VK-MYNTRA", "Flat Rs.500 off on your next order!"),
            salary(),
            swiggy(),
            SmsMessage::new("VM-HDFCBK", "Rs.100 debited from a/c via UPI"),
        ];
        let outcome = pipeline().process_batch(&messages).unwrap();
        assert_eq!(
            outcome.summary,
            ImportSummary {
                sms_found: 5,
                transaction_sms_found: 4,
                duplicates_skipped: 1,
                unparsed: 1,
                transactions_parsed: 2,
            }
        );
        assert_eq!(outcome.transactions[0].details.merchant, "SWIGGY");
        assert!(outcome.transactions[1].categorization.category.id.is_salary());
    }

    #[test]
    fn same_body_from_different_senders_is_not_a_duplicate() {
        let a = SmsMessage::new("VM-HDFCBK", "Rs.250 paid at SWIGGY on 01-02-2024");
        let b = SmsMessage::new("VM-ICICIB", "Rs.250 paid at SWIGGY on 01-02-2024");
        let outcome = pipeline().process_batch(&[a, b]).unwrap();
        assert_eq!(outcome.summary.duplicates_skipped, 0);
        assert_eq!(outcome.transactions.len(), 2);
        assert_eq!(outcome.transactions[1].bank, "ICICI Bank");
    }

    #[test]
    fn batch_outcome_serializes_to_json() {
        let outcome = pipeline().process_batch(&[swiggy(), salary()]).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["summary"]["transactions_parsed"], 2);
        assert_eq!(json["transactions"][0]["details"]["direction"], "debit");
        assert_eq!(json["transactions"][0]["categorization"]["category"]["id"], "food");

        let back: BatchOutcome = serde_json::from_value(json).unwrap();
        assert_eq!(back.summary, outcome.summary);
        assert_eq!(back.transactions, outcome.transactions);
    }

    #[test]
    fn empty_batch() {
        let outcome = pipeline().process_batch(&[]).unwrap();
        assert_eq!(outcome.summary, ImportSummary::default());
        assert!(outcome.transactions.is_empty());
    }
}
