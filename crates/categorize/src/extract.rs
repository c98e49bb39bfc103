use std::str::FromStr;

use kosh_core::TransactionDirection;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

// ── Patterns ─────────────────────────────────────────────────────────────────

// Rs.500 / ₹500 / INR 500, or "debited by 2000.0" (UPI alerts).
re!(re_amount,
    r"(?i)(?:(?:rs\.?|inr|₹)\s*|(?:debited|credited)\s+by\s+)([0-9]+(?:,[0-9]{3})*(?:\.[0-9]{1,2})?)");

// at AMAZON / trf to NAME / towards GOOGLE / from NAME thru IPPB
re!(re_merchant,
    r"(?i)(?:at|from|to|trf\s+to|transferred\s+to|towards)\s+([a-zA-Z0-9\s&.-]+?)(?:\s+(?:on|from|refno|umn|thru|through)|\.|$)");

const COMMON_MERCHANTS: &[&str] = &["amazon", "flipkart", "zomato", "swiggy", "uber", "ola"];

const DEBIT_MARKERS: &[&str] = &["debited", "debit", "spent", "paid"];
const CREDIT_MARKERS: &[&str] = &["credited", "credit", "received", "refund"];

/// Structured fields pulled out of one SMS body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDetails {
    /// 0.0 when no amount could be read.
    pub amount: f64,
    pub merchant: String,
    pub direction: TransactionDirection,
    pub description: String,
}

impl ExtractedDetails {
    pub fn has_known_merchant(&self) -> bool {
        self.merchant != UNKNOWN_MERCHANT
    }
}

pub struct SmsExtractor;

impl SmsExtractor {
    /// Extract amount, merchant and direction from raw SMS text. Every field
    /// degrades to a default instead of failing.
    pub fn extract_details(sms_body: &str) -> ExtractedDetails {
        let amount = Self::extract_amount(sms_body);
        let merchant = Self::extract_merchant(sms_body);
        let direction = Self::extract_direction(sms_body);
        let description = describe(&merchant, direction);

        ExtractedDetails {
            amount,
            merchant,
            direction,
            description,
        }
    }

    fn extract_amount(text: &str) -> f64 {
        re_amount()
            .captures(text)
            .and_then(|c| parse_amount_str(c.get(1)?.as_str()))
            .unwrap_or(0.0)
    }

    fn extract_merchant(text: &str) -> String {
        if let Some(c) = re_merchant().captures(text) {
            if let Some(m) = c.get(1) {
                return m.as_str().trim().to_string();
            }
        }

        let lower = text.to_lowercase();
        COMMON_MERCHANTS
            .iter()
            .find(|m| lower.contains(*m))
            .map(|m| capitalize(m))
            .unwrap_or_else(|| UNKNOWN_MERCHANT.to_string())
    }

    fn extract_direction(text: &str) -> TransactionDirection {
        let lower = text.to_lowercase();
        if DEBIT_MARKERS.iter().any(|k| lower.contains(k)) {
            TransactionDirection::Debit
        } else if CREDIT_MARKERS.iter().any(|k| lower.contains(k)) {
            TransactionDirection::Credit
        } else if lower.contains("transfer") {
            TransactionDirection::Transfer
        } else {
            // Most alerts without a marker are spends.
            TransactionDirection::Debit
        }
    }
}

fn describe(merchant: &str, direction: TransactionDirection) -> String {
    if merchant == UNKNOWN_MERCHANT {
        return "Transaction via SMS".to_string();
    }
    let action = match direction {
        TransactionDirection::Debit => "Payment to",
        TransactionDirection::Credit => "Payment from",
        TransactionDirection::Transfer => "Transfer",
    };
    format!("{action} {merchant}")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ── Amount parsing ────────────────────────────────────────────────────────────

// Decimal caps out at 28 significant digits; longer numerals parse as f64.
fn parse_amount_str(s: &str) -> Option<f64> {
    let clean = s.replace(',', "");
    match Decimal::from_str(&clean) {
        Ok(d) => d.to_f64(),
        Err(_) => clean.parse::<f64>().ok(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
