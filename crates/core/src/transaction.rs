use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Whether money left the account, entered it, or moved between the user's
/// own accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDirection {
    Debit,
    Credit,
    Transfer,
}

impl fmt::Display for TransactionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionDirection::Debit => write!(f, "debit"),
            TransactionDirection::Credit => write!(f, "credit"),
            TransactionDirection::Transfer => write!(f, "transfer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transaction direction: '{0}'")]
pub struct ParseDirectionError(pub String);

impl std::str::FromStr for TransactionDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debit" => Ok(TransactionDirection::Debit),
            "credit" => Ok(TransactionDirection::Credit),
            "transfer" => Ok(TransactionDirection::Transfer),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// A received text message as handed over by the SMS inbox reader.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SmsMessage {
    /// Sender address, e.g. `VM-HDFCBK`.
    pub sender: String,
    pub body: String,
}

impl SmsMessage {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        SmsMessage {
            sender: sender.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn direction_roundtrip() {
        for d in [
            TransactionDirection::Debit,
            TransactionDirection::Credit,
            TransactionDirection::Transfer,
        ] {
            assert_eq!(TransactionDirection::from_str(&d.to_string()).unwrap(), d);
        }
    }

    #[test]
    fn direction_parse_is_case_insensitive() {
        assert_eq!(
            TransactionDirection::from_str(" CREDIT ").unwrap(),
            TransactionDirection::Credit
        );
    }

    #[test]
    fn direction_parse_rejects_unknown() {
        let err = TransactionDirection::from_str("refund").unwrap_err();
        assert_eq!(err.to_string(), "Unknown transaction direction: 'refund'");
    }

    #[test]
    fn direction_serde_snake_case() {
        let json = serde_json::to_string(&TransactionDirection::Transfer).unwrap();
        assert_eq!(json, "\"transfer\"");
    }
}
