use kosh_core::{Category, TransactionDirection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CategorizeError, Result};
use crate::feedback::{Correction, CorrectionSink, NoopCorrections};
use crate::rules::KeywordRules;

/// Salary likelihood above which the general scoring pass is skipped.
const SALARY_THRESHOLD: f32 = 0.6;
/// Best keyword score needed to accept a match instead of the fallback.
const MIN_MATCH_SCORE: f32 = 0.3;
const FALLBACK_CONFIDENCE: f32 = 0.2;

const SALARY_INDICATORS: &[&str] = &["salary", "credited", "income", "bonus", "incentive"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorizationResult {
    pub category: Category,
    /// 0.0–1.0.
    pub confidence: f32,
}

/// Rule-based classifier assigning a spending category to an SMS-derived
/// transaction.
///
/// The keyword table is fixed at construction; `categorize` reads nothing
/// else, so one engine can be shared across threads.
pub struct CategorizationEngine {
    rules: KeywordRules,
    corrections: Box<dyn CorrectionSink>,
}

impl Default for CategorizationEngine {
    fn default() -> Self {
        Self::new(KeywordRules::builtin())
    }
}

impl CategorizationEngine {
    pub fn new(rules: KeywordRules) -> Self {
        Self {
            rules,
            corrections: Box::new(NoopCorrections),
        }
    }

    pub fn with_corrections(mut self, sink: impl CorrectionSink + 'static) -> Self {
        self.corrections = Box::new(sink);
        self
    }

    pub fn rules(&self) -> &KeywordRules {
        &self.rules
    }

    /// Pick the best category among `candidates` for one transaction.
    ///
    /// Never fails on odd text; the only error is an empty candidate list.
    pub fn categorize(
        &self,
        sms_body: &str,
        merchant: &str,
        amount: f64,
        direction: TransactionDirection,
        candidates: &[Category],
    ) -> Result<CategorizationResult> {
        if candidates.is_empty() {
            return Err(CategorizeError::NoCandidates);
        }

        let body = sms_body.trim().to_lowercase();
        let merchant = merchant.trim().to_lowercase();

        if direction == TransactionDirection::Credit {
            if let Some(salary) = candidates.iter().find(|c| c.id.is_salary()) {
                let confidence = salary_confidence(&body, amount);
                if confidence > SALARY_THRESHOLD {
                    debug!("Salary shortcut taken (confidence {confidence:.2})");
                    return Ok(CategorizationResult {
                        category: salary.clone(),
                        confidence,
                    });
                }
            }
        }

        let mut best: Option<(&Category, f32)> = None;
        for category in candidates
            .iter()
            .filter(|c| !c.id.is_salary() && !c.id.is_others())
        {
            let score = category_score(&body, &merchant, self.rules.keywords_for(category));
            // Strictly greater: the earliest candidate keeps a tie.
            if score > best.map_or(0.0, |(_, s)| s) {
                best = Some((category, score));
            }
        }

        match best {
            Some((category, score)) if score >= MIN_MATCH_SCORE => {
                debug!("Matched {} (score {score:.2})", category.id);
                Ok(CategorizationResult {
                    category: category.clone(),
                    confidence: score,
                })
            }
            _ => {
                let fallback = candidates
                    .iter()
                    .find(|c| c.id.is_others())
                    .or_else(|| candidates.first())
                    .ok_or(CategorizeError::NoCandidates)?;
                debug!("No confident match, falling back to {}", fallback.id);
                Ok(CategorizationResult {
                    category: fallback.clone(),
                    confidence: FALLBACK_CONFIDENCE,
                })
            }
        }
    }

    /// Hand a user correction to the configured sink. Does not change how
    /// this engine scores.
    pub fn record_correction(&self, sms_body: &str, merchant: &str, category: &Category) {
        self.corrections.record(&Correction {
            sms_body: sms_body.to_string(),
            merchant: merchant.to_string(),
            category_id: category.id.clone(),
        });
    }
}

/// Keyword score of one category against lowercased body and merchant.
fn category_score(body: &str, merchant: &str, keywords: &[String]) -> f32 {
    let keywords: Vec<(String, usize)> = keywords
        .iter()
        .filter(|k| !k.is_empty())
        .map(|k| (k.to_lowercase(), k.chars().count()))
        .collect();

    let mut score = 0.0f32;

    for (keyword, len) in &keywords {
        if body.contains(keyword.as_str()) {
            score += match *len {
                9.. => 0.4,
                6..=8 => 0.3,
                _ => 0.2,
            };
        }
    }

    // Merchant strings are less noisy than the body.
    for (keyword, _) in &keywords {
        if merchant.contains(keyword.as_str()) {
            score += 0.5;
        }
    }

    if keywords
        .iter()
        .any(|(keyword, len)| *len > 4 && merchant.contains(keyword.as_str()))
    {
        score += 0.3;
    }

    score.min(1.0)
}

fn salary_confidence(body: &str, amount: f64) -> f32 {
    let mut confidence = SALARY_INDICATORS
        .iter()
        .filter(|k| body.contains(*k))
        .count() as f32
        * 0.3;

    confidence += if amount > 50_000.0 {
        0.4
    } else if amount > 20_000.0 {
        0.3
    } else if amount > 10_000.0 {
        0.2
    } else {
        0.0
    };

    if body.contains("monthly") || body.contains("payroll") {
        confidence += 0.3;
    }

    confidence.min(1.0)
}
