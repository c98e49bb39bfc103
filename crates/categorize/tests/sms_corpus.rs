//! End-to-end checks over realistic bank alerts through the public API.

use kosh_categorize::{
    CategorizationEngine, KeywordRules, SmsExtractor, SmsPipeline, UNKNOWN_MERCHANT,
};
use kosh_core::{default_categories, Category, SmsMessage, TransactionDirection};

const ALERTS: &[(&str, &str)] = &[
    ("VM-HDFCBK", "You have spent Rs.1,234.50 at AMAZON on 12-05-2024"),
    ("AD-SBIUPI", "Dear UPI user A/C X1234 debited by 150.0 on date 02Mar24 trf to RAHUL KUMAR Refno 406123456789"),
    ("JD-ICICIB", "INR 649.00 spent at NETFLIX on 03-04-2024"),
    ("AX-AXISBK", "Rs.2,100 paid at APOLLO PHARMACY on 05-04-2024"),
    ("VM-KOTAKB", "Rs.89 debited towards SPOTIFY. UPI Mandate"),
    ("AD-HDFCBK", "Your a/c credited by 5000.0"),
    ("", ""),
];

#[test]
fn spent_at_amazon() {
    let d = SmsExtractor::extract_details(ALERTS[0].1);
    assert_eq!(d.amount, 1234.50);
    assert_eq!(d.merchant, "AMAZON");
    assert_eq!(d.direction, TransactionDirection::Debit);
    assert_eq!(d.description, "Payment to AMAZON");
}

#[test]
fn credited_by_without_merchant() {
    let d = SmsExtractor::extract_details("Your a/c credited by 5000.0");
    assert_eq!(d.amount, 5000.0);
    assert_eq!(d.direction, TransactionDirection::Credit);
    assert_eq!(d.merchant, UNKNOWN_MERCHANT);
    assert_eq!(d.description, "Transaction via SMS");
}

#[test]
fn empty_inputs_fall_back() {
    let engine = CategorizationEngine::default();
    let r = engine
        .categorize("", "", 0.0, TransactionDirection::Debit, &default_categories())
        .unwrap();
    assert!(r.category.id.is_others());
    assert_eq!(r.confidence, 0.2);

    let d = SmsExtractor::extract_details("");
    assert_eq!(d.amount, 0.0);
    assert_eq!(d.merchant, UNKNOWN_MERCHANT);
    assert_eq!(d.direction, TransactionDirection::Debit);
    assert_eq!(d.description, "Transaction via SMS");
}

#[test]
fn zomato_debit_is_food() {
    let engine = CategorizationEngine::default();
    let r = engine
        .categorize(
            "Rs.500 debited for ZOMATO order",
            "ZOMATO",
            500.0,
            TransactionDirection::Debit,
            &default_categories(),
        )
        .unwrap();
    assert_eq!(r.category.id.as_str(), "food");
    assert!(r.confidence >= 0.5);
}

#[test]
fn salary_credit_with_two_indicators_and_large_amount() {
    let engine = CategorizationEngine::default();
    for body in [
        "Salary credited to your account",
        "Bonus and incentive for Q4",
        "Monthly income credited",
    ] {
        let r = engine
            .categorize(body, "", 60_000.0, TransactionDirection::Credit, &default_categories())
            .unwrap();
        assert!(r.category.id.is_salary(), "{body}");
        assert!(r.confidence >= 0.6, "{body}: {}", r.confidence);
    }
}

#[test]
fn every_alert_yields_a_candidate_in_range() {
    let engine = CategorizationEngine::default();
    let categories = default_categories();
    for (_, body) in ALERTS {
        let d = SmsExtractor::extract_details(body);
        let r = engine
            .categorize(body, &d.merchant, d.amount, d.direction, &categories)
            .unwrap();
        assert!((0.0..=1.0).contains(&r.confidence), "{body}");
        assert!(categories.contains(&r.category), "{body}");
    }
}

#[test]
fn extraction_and_categorization_are_idempotent() {
    let engine = CategorizationEngine::default();
    let categories = default_categories();
    for (_, body) in ALERTS {
        let first = SmsExtractor::extract_details(body);
        let second = SmsExtractor::extract_details(body);
        assert_eq!(first, second);

        let a = engine
            .categorize(body, &first.merchant, first.amount, first.direction, &categories)
            .unwrap();
        let b = engine
            .categorize(body, &first.merchant, first.amount, first.direction, &categories)
            .unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn pipeline_categorizes_known_merchants() {
    let pipeline =
        SmsPipeline::new(CategorizationEngine::default(), default_categories()).unwrap();
    let messages: Vec<SmsMessage> = ALERTS
        .iter()
        .map(|(sender, body)| SmsMessage::new(*sender, *body))
        .collect();

    let outcome = pipeline.process_batch(&messages).unwrap();
    let by_merchant = |m: &str| {
        outcome
            .transactions
            .iter()
            .find(|t| t.details.merchant == m)
            .map(|t| t.categorization.category.id.as_str().to_string())
    };

    assert_eq!(by_merchant("AMAZON").as_deref(), Some("shopping"));
    assert_eq!(by_merchant("NETFLIX").as_deref(), Some("entertainment"));
    assert_eq!(by_merchant("APOLLO PHARMACY").as_deref(), Some("healthcare"));
    assert_eq!(by_merchant("SPOTIFY").as_deref(), Some("entertainment"));
    assert_eq!(outcome.summary.sms_found, ALERTS.len());
}

#[test]
fn toml_rules_override_builtin_keywords() {
    let rules = KeywordRules::from_toml(
        r#"
        [categories]
        food = ["chaayos"]
        "#,
    )
    .unwrap();
    let engine = CategorizationEngine::new(rules);
    let categories = default_categories();

    let r = engine
        .categorize("Rs.120 paid at CHAAYOS", "CHAAYOS", 120.0, TransactionDirection::Debit, &categories)
        .unwrap();
    assert_eq!(r.category.id.as_str(), "food");

    // Categories missing from the file score on their own keywords.
    let r = engine
        .categorize("Rs.300 at DMART", "DMART", 300.0, TransactionDirection::Debit, &categories)
        .unwrap();
    assert_eq!(r.category.id.as_str(), "grocery");
}

#[test]
fn user_created_category_competes_with_defaults() {
    let engine = CategorizationEngine::default();
    let mut categories = default_categories();
    categories.push(Category::custom("fitness", "Fitness", &["cult.fit", "gym"]));

    let r = engine
        .categorize("Rs.1,499 paid at CULT.FIT", "CULT.FIT", 1499.0, TransactionDirection::Debit, &categories)
        .unwrap();
    assert_eq!(r.category.id.as_str(), "fitness");
}
