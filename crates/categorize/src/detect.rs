//! Heuristics for telling bank/payment alerts apart from ordinary SMS.

pub const OTHER_BANKS: &str = "Other Banks";

/// Sender-id fragments used by Indian banks, card issuers and UPI apps.
const BANK_SENDERS: &[&str] = &[
    // Private banks
    "SBIINB", "SBISMS", "SBIUPI", "SBIBNK", "HDFCBK", "HDFCSM", "HDFCCC", "HDFCBN",
    "ICICIB", "ICICIC", "ICICBN", "ICICIS", "AXISBK", "AXISCC", "AXISBN", "AXISSM",
    "KOTAKB", "KOTAKS", "KOTAKM", "KOTAK", "YESBNK", "YESCARD", "YESBAN", "YESSMS",
    "IDFCFB", "IDFCBN", "IDFCSM", "RBLBNK", "RBLCARD", "RBLBAN", "INDUSB", "INDUSIND",
    "INDUSL",
    // Public sector banks
    "PNBSMS", "PNBBNK", "PUNJAB", "BOBSMS", "BOBBNK", "BARODA", "CANBKS", "CANARA",
    "CNRBNK", "UNISBI", "UNION", "UNIBNK", "IOBNET", "IOBSMS", "IOBBNK", "CORPBK",
    "CORPBN", "CORPOR", "ANDHBK", "ANDHRA", "ANDHBN", "ALHABK", "ALLAHABAD", "CENTBK",
    "CENTRAL", "CENBAN", "INDBKS", "INDIAN", "INDBNK", "MHABKS", "MAHARA", "MHABNK",
    "SYNDBK", "SYNDIC", "SYNDBN", "UCOBKS", "UCOBAN", "UCOBNK", "VIJBKS", "VIJAYA",
    "VIJBNK", "BOIMSG", "BOIBKS", "BOIBNK", "ORBNKS", "ORIENT", "ORBBNK",
    // Foreign banks
    "SCBANK", "STANCH", "SCBSMS", "CITIBK", "CITIBN", "CITISMS", "HSBCIN", "HSBCSM",
    "HSBCBN", "DEUTSC", "DBSIND", "DBSSMS",
    // Small finance banks
    "UJJIVN", "UJJBNK", "EQUITB", "EQUITS", "AUBSMS", "AUBBNK", "FINCBN", "FINCARE",
    "ESFBKS", "ESFBSM", "CAPFIN", "CAPITAL", "NORTHEAST", "NESF", "SURYOD", "SURYBN",
    // Payments banks
    "AIRPAY", "AIRTEL", "AIRTLP", "PAYTMB", "PAYTPB", "PAYTMP", "FINDPB", "FINOPB",
    "JIOPPB", "JIOPAY",
    // Cards
    "SBCARD", "SBICRD", "SBICAR", "HDFCRD", "ICICRD", "AXICRD", "AMEXIN", "AMEXCD",
    "AMEXCR", "YESCRD", "RBLCRD", "SCBCRD", "STNCRD", "CITICR", "CITICD", "HSBCCC",
    "HSBCRD",
    // UPI apps and wallets
    "PAYTM", "PAYTMS", "PAYTMW", "GPAY", "GOOGPAY", "GOOGLEPAY", "PHONEPE", "PHONPE",
    "PHNEPE", "AMAZONP", "AMZPAY", "AMAZONPAY", "BHARTP", "BHRTPE", "BHARAT", "MOBIKW",
    "MOBIWK", "MOBIKWIK", "FREECHARGE", "FREECH", "FREECHRG", "OXIGEN", "OXYGN",
    "JIOWLT", "WHATSAPP", "WHTAPP", "FBPAY",
    // Regional banks
    "KARVYB", "KARVY", "JKBANK", "JKBSMS", "JKBBNK", "DHANLA", "DHANBN", "KARNBK",
    "KARNBN", "KVBBNK", "LCBSMS", "LAKSHMI", "TMIBNK", "TAMILNAD", "CITYBN", "CITYUB",
    "SARASB", "SARASWAT", "FEDERAL", "FEDBNK", "SOUTHI", "SOUTHBN", "DCBBKS", "DCBBAN",
    "KTKBAN", "KATAK",
    // Co-operative banks
    "APEXCO", "APEXBN", "NKGSB", "NKGBAN", "COSBAN", "COSMOS",
    // Generic aliases
    "BANKSMS", "BNKSMS", "MYBANKAPP", "UPIAPP", "UPISMS", "BHIMSMS", "WALLET", "EWALET",
    "DIGIWLT",
];

const TRANSACTION_KEYWORDS: &[&str] = &[
    "debited", "credited", "debit", "credit", "withdrawn", "deposited", "paid", "received",
    "spent", "transferred", "transaction", "txn", "purchase", "refund", "cashback", "reward",
    "charges", "fee", "payment",
];

re!(re_amount_present,
    r"(?i)(?:₹|rs\.?|inr)\s*[0-9,]+(?:\.[0-9]{1,2})?|(?:debited|credited)\s+by\s+[0-9,]+(?:\.[0-9]{1,2})?");

/// Bank names keyed by the fragments that identify them, in match order.
const BANKS: &[(&[&str], &str)] = &[
    (&["SBI", "STATE BANK"], "SBI"),
    (&["HDFC"], "HDFC Bank"),
    (&["ICICI"], "ICICI Bank"),
    (&["AXIS"], "Axis Bank"),
    (&["KOTAK"], "Kotak Mahindra"),
    (&["IPPB", "INDIA POST"], "IPPB"),
    (&["PAYTM"], "Paytm"),
    (&["PHONEPE"], "PhonePe"),
    (&["GPAY", "GOOGLE PAY"], "Google Pay"),
    (&["BOB", "BANK OF BARODA"], "Bank of Baroda"),
    (&["PNB", "PUNJAB NATIONAL"], "PNB"),
    (&["CANARA"], "Canara Bank"),
    (&["UNION BANK"], "Union Bank"),
    (&["IDBI"], "IDBI Bank"),
    (&["YES BANK"], "Yes Bank"),
];

/// Words that mark an extracted "merchant" as boilerplate rather than a
/// counterparty.
const GENERIC_MERCHANT_WORDS: &[&str] = &[
    "unknown", "merchant", "payment", "transaction", "transfer", "debit", "credit", "bank",
    "upi", "imps", "neft", "rtgs", "pos", "atm", "cash", "withdrawal", "deposit", "balance",
    "sms", "alert", "notification", "service", "charge", "fee",
];

/// True when the message looks like a financial transaction alert: it comes
/// from a known sender or mentions a transaction, and it carries an amount.
pub fn is_transaction_sms(sender: &str, body: &str) -> bool {
    let sender = sender.to_uppercase();
    let lower = body.to_lowercase();

    let from_bank = BANK_SENDERS.iter().any(|s| sender.contains(s));
    let has_keyword = TRANSACTION_KEYWORDS.iter().any(|k| lower.contains(k));
    let has_amount = re_amount_present().is_match(body);

    let is_transaction = (from_bank || has_keyword) && has_amount;
    if !is_transaction {
        tracing::trace!(
            "Not a transaction SMS from {sender} (bank:{from_bank}, keyword:{has_keyword}, amount:{has_amount})"
        );
    }
    is_transaction
}

/// Name of the issuing bank or app. The sender id is checked before the
/// body; unrecognized messages yield [`OTHER_BANKS`].
pub fn identify_bank(sender: &str, body: &str) -> &'static str {
    let sender = sender.to_uppercase();
    let body = body.to_uppercase();

    [sender, body]
        .iter()
        .find_map(|text| {
            BANKS
                .iter()
                .find(|(fragments, _)| fragments.iter().any(|f| text.contains(f)))
                .map(|(_, name)| *name)
        })
        .unwrap_or(OTHER_BANKS)
}

/// Reject extracted merchants that are too short, contain no letters, or
/// contain a generic banking word such as "upi" or "payment".
pub fn is_valid_merchant(merchant: &str) -> bool {
    let clean = merchant.trim().to_lowercase();

    if clean.chars().count() < 3 {
        return false;
    }
    // Whole words only, so a surname like "bankar" survives.
    if clean
        .split_whitespace()
        .any(|word| GENERIC_MERCHANT_WORDS.contains(&word))
    {
        return false;
    }
    clean.chars().any(char::is_alphabetic)
}
