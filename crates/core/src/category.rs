use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable string key of a category, e.g. `food` or `salary`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    pub const FOOD: &'static str = "food";
    pub const GROCERY: &'static str = "grocery";
    pub const TRANSPORT: &'static str = "transport";
    pub const BILLS: &'static str = "bills";
    pub const EDUCATION: &'static str = "education";
    pub const ENTERTAINMENT: &'static str = "entertainment";
    pub const HEALTHCARE: &'static str = "healthcare";
    pub const SHOPPING: &'static str = "shopping";
    pub const SALARY: &'static str = "salary";
    pub const OTHERS: &'static str = "others";

    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_salary(&self) -> bool {
        self.0 == Self::SALARY
    }

    /// The catch-all bucket used when nothing else matches.
    pub fn is_others(&self) -> bool {
        self.0 == Self::OTHERS
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        CategoryId::new(s)
    }
}

impl PartialEq<str> for CategoryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A spending category the engine may choose. Supplied by the caller; the
/// engine never owns or persists these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub keywords: Vec<String>,
    pub is_default: bool,
}

impl Category {
    pub fn new(id: &str, name: &str, keywords: &[&str]) -> Self {
        Category {
            id: CategoryId::new(id),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            is_default: true,
        }
    }

    /// A user-created category.
    pub fn custom(id: &str, name: &str, keywords: &[&str]) -> Self {
        Category {
            is_default: false,
            ..Category::new(id, name, keywords)
        }
    }
}

pub const DEFAULT_CATEGORIES: &[(&str, &str, &[&str])] = &[
    (
        CategoryId::FOOD,
        "Food & Dining",
        &[
            "zomato", "swiggy", "restaurant", "cafe", "food", "dining", "pizza", "burger",
            "dominos", "kfc", "mcdonalds",
        ],
    ),
    (
        CategoryId::GROCERY,
        "Grocery",
        &[
            "bigbasket", "grofers", "blinkit", "zepto", "dmart", "grocery", "supermarket",
            "vegetables", "fruits",
        ],
    ),
    (
        CategoryId::TRANSPORT,
        "Transportation",
        &[
            "uber", "ola", "metro", "bus", "petrol", "fuel", "taxi", "auto", "rapido",
            "namma yatri",
        ],
    ),
    (
        CategoryId::BILLS,
        "Bills & Utilities",
        &[
            "electricity", "water", "gas", "internet", "mobile", "recharge", "broadband",
            "wifi", "postpaid",
        ],
    ),
    (
        CategoryId::EDUCATION,
        "Education",
        &[
            "fees", "course", "book", "education", "school", "college", "university",
            "tuition", "coaching",
        ],
    ),
    (
        CategoryId::ENTERTAINMENT,
        "Entertainment",
        &[
            "netflix", "amazon prime", "hotstar", "spotify", "movie", "cinema", "theatre",
            "gaming", "youtube premium",
        ],
    ),
    (
        CategoryId::HEALTHCARE,
        "Healthcare",
        &[
            "hospital", "doctor", "medicine", "pharmacy", "medical", "health", "clinic",
            "apollo", "fortis",
        ],
    ),
    (
        CategoryId::SHOPPING,
        "Shopping",
        &[
            "amazon", "flipkart", "myntra", "ajio", "shopping", "clothes", "fashion",
            "electronics", "gadgets",
        ],
    ),
    (
        CategoryId::SALARY,
        "Salary & Income",
        &["salary", "credited", "income", "bonus", "incentive", "refund", "cashback"],
    ),
    (CategoryId::OTHERS, "Others", &[]),
];

/// The built-in categories, in display order.
pub fn default_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, keywords)| Category::new(id, name, keywords))
        .collect()
}

/// Display name of a built-in category; unknown ids read as "Others".
pub fn display_name(id: &CategoryId) -> &'static str {
    DEFAULT_CATEGORIES
        .iter()
        .find(|(key, _, _)| id == *key)
        .map(|(_, name, _)| *name)
        .unwrap_or("Others")
}
