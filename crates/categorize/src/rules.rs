use std::collections::BTreeMap;
use std::path::Path;

use kosh_core::{Category, CategoryId};
use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUILTIN_RULES: &[(&str, &[&str])] = &[
    (
        CategoryId::FOOD,
        &[
            "zomato", "swiggy", "restaurant", "cafe", "food", "dining", "pizza", "burger",
            "dominos", "kfc", "mcdonalds", "subway", "starbucks", "ccd", "barista",
            "food panda", "uber eats", "dunzo", "grofers food",
        ],
    ),
    (
        CategoryId::GROCERY,
        &[
            "bigbasket", "grofers", "blinkit", "zepto", "dunzo", "dmart", "grocery",
            "supermarket", "vegetables", "fruits", "reliance fresh", "spencer's",
            "more supermarket", "nature's basket", "godrej nature's basket",
        ],
    ),
    (
        CategoryId::TRANSPORT,
        &[
            "uber", "ola", "metro", "bus", "petrol", "fuel", "taxi", "auto", "rapido",
            "namma yatri", "quick ride", "bounce", "vogo", "yulu", "lime", "bird",
            "indian oil", "bharat petroleum", "hp petrol", "shell", "essar",
        ],
    ),
    (
        CategoryId::BILLS,
        &[
            "electricity", "water", "gas", "internet", "mobile", "recharge", "broadband",
            "wifi", "postpaid", "prepaid", "airtel", "jio", "vi", "bsnl", "act fibernet",
            "hathway", "tikona", "you broadband", "spectranet", "railwire",
        ],
    ),
    (
        CategoryId::EDUCATION,
        &[
            "fees", "course", "book", "education", "school", "college", "university",
            "tuition", "coaching", "byju's", "unacademy", "vedantu", "white hat jr",
            "coursera", "udemy", "skillshare", "khan academy",
        ],
    ),
    (
        CategoryId::ENTERTAINMENT,
        &[
            "netflix", "amazon prime", "hotstar", "spotify", "movie", "cinema", "theatre",
            "gaming", "youtube premium", "zee5", "sonyliv", "voot", "alt balaji",
            "mx player", "jio cinema", "book my show", "paytm movies", "pvr", "inox",
        ],
    ),
    (
        CategoryId::HEALTHCARE,
        &[
            "hospital", "doctor", "medicine", "pharmacy", "medical", "health", "clinic",
            "apollo", "fortis", "max healthcare", "manipal", "narayana", "aster",
            "medplus", "apollo pharmacy", "netmeds", "1mg", "pharmeasy",
        ],
    ),
    (
        CategoryId::SHOPPING,
        &[
            "amazon", "flipkart", "myntra", "ajio", "shopping", "clothes", "fashion",
            "electronics", "gadgets", "nykaa", "jabong", "snapdeal", "paytm mall",
            "tata cliq", "shoppers stop", "lifestyle", "pantaloons", "westside",
        ],
    ),
    (
        CategoryId::SALARY,
        &[
            "salary", "credited", "income", "bonus", "incentive", "refund", "cashback",
            "interest credited", "dividend", "commission", "freelance", "consulting",
        ],
    ),
];

/// Immutable category → keyword table handed to the engine at construction.
///
/// Entries here take precedence over a category's own keyword list; categories
/// without an entry (typically user-created ones) fall back to their own
/// keywords.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordRules {
    #[serde(default)]
    categories: BTreeMap<CategoryId, Vec<String>>,
}

impl KeywordRules {
    /// The shipped keyword table.
    pub fn builtin() -> Self {
        let categories = BUILTIN_RULES
            .iter()
            .map(|(id, keywords)| {
                (
                    CategoryId::new(*id),
                    keywords.iter().map(|k| k.to_string()).collect(),
                )
            })
            .collect();
        Self { categories }
    }

    /// No overrides: every category is scored on its own keywords.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_toml(toml_content: &str) -> Result<Self> {
        let parsed: KeywordRules = toml::from_str(toml_content)?;
        Ok(parsed.normalized())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rules = Self::from_toml(&content)?;
        tracing::debug!(
            "Loaded keyword rules for {} categories from {}",
            rules.len(),
            path.display()
        );
        Ok(rules)
    }

    /// Keywords used to score `category`.
    pub fn keywords_for<'a>(&'a self, category: &'a Category) -> &'a [String] {
        self.categories
            .get(&category.id)
            .map(Vec::as_slice)
            .unwrap_or(category.keywords.as_slice())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    // An empty keyword would match every text.
    fn normalized(self) -> Self {
        let categories = self
            .categories
            .into_iter()
            .map(|(id, keywords)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.trim().to_string())
                    .filter(|k| !k.is_empty())
                    .collect();
                (id, keywords)
            })
            .collect();
        Self { categories }
    }
}
