use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Price, ProductId, Rating};

/// Product category, identified by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Fashion,
    HomeLiving,
    Beauty,
    Sports,
    Books,
}

impl Category {
    /// Every category the storefront routes to, in navigation order.
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Fashion,
        Category::HomeLiving,
        Category::Beauty,
        Category::Sports,
        Category::Books,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::HomeLiving => "home-living",
            Category::Beauty => "beauty",
            Category::Sports => "sports",
            Category::Books => "books",
        }
    }

    /// Page heading for the category: each `-`-separated slug word capitalized
    /// and joined with a space (`home-living` -> `Home Living`).
    pub fn display_name(&self) -> String {
        self.slug()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(DomainError::not_found)
    }
}

/// A catalog product record.
///
/// Immutable for the lifetime of a browsing session: the catalog hands out
/// shared references only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub image: String,
    pub category: Category,
    pub rating: Rating,
    #[serde(rename = "reviews")]
    pub review_count: u32,
    pub brand: String,
    pub color: String,
}

impl Product {
    /// Check the fields serde cannot: text facets must be non-blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                self.id
            )));
        }
        if self.brand.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: brand cannot be empty",
                self.id
            )));
        }
        if self.color.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: color cannot be empty",
                self.id
            )));
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
