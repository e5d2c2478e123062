//! In-memory product catalog and per-category slices.

use std::collections::HashSet;

use storefront_core::{DomainError, DomainResult, Price, ProductId};

use crate::product::{Category, Product};

/// The mock catalog the storefront ships with.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// Fixed, validated set of products available to one browsing context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-constructed records.
    ///
    /// Every record is validated and ids must be unique.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog document: a JSON array of product records.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog document: {e}")))?;
        let catalog = Self::new(products)?;
        tracing::debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The 30-product mock catalog, five products per category.
    pub fn builtin() -> DomainResult<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(DomainError::not_found)
    }

    /// Products of one category, in catalog order.
    pub fn category(&self, category: Category) -> CategorySlice {
        let products = self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        CategorySlice { category, products }
    }
}

/// The catalog products of one category: the input a category view filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    category: Category,
    products: Vec<Product>,
}

impl CategorySlice {
    /// Slice over caller-supplied records, e.g. a catalog source other than [`Catalog`].
    pub fn from_products(category: Category, products: Vec<Product>) -> Self {
        Self { category, products }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct brands, in the order they first appear.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }

    /// Distinct colors, in the order they first appear.
    pub fn colors(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.color.as_str()))
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.products.iter().any(|p| p.brand == brand)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.products.iter().any(|p| p.color == color)
    }

    /// Highest price in the slice; `None` when the slice is empty.
    pub fn max_price(&self) -> Option<Price> {
        self.products.iter().map(|p| p.price).max()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
