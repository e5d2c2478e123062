//! Storefront catalog.
//!
//! Product records, categories and the static mock catalog the storefront
//! browses. Everything here is read-only data plus lookups (no IO beyond
//! parsing an in-memory JSON document).

pub mod catalog;
pub mod product;

pub use catalog::{Catalog, CategorySlice};
pub use product::{Category, Product};
