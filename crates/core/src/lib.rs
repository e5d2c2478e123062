//! `storefront-core` — domain building blocks shared by the catalog and facet crates.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod rating;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use money::Price;
pub use rating::Rating;
pub use value_object::ValueObject;
