//! Facet filter/sort engine for category listings.
//!
//! Given a category's products and a [`FilterState`] (price range, brand and
//! color selections, sort key), [`apply`] produces the ordered result set to
//! display. [`CategoryView`] owns one view's state and recomputes the result on
//! every transition.
//!
//! This crate is deterministic domain logic only (no IO, no rendering).

pub mod config;
pub mod engine;
pub mod filter;
pub mod view;

pub use config::FacetConfig;
pub use engine::apply;
pub use filter::{FilterState, FilterStateBuilder, PriceRange, SortKey};
pub use view::CategoryView;
