//! Category listing view state.

use storefront_catalog::{CategorySlice, Product};
use storefront_core::{DomainError, DomainResult, Price};

use crate::config::FacetConfig;
use crate::engine::apply;
use crate::filter::{FilterState, SortKey};

/// One category listing: the slice being browsed, the active [`FilterState`]
/// and the result set it produces.
///
/// Every transition replaces the state and recomputes the result from scratch.
/// A failed transition leaves the view as it was. Leaving the category means
/// dropping the view; selections never carry over to another category.
#[derive(Debug, Clone)]
pub struct CategoryView {
    slice: CategorySlice,
    config: FacetConfig,
    state: FilterState,
    results: Vec<Product>,
}

impl CategoryView {
    /// Enter a category with the default filter state.
    pub fn enter(slice: CategorySlice, config: &FacetConfig) -> Self {
        let state = FilterState::new(config.price_ceiling);
        let results = recompute(&slice, &state);
        tracing::debug!(
            category = %slice.category(),
            products = slice.len(),
            "category view entered"
        );
        Self {
            slice,
            config: *config,
            state,
            results,
        }
    }

    /// Page heading, e.g. `Home Living`.
    pub fn title(&self) -> String {
        self.slice.category().display_name()
    }

    pub fn slice(&self) -> &CategorySlice {
        &self.slice
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn results(&self) -> &[Product] {
        &self.results
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    /// No product matches the active facets (the "no products match" affordance).
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Brand checkboxes to render, in first-seen order.
    pub fn brand_options(&self) -> Vec<&str> {
        self.slice.brands()
    }

    /// Color checkboxes to render, in first-seen order.
    pub fn color_options(&self) -> Vec<&str> {
        self.slice.colors()
    }

    /// Move the price slider. Bounds snap to the configured step.
    pub fn set_price_range(&mut self, lower: Price, upper: Price) -> DomainResult<()> {
        // Reject inverted/out-of-range input before snapping can mask it.
        self.state.with_price_range(lower, upper)?;
        let (lower, upper) = self.config.snap(lower, upper);
        let next = self.state.with_price_range(lower, upper)?;
        self.transition("price_range", next);
        Ok(())
    }

    pub fn toggle_brand(&mut self, brand: &str) -> DomainResult<()> {
        if !self.slice.has_brand(brand) {
            return Err(DomainError::invalid_configuration(format!(
                "brand {brand:?} is not offered in {}",
                self.slice.category()
            )));
        }
        let next = self.state.toggle_brand(brand);
        self.transition("brand", next);
        Ok(())
    }

    pub fn toggle_color(&mut self, color: &str) -> DomainResult<()> {
        if !self.slice.has_color(color) {
            return Err(DomainError::invalid_configuration(format!(
                "color {color:?} is not offered in {}",
                self.slice.category()
            )));
        }
        let next = self.state.toggle_color(color);
        self.transition("color", next);
        Ok(())
    }

    /// Pick a sort order by its wire name; unknown names are rejected.
    pub fn set_sort(&mut self, sort: &str) -> DomainResult<()> {
        let key = sort.parse::<SortKey>()?;
        self.set_sort_key(key);
        Ok(())
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        let next = self.state.with_sort_key(key);
        self.transition("sort", next);
    }

    /// Back to the view-entry defaults.
    pub fn reset(&mut self) {
        let next = self.state.reset();
        self.transition("reset", next);
    }

    /// Install a state built elsewhere (e.g. restored from a saved document).
    ///
    /// Selections absent from this category are kept and simply match nothing.
    pub fn replace_state(&mut self, state: FilterState) -> DomainResult<()> {
        if state.ceiling() != self.config.price_ceiling {
            return Err(DomainError::invalid_configuration(format!(
                "state ceiling {} does not match view ceiling {}",
                state.ceiling(),
                self.config.price_ceiling
            )));
        }
        self.transition("replace", state);
        Ok(())
    }

    fn transition(&mut self, facet: &'static str, next: FilterState) {
        self.results = recompute(&self.slice, &next);
        self.state = next;
        tracing::trace!(
            category = %self.slice.category(),
            facet,
            results = self.results.len(),
            "filter state changed"
        );
    }
}

fn recompute(slice: &CategorySlice, state: &FilterState) -> Vec<Product> {
    apply(slice.products(), state).into_iter().cloned().collect()
}
