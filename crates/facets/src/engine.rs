//! The facet filter/sort engine.

use storefront_catalog::Product;

use crate::filter::{FilterState, SortKey};

/// Filter and order `catalog` according to `state`.
///
/// Keeps products whose price lies inside the (inclusive) price range and whose
/// brand and color belong to the selected sets; an empty selection set does not
/// filter. Survivors are then ordered by the sort key with a stable sort, so
/// ties keep catalog order and `featured` is catalog order.
///
/// Pure: the output is a subsequence of `catalog` (reordered only by the sort)
/// and depends on nothing but the two arguments.
pub fn apply<'a>(catalog: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    let range = state.price_range();
    let brands = state.selected_brands();
    let colors = state.selected_colors();

    let mut result: Vec<&Product> = catalog
        .iter()
        .filter(|p| range.contains(p.price))
        .filter(|p| brands.is_empty() || brands.contains(&p.brand))
        .filter(|p| colors.is_empty() || colors.contains(&p.color))
        .collect();

    match state.sort_key() {
        SortKey::Featured => {}
        SortKey::PriceLow => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => result.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    tracing::debug!(
        input = catalog.len(),
        output = result.len(),
        sort = %state.sort_key(),
        "facet filter applied"
    );
    result
}
