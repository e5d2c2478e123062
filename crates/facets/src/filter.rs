//! Filter state: the complete set of facet selections and the sort choice for
//! one category view.

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use storefront_catalog::CategorySlice;
use storefront_core::{DomainError, DomainResult, Price, ValueObject};

/// Result ordering offered by the category listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::invalid_configuration(format!("unknown sort key {s:?}")))
    }
}

/// Inclusive price bounds, `lower <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    lower: Price,
    upper: Price,
}

impl PriceRange {
    /// Bounds within `[0, ceiling]`; inverted or out-of-range bounds are rejected.
    pub fn new(lower: Price, upper: Price, ceiling: Price) -> DomainResult<Self> {
        if lower > upper {
            return Err(DomainError::invalid_configuration(format!(
                "price range is inverted ({lower} > {upper})"
            )));
        }
        if upper > ceiling {
            return Err(DomainError::invalid_configuration(format!(
                "price bound {upper} exceeds ceiling {ceiling}"
            )));
        }
        Ok(Self { lower, upper })
    }

    /// `[0, ceiling]`: admits every product up to the ceiling.
    pub fn full(ceiling: Price) -> Self {
        Self {
            lower: Price::ZERO,
            upper: ceiling,
        }
    }

    pub fn lower(&self) -> Price {
        self.lower
    }

    pub fn upper(&self) -> Price {
        self.upper
    }

    pub fn contains(&self, price: Price) -> bool {
        self.lower <= price && price <= self.upper
    }

    /// Slider label, e.g. `$0 - $1000`.
    pub fn label(&self) -> String {
        format!("{} - {}", self.lower.display_whole(), self.upper.display_whole())
    }
}

impl ValueObject for PriceRange {}

/// Active facet selections and sort choice for one category view.
///
/// A value: every transition returns a new state and the engine only ever reads
/// a finished one. Selections are sets, so their order never matters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FilterStateDocument", into = "FilterStateDocument")]
pub struct FilterState {
    ceiling: Price,
    price_range: PriceRange,
    selected_brands: BTreeSet<String>,
    selected_colors: BTreeSet<String>,
    sort_key: SortKey,
}

impl FilterState {
    /// Default state at view entry: full price range, nothing selected, `featured`.
    pub fn new(ceiling: Price) -> Self {
        Self {
            ceiling,
            price_range: PriceRange::full(ceiling),
            selected_brands: BTreeSet::new(),
            selected_colors: BTreeSet::new(),
            sort_key: SortKey::Featured,
        }
    }

    pub fn builder(ceiling: Price) -> FilterStateBuilder {
        FilterStateBuilder::new(ceiling)
    }

    pub fn ceiling(&self) -> Price {
        self.ceiling
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn selected_brands(&self) -> &BTreeSet<String> {
        &self.selected_brands
    }

    pub fn selected_colors(&self) -> &BTreeSet<String> {
        &self.selected_colors
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    /// True when this state is the view-entry default.
    pub fn is_default(&self) -> bool {
        *self == Self::new(self.ceiling)
    }

    pub fn with_price_range(&self, lower: Price, upper: Price) -> DomainResult<Self> {
        let price_range = PriceRange::new(lower, upper, self.ceiling)?;
        Ok(Self {
            price_range,
            ..self.clone()
        })
    }

    pub fn with_sort_key(&self, sort_key: SortKey) -> Self {
        Self {
            sort_key,
            ..self.clone()
        }
    }

    /// Add `brand` to the selection if absent, remove it if present.
    pub fn toggle_brand(&self, brand: &str) -> Self {
        let mut next = self.clone();
        toggle(&mut next.selected_brands, brand);
        next
    }

    /// Add `color` to the selection if absent, remove it if present.
    pub fn toggle_color(&self, color: &str) -> Self {
        let mut next = self.clone();
        toggle(&mut next.selected_colors, color);
        next
    }

    /// Back to the view-entry default for the same ceiling.
    pub fn reset(&self) -> Self {
        Self::new(self.ceiling)
    }

    /// Strict check that every selected brand and color exists in `slice`.
    ///
    /// [`crate::apply`] does not require this: a stale selection simply matches
    /// nothing.
    pub fn validate_against(&self, slice: &CategorySlice) -> DomainResult<()> {
        if let Some(brand) = self.selected_brands.iter().find(|b| !slice.has_brand(b)) {
            return Err(DomainError::invalid_configuration(format!(
                "brand {brand:?} is not offered in {}",
                slice.category()
            )));
        }
        if let Some(color) = self.selected_colors.iter().find(|c| !slice.has_color(c)) {
            return Err(DomainError::invalid_configuration(format!(
                "color {color:?} is not offered in {}",
                slice.category()
            )));
        }
        Ok(())
    }
}

impl ValueObject for FilterState {}

fn toggle(selection: &mut BTreeSet<String>, value: &str) {
    if !selection.remove(value) {
        selection.insert(value.to_string());
    }
}

/// Builds a [`FilterState`] from raw facet inputs, validating on `build`.
#[derive(Debug, Clone)]
pub struct FilterStateBuilder {
    ceiling: Price,
    lower: Price,
    upper: Price,
    brands: BTreeSet<String>,
    colors: BTreeSet<String>,
    sort: String,
}

impl FilterStateBuilder {
    fn new(ceiling: Price) -> Self {
        Self {
            ceiling,
            lower: Price::ZERO,
            upper: ceiling,
            brands: BTreeSet::new(),
            colors: BTreeSet::new(),
            sort: SortKey::Featured.as_str().to_string(),
        }
    }

    pub fn price_range(mut self, lower: Price, upper: Price) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    pub fn brands<I, S>(mut self, brands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = brands.into_iter().map(Into::into).collect();
        self
    }

    pub fn colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Sort key by its wire name (`featured`, `price-low`, `price-high`, `rating`).
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = sort.into();
        self
    }

    pub fn sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort = sort_key.as_str().to_string();
        self
    }

    pub fn build(self) -> DomainResult<FilterState> {
        let price_range = PriceRange::new(self.lower, self.upper, self.ceiling)?;
        let sort_key = self.sort.parse::<SortKey>()?;
        Ok(FilterState {
            ceiling: self.ceiling,
            price_range,
            selected_brands: self.brands,
            selected_colors: self.colors,
            sort_key,
        })
    }
}

/// Serialized form of [`FilterState`]; deserializing goes through the builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterStateDocument {
    ceiling: Price,
    price_range: [Price; 2],
    #[serde(default)]
    selected_brands: BTreeSet<String>,
    #[serde(default)]
    selected_colors: BTreeSet<String>,
    #[serde(default = "default_sort")]
    sort: String,
}

fn default_sort() -> String {
    SortKey::Featured.as_str().to_string()
}

impl TryFrom<FilterStateDocument> for FilterState {
    type Error = DomainError;

    fn try_from(doc: FilterStateDocument) -> Result<Self, Self::Error> {
        FilterState::builder(doc.ceiling)
            .price_range(doc.price_range[0], doc.price_range[1])
            .brands(doc.selected_brands)
            .colors(doc.selected_colors)
            .sort(doc.sort)
            .build()
    }
}

impl From<FilterState> for FilterStateDocument {
    fn from(state: FilterState) -> Self {
        Self {
            ceiling: state.ceiling,
            price_range: [state.price_range.lower, state.price_range.upper],
            selected_brands: state.selected_brands,
            selected_colors: state.selected_colors,
            sort: state.sort_key.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{Catalog, Category};

    const CEILING: Price = Price::from_cents(100_000);

    fn dollars(amount: u64) -> Price {
        Price::from_cents(amount * 100)
    }

    #[test]
    fn default_state_admits_everything_up_to_the_ceiling() {
        let state = FilterState::new(CEILING);
        assert_eq!(state.price_range(), PriceRange::full(CEILING));
        assert!(state.selected_brands().is_empty());
        assert!(state.selected_colors().is_empty());
        assert_eq!(state.sort_key(), SortKey::Featured);
        assert!(state.is_default());
        assert_eq!(state.price_range().label(), "$0 - $1000");
    }

    #[test]
    fn sort_keys_parse_by_wire_name() {
        for key in SortKey::ALL {
            assert_eq!(key.to_string().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!(SortKey::PriceHigh.label(), "Price: High to Low");
        assert_eq!(serde_json::to_string(&SortKey::PriceLow).unwrap(), "\"price-low\"");
    }

    #[test]
    fn unknown_sort_key_is_rejected_at_construction() {
        let err = FilterState::builder(CEILING).sort("cheapest").build().unwrap_err();
        match err {
            DomainError::InvalidConfiguration(msg) => assert!(msg.contains("cheapest")),
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn inverted_or_out_of_range_bounds_are_rejected() {
        let inverted = FilterState::builder(CEILING)
            .price_range(dollars(600), dollars(500))
            .build();
        assert!(matches!(inverted, Err(DomainError::InvalidConfiguration(_))));

        let above_ceiling = FilterState::builder(CEILING)
            .price_range(dollars(0), dollars(1_001))
            .build();
        assert!(matches!(above_ceiling, Err(DomainError::InvalidConfiguration(_))));

        let state = FilterState::new(CEILING);
        assert!(state.with_price_range(dollars(10), dollars(5)).is_err());
        assert!(state.with_price_range(dollars(5), dollars(5)).is_ok());
    }

    #[test]
    fn toggle_is_symmetric_difference() {
        let state = FilterState::new(CEILING);
        let once = state.toggle_brand("EchoTech");
        assert!(once.selected_brands().contains("EchoTech"));

        let twice = once.toggle_brand("EchoTech");
        assert_eq!(twice, state);

        let colors = state.toggle_color("Black").toggle_color("Gray").toggle_color("Black");
        assert_eq!(colors.selected_colors().iter().collect::<Vec<_>>(), vec!["Gray"]);
    }

    #[test]
    fn transitions_leave_the_original_untouched() {
        let state = FilterState::new(CEILING);
        let sorted = state.with_sort_key(SortKey::Rating).toggle_brand("PixelPro");
        assert!(state.is_default());
        assert!(!sorted.is_default());
        assert_eq!(sorted.reset(), state);
    }

    #[test]
    fn selection_order_is_irrelevant() {
        let a = FilterState::builder(CEILING).brands(["A", "B"]).build().unwrap();
        let b = FilterState::builder(CEILING).brands(["B", "A", "B"]).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn validate_against_flags_stale_selections() {
        let catalog = Catalog::builtin().unwrap();
        let electronics = catalog.category(Category::Electronics);

        let ok = FilterState::new(CEILING).toggle_brand("EchoTech").toggle_color("Gray");
        assert!(ok.validate_against(&electronics).is_ok());

        let stale = FilterState::new(CEILING).toggle_brand("TimeKeeper");
        match stale.validate_against(&electronics) {
            Err(DomainError::InvalidConfiguration(msg)) => {
                assert!(msg.contains("TimeKeeper"));
                assert!(msg.contains("electronics"));
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }

        let stale_color = FilterState::new(CEILING).toggle_color("Walnut");
        assert!(stale_color.validate_against(&electronics).is_err());
    }

    #[test]
    fn serialized_state_is_validated_on_the_way_back_in() {
        let state = FilterState::builder(CEILING)
            .price_range(dollars(100), dollars(500))
            .brands(["SoundMaster"])
            .sort_key(SortKey::PriceHigh)
            .build()
            .unwrap();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"sort\":\"price-high\""));
        assert!(json.contains("\"priceRange\":[100.0,500.0]"));
        assert_eq!(serde_json::from_str::<FilterState>(&json).unwrap(), state);

        let bad = r#"{"ceiling": 1000, "priceRange": [0, 100], "sort": "newest"}"#;
        assert!(serde_json::from_str::<FilterState>(bad).is_err());
    }
}
