use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use storefront_catalog::{Catalog, Category, Product};
use storefront_core::{Price, ProductId, Rating};
use storefront_facets::{CategoryView, FacetConfig, FilterState, SortKey, apply};

const BRANDS: [&str; 6] = ["SoundMaster", "EchoTech", "VisionTech", "PixelPro", "ReadTech", "TechFit"];
const COLORS: [&str; 4] = ["Black", "Gray", "White", "Red"];

/// Synthetic catalog with deterministic prices, brands, colors and ratings.
fn synthetic_catalog(size: usize) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            id: ProductId::new(i as u32),
            name: format!("Product {i}"),
            price: Price::from_cents(((i * 7_919) % 100_000) as u64),
            image: String::new(),
            category: Category::Electronics,
            rating: Rating::from_decimal(((i * 31) % 51) as f64 / 10.0).unwrap(),
            review_count: (i % 250) as u32,
            brand: BRANDS[i % BRANDS.len()].to_string(),
            color: COLORS[i % COLORS.len()].to_string(),
        })
        .collect()
}

fn bench_apply_by_sort_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_by_sort_key");
    for size in [30usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        for sort in SortKey::ALL {
            let state = FilterState::builder(Price::from_cents(100_000))
                .price_range(Price::from_cents(5_000), Price::from_cents(80_000))
                .brands(["SoundMaster", "PixelPro", "TechFit"])
                .sort_key(sort)
                .build()
                .unwrap();
            group.bench_with_input(BenchmarkId::new(sort.as_str(), size), &catalog, |b, catalog| {
                b.iter(|| apply(black_box(catalog), black_box(&state)))
            });
        }
    }
    group.finish();
}

fn bench_view_transitions(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let config = FacetConfig::default();

    c.bench_function("category_view_toggle_cycle", |b| {
        b.iter(|| {
            let mut view = CategoryView::enter(catalog.category(Category::Electronics), &config);
            view.toggle_brand("SoundMaster").unwrap();
            view.set_sort_key(SortKey::PriceLow);
            view.toggle_color("Black").unwrap();
            view.reset();
            black_box(view.result_count())
        })
    });
}

criterion_group!(benches, bench_apply_by_sort_key, bench_view_transitions);
criterion_main!(benches);
