//! Pricing benchmarks
//!
//! The breakdown is recomputed on every keystroke, so a full pricing pass
//! (form parsing, pricing, rendering) must stay well under a frame.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use printshop_common::{OrderSelection, RateTable};
use printshop_storefront::{compute, FormData, SummaryView};

fn order(extras: usize) -> OrderSelection {
    OrderSelection::new(240, 150)
        .with_color_mode("mixed")
        .with_binding("perfect")
        .with_paper("gloss")
        .with_shipping("expedited")
        .with_extras(["laminate", "tabs", "proof", "doesNotExist"].into_iter().take(extras))
}

/// Benchmark the pricing pass alone
fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");
    let rates = RateTable::standard();

    for extras in [0usize, 2, 4].iter() {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("extras", extras), extras, |b, &extras| {
            let selection = order(extras);
            b.iter(|| compute(black_box(&selection), black_box(&rates)));
        });
    }

    group.finish();
}

/// Benchmark one input event: read the form, price it, render the panel
fn bench_input_event(c: &mut Criterion) {
    let rates = RateTable::standard();
    let form: FormData = [
        ("pages", "240"),
        ("copies", "150"),
        ("colorMode", "mixed"),
        ("binding", "perfect"),
        ("paper", "gloss"),
        ("extras", "laminate"),
        ("extras", "proof"),
        ("shipping", "expedited"),
    ]
    .into_iter()
    .collect();

    c.bench_function("input_event", |b| {
        b.iter(|| {
            let selection = OrderSelection::from(black_box(&form));
            SummaryView::render(&compute(&selection, &rates))
        });
    });
}

criterion_group!(benches, bench_compute, bench_input_event);
criterion_main!(benches);
