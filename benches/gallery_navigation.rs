// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery navigation operations.
//!
//! Measures the performance of:
//! - Applying a loaded category and paging through it
//! - Lightbox navigation (next/previous with wraparound)
//! - Swipe classification through the input path

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iced_folio::domain::gallery::{Category, GalleryItem, Pagination};
use iced_folio::gallery::{GalleryController, LightboxInput, Message, ScrollLock};
use std::hint::black_box;

fn sample_items(count: usize) -> Vec<GalleryItem> {
    (0..count)
        .map(|i| {
            GalleryItem::new(
                format!("doc-{i}"),
                format!("Work {i}"),
                format!("https://cdn.example.com/{i}.jpg"),
                "branding",
            )
        })
        .collect()
}

fn loaded_controller(count: usize) -> GalleryController {
    let mut controller = GalleryController::new(ScrollLock::new());
    let ticket = controller.load_category(Category::Branding);
    controller.apply_load(ticket, Ok(sample_items(count)));
    controller
}

/// Benchmark loading a category and visiting every page.
fn bench_paging(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_paging");

    for count in [12usize, 120, 1_200] {
        let items = sample_items(count);
        group.bench_with_input(BenchmarkId::new("load_and_page", count), &items, |b, items| {
            b.iter(|| {
                let mut controller = GalleryController::new(ScrollLock::new());
                let ticket = controller.load_category(Category::Branding);
                controller.apply_load(ticket, Ok(items.clone()));
                for page in 1..=controller.page_count() {
                    controller.paginate(page);
                    black_box(controller.page_slice());
                }
            });
        });
    }

    group.bench_function("pagination_ranges", |b| {
        let pagination = Pagination::gallery(1_200);
        b.iter(|| {
            for page in 1..=pagination.page_count() {
                black_box(pagination.range(black_box(page)));
            }
        });
    });

    group.finish();
}

/// Benchmark lightbox navigation.
fn bench_lightbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_lightbox");

    let mut controller = loaded_controller(120);
    controller.open_lightbox(0);

    group.bench_function("next_full_cycle", |b| {
        b.iter(|| {
            for _ in 0..120 {
                controller.handle(Message::Next);
            }
            black_box(controller.lightbox_index());
        });
    });

    group.bench_function("swipe_previous", |b| {
        b.iter(|| {
            controller.handle(Message::Input(LightboxInput::TouchStart { x: 10.0 }));
            controller.handle(Message::Input(LightboxInput::TouchMove { x: 200.0 }));
            controller.handle(Message::Input(LightboxInput::TouchEnd));
            black_box(controller.lightbox_index());
        });
    });

    group.bench_function("open_close", |b| {
        let mut controller = loaded_controller(120);
        b.iter(|| {
            controller.open_lightbox(black_box(42));
            controller.close_lightbox();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_paging, bench_lightbox);
criterion_main!(benches);
