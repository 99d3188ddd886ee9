//! Criterion benchmarks for Marquee.
//!
//! Covers the two hot paths:
//! - Edit distance (full matrix vs. the thresholded two-row variant)
//! - Greedy grouping over venue lists of increasing size

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use marquee::canonical::group_similar_venues;
use marquee::levenshtein::{levenshtein_distance, levenshtein_distance_threshold};
use marquee::normalize::normalize;

/// Generate venue names with deliberate near-duplicate spellings.
fn generate_venues(count: usize) -> Vec<String> {
    let bases = [
        "The Hult Center",
        "WOW Hall",
        "Shedd Institute",
        "Actors Cabaret",
        "Very Little Theatre",
        "Oregon Contemporary Theatre",
        "McDonald Theatre",
        "Beall Concert Hall",
    ];

    let mut venues = Vec::with_capacity(count);
    for i in 0..count {
        let base = bases[i % bases.len()];
        let venue = match i % 4 {
            0 => base.to_string(),
            1 => base.to_lowercase(),
            2 => format!("{base}!"),
            _ => format!("  {base} {}", i / bases.len()),
        };
        venues.push(venue);
    }
    venues
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    group.bench_function("full_matrix", |b| {
        b.iter(|| {
            levenshtein_distance(
                black_box("oregon contemporary theatre"),
                black_box("oregon contemporary theater"),
            )
        })
    });

    group.bench_function("thresholded", |b| {
        b.iter(|| {
            levenshtein_distance_threshold(
                black_box("oregon contemporary theatre"),
                black_box("oregon contemporary theater"),
                black_box(2),
            )
        })
    });

    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box("  The  Hult Center (Main Stage)!  ")))
    });
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    for size in [50, 200, 800] {
        let venues = generate_venues(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("group_similar_venues_{size}"), |b| {
            b.iter(|| group_similar_venues(black_box(&venues)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_normalize, bench_grouping);
criterion_main!(benches);
