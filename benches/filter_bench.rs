//! Benchmarks for the launchboard filter/aggregate path
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use launchboard::analytics::{payload_outcome_rows, success_counts};
use launchboard::dataset::{LaunchDataset, PayloadRange, SiteSelection};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 4] = ["v1.1", "FT", "B4", "B5"];

fn create_test_dataset(count: usize) -> LaunchDataset {
    let mut csv = String::from(
        "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n",
    );
    for i in 0..count {
        let site = SITES[i % SITES.len()];
        let category = CATEGORIES[i % CATEGORIES.len()];
        let class = (i % 3 != 0) as u8;
        let payload = (i * 137) % 10_000;
        csv.push_str(&format!(
            "{},{},{},{},F9 {} B{:04},{}\n",
            i + 1,
            site,
            class,
            payload,
            category,
            1000 + i,
            category
        ));
    }
    LaunchDataset::from_reader(csv.as_bytes()).unwrap()
}

fn bench_success_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_counts");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| success_counts(black_box(&dataset), &SiteSelection::All))
        });

        let site = SiteSelection::parse("KSC LC-39A");
        group.bench_function(format!("single_site_{}", size), |b| {
            b.iter(|| success_counts(black_box(&dataset), &site))
        });
    }

    group.finish();
}

fn bench_payload_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_outcome_rows");

    for size in [100, 1000, 10000] {
        let dataset = create_test_dataset(size);
        let range = PayloadRange::new(2_000.0, 8_000.0);

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("all_sites_{}", size), |b| {
            b.iter(|| payload_outcome_rows(black_box(&dataset), &SiteSelection::All, &range))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_success_counts, bench_payload_rows);
criterion_main!(benches);
