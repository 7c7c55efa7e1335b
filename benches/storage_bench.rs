//! Benchmarks for chatlog storage operations

use chatlog::{Config, LogStore, NewChatLog};
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

fn storage_benchmarks(c: &mut Criterion) {
    let now = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    // Small threshold keeps each read-modify-write bounded
    c.bench_function("append_with_rollover", |b| {
        let temp = TempDir::new().unwrap();
        let config = Config::builder()
            .storage_dir(temp.path())
            .max_file_size(64 * 1024)
            .build();
        let store = LogStore::open(config).unwrap();

        b.iter(|| {
            store
                .append_at(NewChatLog::new("benchmark message", "true"), now)
                .unwrap()
        });
    });

    c.bench_function("query_single_day_1000_records", |b| {
        let temp = TempDir::new().unwrap();
        let store = LogStore::open_path(temp.path()).unwrap();
        for i in 0..1000 {
            store
                .append_at(NewChatLog::new(format!("message {i}"), "true"), now)
                .unwrap();
        }

        b.iter(|| store.query_at(Some(now.date()), Some(now.date()), now.date()).unwrap());
    });
}

criterion_group!(benches, storage_benchmarks);
criterion_main!(benches);
