use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ivy_core::{aggregate, present, CalendarZone, EmptyState, ExpandState};
use ivy_domain::{Transaction, TransactionKind};
use uuid::Uuid;

fn build_sample_records(count: usize) -> Vec<Transaction> {
    let checking = Uuid::new_v4();
    let savings = Uuid::new_v4();
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();

    let mut records = Vec::with_capacity(count);
    for idx in 0..count {
        let time = start + Duration::hours((idx % (24 * 365)) as i64);
        let amount = 5.0 + (idx % 100) as f64;
        match idx % 10 {
            0 => records.push(Transaction::planned(
                TransactionKind::Expense,
                amount,
                time,
                checking,
            )),
            1 => {
                let batch = Uuid::new_v4();
                records.push(
                    Transaction::realized(TransactionKind::Expense, amount, time, checking)
                        .with_batch(batch),
                );
                records.push(
                    Transaction::realized(TransactionKind::Income, amount, time, savings)
                        .with_batch(batch),
                );
            }
            2 => records.push(Transaction::realized(
                TransactionKind::Income,
                amount,
                time,
                checking,
            )),
            _ => records.push(Transaction::realized(
                TransactionKind::Expense,
                amount,
                time,
                checking,
            )),
        }
    }
    records
}

fn bench_aggregate(c: &mut Criterion) {
    let records = build_sample_records(black_box(10_000));
    let now = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
    let calendar = CalendarZone::parse("Europe/Berlin").expect("known zone");

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let list = aggregate(black_box(&records), now, &calendar);
            black_box(list);
        })
    });

    let list = aggregate(&records, now, &calendar);
    let empty = EmptyState::default();
    c.bench_function("present_10k", |b| {
        b.iter(|| black_box(present(&list, ExpandState::default(), &empty)))
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
