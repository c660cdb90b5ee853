// Benchmark for item placement
// Compares bucketing once per render against a linear scan per cell

use chrono::{Duration, Local, NaiveDate, TimeZone};
use content_calendar::models::item::ScheduledItem;
use content_calendar::services::placement::{items_for_day, DayIndex};
use content_calendar::utils::date::month_grid;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn queue(count: usize) -> Vec<ScheduledItem> {
    let base = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    (0..count)
        .map(|n| {
            let naive = (base + Duration::days((n % 31) as i64))
                .and_hms_opt((n % 24) as u32, 0, 0)
                .unwrap();
            let item = ScheduledItem::new(n as i64, format!("Post {}", n));
            match Local.from_local_datetime(&naive).earliest() {
                Some(at) if n % 10 != 0 => item.scheduled(at),
                _ => item,
            }
        })
        .collect()
}

fn bench_month_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("month_placement");
    let grid = month_grid(2024, 3);

    for count in [10, 100, 1000].iter() {
        let items = queue(*count);

        group.bench_with_input(BenchmarkId::new("day_index", count), &items, |b, items| {
            b.iter(|| {
                let index = DayIndex::build(black_box(items));
                grid.iter()
                    .flatten()
                    .flatten()
                    .map(|day| index.items_for(*day).len())
                    .sum::<usize>()
            });
        });

        group.bench_with_input(BenchmarkId::new("linear_scan", count), &items, |b, items| {
            b.iter(|| {
                grid.iter()
                    .flatten()
                    .flatten()
                    .map(|day| items_for_day(black_box(items), *day).len())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_month_placement);
criterion_main!(benches);
