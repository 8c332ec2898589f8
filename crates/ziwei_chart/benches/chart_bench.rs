use std::sync::Arc;

use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_chart::{
    Branch, ChartContext, FixedClock, Gender, LunisolarRequest, NoCache, SharedCache, SolarRequest,
    Stem, StemBranchRequest, SyntheticCalendar, TableTranslator, TransformationCache,
    chart_from_lunisolar, chart_from_solar, palaces_from_stem_branch,
};

fn context(cache: Arc<dyn TransformationCache>) -> ChartContext {
    ChartContext::builder(Arc::new(SyntheticCalendar::new()))
        .clock(Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2059, 6, 1, 0, 0, 0).unwrap(),
        )))
        .translator(Arc::new(TableTranslator::builtin().unwrap()))
        .cache(cache)
        .build()
}

fn lunisolar_bench(c: &mut Criterion) {
    let ctx = context(Arc::new(SharedCache::new()));
    let req = LunisolarRequest::new(Gender::Male, "2024-1-15-6");

    let mut group = c.benchmark_group("lunisolar");
    group.bench_function("chart_from_lunisolar", |b| {
        b.iter(|| chart_from_lunisolar(&ctx, black_box(&req)))
    });
    group.finish();
}

fn solar_bench(c: &mut Criterion) {
    let birth = Utc.with_ymd_and_hms(2000, 1, 1, 4, 0, 0).unwrap();
    let req = SolarRequest::new(Gender::Female, birth);
    let cached = context(Arc::new(SharedCache::new()));
    let uncached = context(Arc::new(NoCache));

    let mut group = c.benchmark_group("solar");
    group.bench_function("chart_from_solar_shared_cache", |b| {
        b.iter(|| chart_from_solar(&cached, black_box(&req)))
    });
    group.bench_function("chart_from_solar_no_cache", |b| {
        b.iter(|| chart_from_solar(&uncached, black_box(&req)))
    });
    group.finish();
}

fn simulated_bench(c: &mut Criterion) {
    let ctx = context(Arc::new(NoCache));
    let req = StemBranchRequest {
        year_stem: Stem::Jia,
        ziwei_branch: Branch::Chen,
        main_palace_branch: Branch::Shen,
        language: None,
    };

    let mut group = c.benchmark_group("simulated");
    group.bench_function("palaces_from_stem_branch", |b| {
        b.iter(|| palaces_from_stem_branch(&ctx, black_box(&req)))
    });
    group.finish();
}

criterion_group!(benches, lunisolar_bench, solar_bench, simulated_bench);
criterion_main!(benches);
