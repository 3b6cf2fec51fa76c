//! Performance benchmarks for the portal access boundary.
//!
//! - Exclusion evaluation against the configured table
//! - Exclusion evaluation as the prefix table grows
//! - Chrome visibility over HTTP
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use portal_access::api::{AppState, create_router};
use portal_access::config::ConfigLoader;
use portal_access::models::Zone;
use portal_access::routing::{ChromeVisibility, ExclusionTable};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const PATHS: [&str; 6] = [
    "/auth/login",
    "/profile",
    "/administration",
    "/admin/login",
    "/compliance/holidays/au",
    "",
];

/// Benchmark: both zones evaluated for a handful of typical paths.
fn bench_chrome_visibility(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/access.yaml").expect("Failed to load config");
    let table = config.exclusions();

    c.bench_function("chrome_visibility", |b| {
        b.iter(|| {
            for path in PATHS {
                black_box(ChromeVisibility::for_path(table, black_box(path)));
            }
        })
    });
}

/// Benchmark: a miss against tables of increasing size.
fn bench_table_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_scaling");

    for prefix_count in [1usize, 8, 64, 512].iter() {
        let table = ExclusionTable::new().with_prefixes(
            Zone::Navbar,
            (0..*prefix_count).map(|i| format!("/section{}/", i)),
        );

        group.throughput(Throughput::Elements(*prefix_count as u64));
        group.bench_with_input(
            BenchmarkId::new("prefixes", prefix_count),
            prefix_count,
            |b, _| b.iter(|| black_box(table.is_excluded(black_box("/profile/settings"), Zone::Navbar))),
        );
    }

    group.finish();
}

/// Benchmark: GET /chrome through the router.
fn bench_chrome_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/access.yaml").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    c.bench_function("chrome_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/chrome?path=/auth/login")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_chrome_visibility,
    bench_table_scaling,
    bench_chrome_endpoint,
);
criterion_main!(benches);
