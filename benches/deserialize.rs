use criterion::{criterion_group, criterion_main, Criterion};
use bptf_classifieds::response::{
    GetListingsResponse,
    GetMyListingsResponse,
    SearchResponse,
};

fn criterion_benchmark(c: &mut Criterion) {
    let search_bytes = include_bytes!("../src/response/fixtures/search.json");
    let my_listings_bytes = include_bytes!("../src/response/fixtures/my_listings.json");
    let snapshot_bytes = include_bytes!("../src/response/fixtures/snapshot.json");

    c.bench_function("deserializes search response", |b| b.iter(|| {
        serde_json::from_slice::<SearchResponse>(search_bytes).ok();
    }));

    c.bench_function("deserializes listings", |b| b.iter(|| {
        serde_json::from_slice::<GetMyListingsResponse>(my_listings_bytes).ok();
    }));

    c.bench_function("deserializes snapshot", |b| b.iter(|| {
        serde_json::from_slice::<GetListingsResponse>(snapshot_bytes).ok();
    }));
}

criterion_group!{
    name = benches;
    config = Criterion::default().sample_size(100);
    targets = criterion_benchmark
}

criterion_main!(benches);
