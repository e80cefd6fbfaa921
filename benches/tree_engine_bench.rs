use checkbox_tree::api::{TreeEngineConfig, TreeStateEngine};
use checkbox_tree::core::{CheckModel, NodeValue, RawNode};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// 20 regions x 25 districts x 20 towns.
fn wide_tree() -> Vec<RawNode> {
    (0..20)
        .map(|region| {
            let districts = (0..25)
                .map(|district| {
                    let towns = (0..20)
                        .map(|town| {
                            RawNode::leaf(
                                format!("t-{region}-{district}-{town}"),
                                format!("Town {region}/{district}/{town}"),
                            )
                        })
                        .collect();
                    RawNode::parent(
                        format!("d-{region}-{district}"),
                        format!("District {region}/{district}"),
                        towns,
                    )
                })
                .collect();
            RawNode::parent(format!("r-{region}"), format!("Region {region}"), districts)
        })
        .collect()
}

fn bench_flatten_10k(c: &mut Criterion) {
    let nodes = wide_tree();
    let config = TreeEngineConfig::new(CheckModel::All);

    c.bench_function("flatten_10k", |b| {
        b.iter(|| {
            let engine = TreeStateEngine::with_nodes(config, black_box(&nodes))
                .expect("flatten should succeed");
            black_box(engine.len());
        })
    });
}

fn bench_region_toggle_all_model(c: &mut Criterion) {
    let nodes = wide_tree();
    let mut engine = TreeStateEngine::with_nodes(TreeEngineConfig::new(CheckModel::All), &nodes)
        .expect("flatten should succeed");
    let region = NodeValue::from("r-7");
    let mut checked = false;

    c.bench_function("region_toggle_all_model", |b| {
        b.iter(|| {
            checked = !checked;
            engine.toggle_checked(black_box(&region), checked);
        })
    });
}

fn bench_filter_10k(c: &mut Criterion) {
    let nodes = wide_tree();
    let mut engine = TreeStateEngine::with_nodes(TreeEngineConfig::default(), &nodes)
        .expect("flatten should succeed");

    c.bench_function("filter_10k", |b| {
        b.iter(|| {
            engine.filter_nodes(black_box("town 7/1"));
            engine.filter_nodes(black_box(""));
        })
    });
}

criterion_group!(
    benches,
    bench_flatten_10k,
    bench_region_toggle_all_model,
    bench_filter_10k
);
criterion_main!(benches);
