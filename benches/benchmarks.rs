use agoras::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        assigning_nearest_clusters,
        merging_sample_sets,
        collecting_groups,
        finding_medoids,
}

fn assigning_nearest_clusters(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let data = Points::random(100_000, 3, rng);
    let clusters = Points::random(256, 3, rng);
    c.bench_function("assign 100k points to 256 clusters", |b| {
        b.iter(|| euclid_distance_indexed(&data, &clusters).unwrap())
    });
}

fn merging_sample_sets(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(1);
    let one = Points::random(512, 3, rng);
    let two = Points::random(512, 3, rng);
    c.bench_function("merge two 512-point sample sets", |b| {
        b.iter(|| {
            let mut map_one = vec![UNMAPPED; 512];
            let mut map_two = vec![UNMAPPED; 512];
            let mut ledger = Ledger::new();
            euclid_distance_mapped(0, &one, &two, &mut map_one, &mut map_two, &mut ledger)
                .unwrap()
        })
    });
}

fn collecting_groups(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(2);
    let sets = (0..4).map(|_| Points::random(4096, 3, rng)).collect::<Vec<_>>();
    let maps = (0..4)
        .map(|_| {
            (0..4096)
                .map(|_| rng.random_range(0..256) as Slot)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    c.bench_function("collect 256 groups from 4 sample sets", |b| {
        b.iter(|| collect_groups(4096, 256, &sets, &maps).unwrap())
    });
}

fn finding_medoids(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(3);
    let points = Points::random(1024, 3, rng);
    let mut cluster = Cluster::new(3);
    for (i, p) in points.iter().enumerate() {
        cluster.push((0, i), p);
    }
    c.bench_function("find the medoid of a 1024-point cluster", |b| {
        b.iter(|| find_medoids(&cluster).unwrap())
    });
}
