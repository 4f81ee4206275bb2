use super::*;
use crate::Slot;
use crate::UNMAPPED;
use crate::geometry::Euclidean;
use crate::geometry::Measure;
use crate::geometry::Points;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// End-to-end fixture: a jittered grid of blobs compressed down to one
/// medoid per surviving chain, then assigned back. Small constants keep
/// the run fast.
const BLOBS: usize = 4;
const PER_BLOB: usize = 100;
const SAMPLE_SIZE: usize = 24;
const SETS: usize = 3;

fn blob_cloud(rng: &mut SmallRng) -> Points {
    let centers = [[0.0f32, 0.0], [10.0, 0.0], [0.0, 10.0], [10.0, 10.0]];
    let mut cloud = Points::new(2);
    for center in centers.iter().take(BLOBS) {
        for _ in 0..PER_BLOB {
            cloud.push(&[
                center[0] + rng.random_range(-0.5..0.5),
                center[1] + rng.random_range(-0.5..0.5),
            ]);
        }
    }
    cloud
}

fn draw(cloud: &Points, rng: &mut SmallRng) -> Points {
    let mut set = Points::new(cloud.dims());
    for _ in 0..SAMPLE_SIZE {
        set.push(cloud.point(rng.random_range(0..cloud.len())));
    }
    set
}

#[test]
fn pipeline_compresses_and_reassigns() {
    let ref mut rng = SmallRng::seed_from_u64(7);
    let cloud = blob_cloud(rng);
    let sets = (0..SETS).map(|_| draw(&cloud, rng)).collect::<Vec<_>>();
    let mut maps = vec![vec![UNMAPPED; SAMPLE_SIZE]; SETS];
    let mut ledger = Ledger::new();
    for s in 0..SETS - 1 {
        let (head, tail) = maps.split_at_mut(s + 1);
        let matched = euclid_distance_mapped(
            s,
            &sets[s],
            &sets[s + 1],
            &mut head[s],
            &mut tail[0],
            &mut ledger,
        )
        .unwrap();
        assert!(matched <= SAMPLE_SIZE);
    }

    // every surviving chain threads one sample from every set
    let groups = collect_groups(SAMPLE_SIZE, ledger.chains(), &sets, &maps).unwrap();
    let survivors = ledger.survivors(SETS - 1).collect::<Vec<_>>();
    assert!(!survivors.is_empty());
    for &chain in survivors.iter() {
        assert_eq!(groups[chain].len(), SETS);
    }

    // one medoid per surviving chain becomes a compressed representative,
    // and its identity leads back to the sampled vertex it stands for
    let mut medoids = Points::new(cloud.dims());
    for &chain in survivors.iter() {
        let medoid = find_medoids(&groups[chain]).unwrap();
        let (set, index) = groups[chain].member(medoid);
        assert_eq!(sets[set].point(index), groups[chain].point(medoid));
        medoids.push(groups[chain].point(medoid));
    }

    // reassignment partitions the whole cloud across the representatives
    let assignments = euclid_distance_indexed(&cloud, &medoids).unwrap();
    assert_eq!(assignments.len(), cloud.len());
    assert!(
        assignments
            .iter()
            .all(|&a| (0..medoids.len() as Slot).contains(&a))
    );
    let partition = collect_groups(
        cloud.len(),
        medoids.len(),
        std::slice::from_ref(&cloud),
        std::slice::from_ref(&assignments),
    )
    .unwrap();
    assert_eq!(
        partition.iter().map(Cluster::len).sum::<usize>(),
        cloud.len()
    );

    // representatives sit inside blobs, so nothing assigns farther than a
    // blob diagonal away
    for (i, &a) in assignments.iter().enumerate() {
        let d = Euclidean.distance(cloud.point(i), medoids.point(a as usize));
        assert!(d < 11.0, "point {} landed {} from its representative", i, d);
    }
}
