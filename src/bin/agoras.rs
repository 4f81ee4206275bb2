//! Demonstration pipeline for the clustering engine.
//!
//! Draws a synthetic point cloud, chains sample sets into a merged graph,
//! takes one medoid per surviving chain as a compressed representative, and
//! assigns the whole cloud back to those representatives. The sample-size
//! control loop mirrors the sampling-based medoid search the engine was
//! built to serve: grow the sample when too few chains survive, shrink when
//! too many do.

use agoras::*;
use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::time::Instant;

/// Euler–Mascheroni constant, used by the expected-coverage sample size
/// ⌈k·ln k + γ·k⌉.
const GAMMA: f64 = 0.577_215_664_9;
/// Give up resampling after this many attempts.
const ATTEMPTS: usize = 8;

#[derive(Parser, Debug)]
#[command(about = "cluster a synthetic point cloud and report its medoid representatives")]
struct Args {
    /// number of points in the synthetic cloud
    #[arg(long, default_value_t = 100_000)]
    points: usize,
    /// number of compressed representatives to search for
    #[arg(long, default_value_t = 64)]
    clusters: usize,
    /// dimension of every point
    #[arg(long, default_value_t = 3)]
    dims: usize,
    /// number of independently drawn sample sets to chain together
    #[arg(long, default_value_t = 4)]
    sample_sets: usize,
    /// rng seed; identical seeds reproduce identical runs
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// emit the run summary as JSON instead of log lines
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Summary {
    points: usize,
    dims: usize,
    clusters: usize,
    sample_sets: usize,
    sample_size: usize,
    survivors: usize,
    representatives: usize,
    mean_distance: Distance,
    elapsed_ms: u128,
}

/// Draws `size` points from the cloud uniformly with replacement.
fn draw(cloud: &Points, size: usize, rng: &mut SmallRng) -> Points {
    let mut set = Points::new(cloud.dims());
    for _ in 0..size {
        set.push(cloud.point(rng.random_range(0..cloud.len())));
    }
    set
}

/// Chains `count` fresh sample sets through repeated merges, returning the
/// sets, their maps, and the sealed ledger.
fn chain(
    cloud: &Points,
    size: usize,
    count: usize,
    rng: &mut SmallRng,
) -> Result<(Vec<Points>, Vec<Vec<Slot>>, Ledger)> {
    let sets = (0..count).map(|_| draw(cloud, size, rng)).collect::<Vec<_>>();
    let mut maps = vec![vec![UNMAPPED; size]; count];
    let mut ledger = Ledger::new();
    for s in 0..count - 1 {
        let (head, tail) = maps.split_at_mut(s + 1);
        let matched = euclid_distance_mapped(
            s,
            &sets[s],
            &sets[s + 1],
            &mut head[s],
            &mut tail[0],
            &mut ledger,
        )?;
        log::info!(
            "{:<32}{:<32}",
            "merged sample sets",
            format!("{} -> {} matched {}", s, s + 1, matched)
        );
    }
    Ok((sets, maps, ledger))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    anyhow::ensure!(args.points >= 1, "need a non-empty cloud");
    anyhow::ensure!(args.clusters >= 1, "need at least one cluster");
    anyhow::ensure!(args.dims >= 1, "points need at least one dimension");
    anyhow::ensure!(args.sample_sets >= 2, "need at least two sample sets to merge");
    let clock = Instant::now();
    let ref mut rng = SmallRng::seed_from_u64(args.seed);
    let cloud = Points::random(args.points, args.dims, rng);

    // resample until enough chains survive every merge, within a margin
    let k = args.clusters as f64;
    let margin = (k / 40.0).ceil() as usize;
    let mut size = ((k * k.ln().max(0.0) + GAMMA * k).ceil() as usize).max(args.clusters);
    let (sets, maps, ledger, survivors) = (0..ATTEMPTS)
        .find_map(|attempt| {
            let (sets, maps, ledger) = match chain(&cloud, size, args.sample_sets, rng) {
                Ok(chained) => chained,
                Err(e) => return Some(Err(e)),
            };
            let survivors = ledger.survivors(args.sample_sets - 1).collect::<Vec<_>>();
            log::info!(
                "{:<32}{:<32}",
                "sampling attempt",
                format!("{} size {} survivors {}", attempt, size, survivors.len())
            );
            if survivors.len() < args.clusters {
                size += (size as f64 * 0.25).ceil() as usize;
                None
            } else if survivors.len() - args.clusters > margin && attempt + 1 < ATTEMPTS {
                size = (size as f64 * 0.95).ceil() as usize;
                None
            } else {
                Some(Ok((sets, maps, ledger, survivors)))
            }
        })
        .context("no sampling attempt produced enough surviving chains")??;

    let groups = collect_groups(size, ledger.chains(), &sets, &maps)?;
    let mut medoids = Points::new(args.dims);
    for &chain in survivors.iter().take(args.clusters) {
        let medoid = find_medoids(&groups[chain])?;
        medoids.push(groups[chain].point(medoid));
    }
    let assignments = euclid_distance_indexed(&cloud, &medoids)?;
    let mean_distance = assignments
        .iter()
        .enumerate()
        .map(|(i, &a)| Euclidean.distance(cloud.point(i), medoids.point(a as usize)))
        .sum::<Distance>()
        / cloud.len().max(1) as Distance;

    let summary = Summary {
        points: args.points,
        dims: args.dims,
        clusters: args.clusters,
        sample_sets: args.sample_sets,
        sample_size: size,
        survivors: survivors.len(),
        representatives: medoids.len(),
        mean_distance,
        elapsed_ms: clock.elapsed().as_millis(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        log::info!("{:<32}{:<32}", "representatives", summary.representatives);
        log::info!("{:<32}{:<32}", "mean distance", summary.mean_distance);
        log::info!("{:<32}{:<32}", "elapsed ms", summary.elapsed_ms);
        println!(
            "compressed {} points to {} medoids (mean distance {:.4}) in {} ms",
            summary.points, summary.representatives, summary.mean_distance, summary.elapsed_ms
        );
    }
    Ok(())
}
