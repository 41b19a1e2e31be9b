use anyhow::{Context, Result};
use clap::Parser;
use geocluster::{
    partition_by_quarter, read_incidents, render_table, BoundingBox, ClusterSession,
    PartitionReport, DEFAULT_THRESHOLD_M,
};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

/// Cluster geocoded incidents per year/quarter and report the hotspots
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Incident CSV with id, occurred_at, location columns
    csv: PathBuf,

    /// Dendrogram cut threshold in meters
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_M)]
    threshold_m: f64,

    /// Southern edge of the valid coordinate box
    #[arg(long, default_value_t = 36.6)]
    min_lat: f64,

    /// Northern edge of the valid coordinate box
    #[arg(long, default_value_t = 37.1)]
    max_lat: f64,

    /// Western edge of the valid coordinate box
    #[arg(long, default_value_t = -76.6)]
    min_lng: f64,

    /// Eastern edge of the valid coordinate box
    #[arg(long, default_value_t = -75.9)]
    max_lng: f64,

    /// Write the full per-partition reports as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start_time = Instant::now();

    // Step 1: Ingest and clean the incident CSV
    let step1_start = Instant::now();
    println!("Step 1: Ingesting incidents from {}...", args.csv.display());
    let bounds = BoundingBox {
        min_lat: args.min_lat,
        max_lat: args.max_lat,
        min_lng: args.min_lng,
        max_lng: args.max_lng,
    };
    let file = File::open(&args.csv)
        .with_context(|| format!("failed to open {}", args.csv.display()))?;
    let (records, stats) = read_incidents(file, &bounds)?;
    println!(
        "✓ Kept {} rows ({} malformed, {} out of bounds) [{:.2}s]\n",
        stats.kept,
        stats.malformed,
        stats.out_of_bounds,
        step1_start.elapsed().as_secs_f64()
    );

    // Step 2: Partition by year and quarter
    let step2_start = Instant::now();
    println!("Step 2: Partitioning by year/quarter...");
    let partitions = partition_by_quarter(&records);
    println!(
        "✓ {} partitions [{:.2}s]\n",
        partitions.len(),
        step2_start.elapsed().as_secs_f64()
    );

    // Step 3: Cluster each partition
    let step3_start = Instant::now();
    println!(
        "Step 3: Clustering at {:.0} m (complete linkage)...\n",
        args.threshold_m
    );
    let session = ClusterSession::new(args.threshold_m)?;
    let mut reports = Vec::new();

    for (label, points) in &partitions {
        let run = session.run_partition(*label, points)?;
        let report = PartitionReport::from_clustering(&run);
        println!(
            "  {} - {} points, {} clusters",
            label, report.point_count, report.cluster_count
        );
        reports.push(report);
    }
    println!(
        "\n✓ Clustering complete [{:.2}s]\n",
        step3_start.elapsed().as_secs_f64()
    );

    // Step 4: Report
    println!("Step 4: Summary\n");
    print!("{}", render_table(&reports));

    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&reports)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("\n✓ Wrote JSON reports to {}", path.display());
    }

    println!(
        "\nDone in {:.2}s total",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
