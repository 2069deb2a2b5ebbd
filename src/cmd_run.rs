//! `run` subcommand.

use chrono::Local;
use tracing::info;

use hirewatch_config::Config;
use hirewatch_core::{DeliveryStatus, GeoPath, Runner};

use crate::adapters::build_runner;

/// Run once against today's date.
pub(crate) async fn run_once(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let runner = build_runner(config);
    run_with(&runner).await
}

pub(crate) async fn run_with(runner: &Runner) -> Result<(), Box<dyn std::error::Error>> {
    let today = Local::now().date_naive();
    let report = runner.run(today).await?;

    let geo_source = match report.geo_path {
        GeoPath::CacheHit => "cache",
        GeoPath::CacheMiss => "geocoder",
    };
    info!(
        "Searched near ({}, {}) from {}; {} card(s){}",
        report.geo.lat,
        report.geo.lng,
        geo_source,
        report.cards_found,
        if report.has_more { ", more available" } else { "" }
    );

    match report.delivery {
        DeliveryStatus::Skipped => info!("No new jobs, no email sent"),
        DeliveryStatus::Sent { status } => info!("Digest sent (status {})", status),
        DeliveryStatus::Failed(_) => {}
    }

    Ok(())
}
