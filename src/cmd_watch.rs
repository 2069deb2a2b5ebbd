//! `watch` subcommand: repeat runs on a cron schedule.

use std::str::FromStr;

use chrono::Local;
use cron::Schedule;
use tracing::{error, info, warn};

use hirewatch_config::Config;

use crate::adapters::build_runner;
use crate::cmd_run::run_with;

/// Parse a six-field cron expression.
pub(crate) fn parse_schedule(expr: &str) -> Result<Schedule, cron::error::Error> {
    Schedule::from_str(expr)
}

/// Run on every upcoming fire time until Ctrl-C.
pub(crate) async fn watch(
    config: &Config,
    schedule: Schedule,
) -> Result<(), Box<dyn std::error::Error>> {
    let runner = build_runner(config);
    info!("Watching for new jobs");

    loop {
        let Some(next) = schedule.upcoming(Local).next() else {
            warn!("Schedule has no upcoming fire time, stopping");
            return Ok(());
        };
        let wait = (next - Local::now()).to_std().unwrap_or_default();
        info!("Next run at {}", next.to_rfc3339());

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted, stopping watch");
                return Ok(());
            }
        }

        if let Err(e) = run_with(&runner).await {
            error!("Scheduled run failed: {}", e);
        }
    }
}
