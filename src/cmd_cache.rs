//! `cache` subcommand handlers.

use hirewatch_config::Config;
use hirewatch_store::{FileGeoCache, GeoCache};

use crate::cli::CacheAction;

/// Handle cache subcommands.
pub(crate) async fn handle_cache_command(
    action: CacheAction,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let cache = FileGeoCache::new(config.storage.geo_cache_path());

    match action {
        CacheAction::Show => match cache.load().await? {
            Some(geo) => {
                println!("{}", cache.path().display());
                println!("{}", serde_json::to_string_pretty(&geo)?);
            }
            None => println!("No cached coordinate at {}", cache.path().display()),
        },
        CacheAction::Clear => {
            if cache.clear().await? {
                println!("Removed {}", cache.path().display());
            } else {
                println!("Nothing to remove at {}", cache.path().display());
            }
        }
    }

    Ok(())
}
