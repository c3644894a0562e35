//! Subcommand handlers.
//!
//! The CLI plays the role of the interactive front end: it owns the current
//! mood and location and wires the resolver and discovery client together
//! through a [`DiscoverySession`].

use anyhow::Context as _;
use futures::stream::{self, StreamExt};
use moodmap_core::{AppConfig, Coordinates, Location, Mood};
use moodmap_osm::{DiscoverySession, LocationResolver, MoodTemplate, PlaceDiscovery};

use crate::render;

/// Explicit coordinates become a "Current Location"; otherwise the configured
/// default centre is used.
pub(crate) fn starting_location(
    config: &AppConfig,
    coordinates: Option<(f64, f64)>,
) -> anyhow::Result<Location> {
    match coordinates {
        Some((lat, lng)) => {
            let coords = Coordinates::new(lat, lng).context("invalid --lat/--lng")?;
            Ok(Location::current(coords))
        }
        None => Ok(config.default_location.clone()),
    }
}

async fn resolve_or_bail(config: &AppConfig, query: &str) -> anyhow::Result<Location> {
    let resolver = LocationResolver::from_config(config)?;
    match resolver.resolve(query).await {
        Some(location) => Ok(location),
        None => anyhow::bail!("Location not found: {query}"),
    }
}

pub(crate) async fn run_resolve(config: &AppConfig, query: &str, json: bool) -> anyhow::Result<()> {
    let location = resolve_or_bail(config, query).await?;
    render::print_location(&location, json)
}

pub(crate) async fn run_discover(
    config: &AppConfig,
    mood_key: &str,
    coordinates: Option<(f64, f64)>,
    json: bool,
) -> anyhow::Result<()> {
    let mood = MoodTemplate::for_key(mood_key).mood;
    let location = starting_location(config, coordinates)?;
    let discovery = PlaceDiscovery::from_config(config)?;
    let places = discovery.discover(Some(mood), location.coordinates()).await;
    render::print_places(&location, Some(mood), &places, json)
}

pub(crate) async fn run_explore(
    config: &AppConfig,
    near: Option<&str>,
    mood_key: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let session = DiscoverySession::new(
        PlaceDiscovery::from_config(config)?,
        config.default_location.clone(),
    );

    if let Some(query) = near {
        let location = resolve_or_bail(config, query).await?;
        session.set_location(location).await;
    }
    if let Some(key) = mood_key {
        session.set_mood(Some(MoodTemplate::for_key(key).mood)).await;
    }

    let location = session.location().await;
    let mood = session.mood().await;
    let places = session.places().await;
    render::print_places(&location, mood, &places, json)
}

pub(crate) async fn run_survey(
    config: &AppConfig,
    near: Option<&str>,
    concurrency: usize,
) -> anyhow::Result<()> {
    let location = match near {
        Some(query) => resolve_or_bail(config, query).await?,
        None => config.default_location.clone(),
    };
    let center = location.coordinates();
    let discovery = PlaceDiscovery::from_config(config)?;

    println!("Surveying moods around {}...", location.display_name);

    let mut results: Vec<_> = stream::iter(Mood::ALL)
        .map(|mood| {
            let discovery = &discovery;
            async move { (mood, discovery.try_discover(Some(mood), center).await) }
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;
    results.sort_by_key(|(mood, _)| Mood::ALL.iter().position(|m| m == mood));

    let mut failed = 0usize;
    for (mood, result) in &results {
        match result {
            Ok(places) => println!("  \u{2713} {:<12} {:>4} places", mood.label(), places.len()),
            Err(e) => {
                failed += 1;
                println!("  \u{2717} {:<12} {e}", mood.label());
            }
        }
    }

    if failed == results.len() {
        anyhow::bail!("discovery failed for every mood");
    }
    Ok(())
}
