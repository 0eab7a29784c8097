use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;
use tokio::io::AsyncWriteExt;

use markergen_core::{AppConfig, BundleError, FightMarkers, FightSelector, ReportBundle};

use crate::config::{AppConfigExt, ConfigError};

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout")]
    Stdout(#[source] std::io::Error),

    #[error(transparent)]
    Bundle(#[from] BundleError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to encode output")]
    Encode(#[from] serde_json::Error),

    #[error("export task failed")]
    Join(#[from] tokio::task::JoinError),
}

pub struct GenerateOptions {
    pub input: PathBuf,
    pub fight: FightSelector,
    pub output: Option<PathBuf>,
    pub min_interval: Option<i64>,
    pub max_tracks: Option<i64>,
}

async fn read_bundle(path: &Path) -> Result<String, CommandError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn write_stdout(text: &str) -> Result<(), CommandError> {
    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(text.as_bytes())
        .await
        .map_err(CommandError::Stdout)?;
    stdout.write_all(b"\n").await.map_err(CommandError::Stdout)?;
    stdout.flush().await.map_err(CommandError::Stdout)
}

pub async fn generate(options: GenerateOptions, config: AppConfig) -> Result<(), CommandError> {
    let timer = Instant::now();
    let text = read_bundle(&options.input).await?;
    let config = config.with_overrides(options.min_interval, options.max_tracks);
    let selector = options.fight;

    let (json, tracks, markers, zone_id) =
        tokio::task::spawn_blocking(move || -> Result<_, CommandError> {
            let events = ReportBundle::from_json(&text)?.select(selector)?;
            let markers = FightMarkers::compute(&events);
            let names = markers.ability_names();
            let filter =
                config.filter_for_zone(events.fight.zone_id, names.iter().map(String::as_str));

            let doc = markers.into_timeline(&filter);
            Ok((
                doc.to_json_pretty()?,
                doc.tracks.len(),
                doc.marker_count(),
                events.fight.zone_id,
            ))
        })
        .await??;

    match &options.output {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .map_err(|source| CommandError::Write {
                    path: path.clone(),
                    source,
                })?;
        }
        None => write_stdout(&json).await?,
    }

    tracing::info!(
        zone_id,
        tracks,
        markers,
        output = ?options.output,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Timeline generated"
    );
    Ok(())
}

pub async fn abilities(input: &Path, fight: FightSelector) -> Result<(), CommandError> {
    let text = read_bundle(input).await?;

    let names = tokio::task::spawn_blocking(move || -> Result<_, CommandError> {
        let events = ReportBundle::from_json(&text)?.select(fight)?;
        Ok(FightMarkers::compute(&events).ability_names())
    })
    .await??;

    write_stdout(&names.join("\n")).await
}

pub async fn show_config(config_file: Option<&Path>) -> Result<(), CommandError> {
    let path = match config_file {
        Some(path) => path.to_path_buf(),
        None => AppConfig::path()?,
    };
    let config = AppConfig::try_load_from(&path)?;

    println!("config file: {}", path.display());
    println!("min interval: {} ms", config.global.min_interval);
    println!("max tracks: {}", config.global.max_tracks);

    let mut zones: Vec<_> = config.zones.iter().collect();
    zones.sort_by(|a, b| a.0.cmp(b.0));
    for (zone_id, zone) in zones {
        let hidden = zone.skills.values().filter(|s| !s.export).count();
        println!(
            "zone {zone_id}: {} skills configured, {hidden} hidden",
            zone.skills.len()
        );
    }
    Ok(())
}
