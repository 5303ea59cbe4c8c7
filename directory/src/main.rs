//! Directory host: loads the collection once and writes one JSON profile
//! card per line to stdout.

use std::io::{self, Write};
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_directory::config::DirectorySettings;
use user_directory::domain::{CollectionLoader, CollectionState, ProfileCard, UserRecord};
use user_directory::outbound::http::{HttpSourceIdentity, HttpUserCollectionSource};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = DirectorySettings::load_from_iter(std::env::args_os())
        .map_err(|error| eyre!("failed to load directory settings: {error}"))?;
    let source = HttpUserCollectionSource::with_identity(
        settings.endpoint().wrap_err("invalid directory endpoint")?,
        settings.timeout(),
        HttpSourceIdentity {
            user_agent: settings.user_agent().to_owned(),
        },
    )
    .wrap_err("failed to build HTTP client")?;

    let loader = CollectionLoader::new(Arc::new(source));
    loader.start().await;

    match loader.current_state() {
        CollectionState::Loaded(records) => write_cards(&records),
        CollectionState::Failed => Err(eyre!("Failed to load data. Please try again.")),
        other => Err(eyre!("collection fetch did not settle: {other:?}")),
    }
}

fn write_cards(records: &[UserRecord]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in records {
        serde_json::to_writer(&mut out, &ProfileCard::from(record))
            .wrap_err("failed to encode profile card")?;
        writeln!(out).wrap_err("failed to write profile card")?;
    }
    Ok(())
}
