mod origin;
mod result_area;
mod routes;
mod service;
mod settings;
mod snippet;
mod state;
mod submitter;

use std::{net::SocketAddr, sync::Arc};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use tokio::net::TcpListener;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

use crate::{
    settings::{env_name, Settings},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    dotenvy::dotenv().ok();
    init_tracing().wrap_err("failed to set global tracing subscriber")?;

    info!(
        "Starting {} {}...",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    let settings = Arc::new(Settings::try_load()?);

    let http_client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .wrap_err("failed to build HTTP client")?;

    let state = AppState::from_settings(settings.clone(), http_client);

    if settings.service.backend_url.is_none() {
        warn!(
            "service.backend_url is not set; {} must route {} to the snippet backend",
            settings.general.public_url, settings.service.create_path
        );
    }
    info!(endpoint = state.snippet_service.endpoint(), "Posting snippets to backend");

    let app = routes::router(state);
    let listener = init_listener(&settings).await?;

    info!(
        "listening on {} ({})",
        listener
            .local_addr()
            .wrap_err("failed to get local address")?,
        settings.general.public_url
    );

    axum::serve(listener, app.into_make_service())
        .await
        .wrap_err("failed to run server")?;

    Ok(())
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_span_events(FmtSpan::NEW | FmtSpan::CLOSE))
        .with(ErrorLayer::default())
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var(env_name("LOG"))
                .from_env()?,
        )
        .try_init()?;

    Ok(())
}

async fn init_listener(settings: &Settings) -> Result<TcpListener> {
    let addr: Vec<SocketAddr> = settings.general.listen_address.clone().into();

    TcpListener::bind(addr.as_slice())
        .await
        .wrap_err("failed to bind listener")
}
