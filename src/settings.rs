use std::{net::SocketAddr, sync::Arc};

use color_eyre::{eyre::WrapErr, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::origin::Origin;

const ENV_PREFIX: &str = "TEMPBIN";
const CONFIG_FILE: &str = "tempbin";

pub type ArcSettings = Arc<Settings>;

/// Name of an environment variable read by this program.
pub fn env_name(name: &str) -> String {
    format!("{ENV_PREFIX}_{name}")
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub general: GeneralSettings,
    pub service: ServiceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneralSettings {
    pub listen_address: ListenAddress,
    pub public_url: Origin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceSettings {
    /// Path of the snippet creation endpoint on the service.
    pub create_path: String,
    /// Origin of the snippet backend. Without it snippets are posted to
    /// `general.public_url`, which then has to route `create_path` to the
    /// backend.
    #[serde(default)]
    pub backend_url: Option<Origin>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListenAddress {
    One(SocketAddr),
    Many(Vec<SocketAddr>),
}

impl From<ListenAddress> for Vec<SocketAddr> {
    fn from(value: ListenAddress) -> Self {
        match value {
            ListenAddress::One(addr) => vec![addr],
            ListenAddress::Many(addrs) => addrs,
        }
    }
}

impl Settings {
    /// Where snippets are posted. Only ever taken from configuration, never
    /// from a request.
    pub fn backend_origin(&self) -> &Origin {
        self.service
            .backend_url
            .as_ref()
            .unwrap_or(&self.general.public_url)
    }

    pub fn try_load() -> Result<Self> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .wrap_err("failed to read settings")?
            .try_deserialize()
            .wrap_err("failed to deserialize settings")
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>> {
        Ok(Config::builder()
            .set_default("general.listen_address", "127.0.0.1:3000")?
            .set_default("general.public_url", "http://localhost:3000")?
            .set_default("service.create_path", "/create")?)
    }
}
