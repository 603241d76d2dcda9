use crate::error::ConfigError;
use std::env;

pub const PER_PAGE: u32 = 50;

const DEFAULT_BACKFILL_LIMIT: u32 = 500;
const DEFAULT_UPDATE_LIMIT: u32 = 200;
const DEFAULT_ANILIST_ENDPOINT: &str = "https://graphql.anilist.co";
const DEFAULT_COLLECTION: &str = "animes";

/// Run-mode knobs, sourced from the environment as in the original
/// deployment (CI cron jobs export these directly).
#[derive(Debug, Clone)]
pub struct SyncSettings {
    pub backfill_limit: u32,
    pub update_limit: u32,
    pub per_page: u32,
    pub force_update: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            backfill_limit: DEFAULT_BACKFILL_LIMIT,
            update_limit: DEFAULT_UPDATE_LIMIT,
            per_page: PER_PAGE,
            force_update: false,
        }
    }
}

impl SyncSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            backfill_limit: parse_limit("BACKFILL_LIMIT", DEFAULT_BACKFILL_LIMIT)?,
            update_limit: parse_limit("UPDATE_LIMIT", DEFAULT_UPDATE_LIMIT)?,
            per_page: PER_PAGE,
            force_update: env::var("FORCE_UPDATE").map(|v| v == "true").unwrap_or(false),
        })
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub endpoint: String,
}

impl CatalogSettings {
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("ANILIST_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ANILIST_ENDPOINT.to_string()),
        }
    }
}

/// Already-resolved store connection parameters. Minting the access token
/// (service-account flows etc.) happens outside this binary.
#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub project_id: String,
    pub access_token: String,
    pub collection: String,
}

impl StoreSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let project_id = env::var("FIRESTORE_PROJECT_ID")
            .map_err(|_| ConfigError::MissingCredential("FIRESTORE_PROJECT_ID"))?;
        let access_token = env::var("FIRESTORE_ACCESS_TOKEN")
            .map_err(|_| ConfigError::MissingCredential("FIRESTORE_ACCESS_TOKEN"))?;
        let collection =
            env::var("FIRESTORE_COLLECTION").unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());
        Ok(Self {
            project_id,
            access_token,
            collection,
        })
    }
}

fn parse_limit(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
            var,
            value: raw.clone(),
        }),
        Err(_) => Ok(default),
    }
}
