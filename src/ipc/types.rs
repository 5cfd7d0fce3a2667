use rusqlite::Connection;
use serde::Deserialize;

use crate::config::Config;
use crate::db;
use crate::jobs;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    /// In-memory store, seeded once at startup.
    pub db: Connection,
    pub config: Config,
    pub jobs: jobs::Registry,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<AppState> {
        Ok(AppState {
            db: db::open_memory_db()?,
            config,
            jobs: jobs::Registry::default(),
        })
    }
}
