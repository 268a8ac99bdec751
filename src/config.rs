use anyhow::Context;
use serde::Deserialize;

use crate::router::route::{Route, RouteTable};

#[derive(Debug, Clone, Deserialize)]
pub struct RouteConfig {
    pub method: String,
    pub pattern: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub routes: Vec<RouteConfig>,
}

impl Config {
    /// Loads the route table file named by `ROUTES_FILE`, defaulting to
    /// "routes.yaml" in the working directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("ROUTES_FILE").unwrap_or_else(|_| "routes.yaml".to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table from {}", path))?;

        let cfg: Config = serde_yaml::from_str(&raw)
            .with_context(|| format!("Invalid route table in {}", path))?;

        Ok(cfg)
    }

    /// Builds a route table preserving file order.
    pub fn table(&self) -> RouteTable {
        let mut table = RouteTable::new();

        for entry in &self.routes {
            table.push(Route::new(entry.method.as_str(), entry.pattern.as_str()));
        }

        table
    }
}
