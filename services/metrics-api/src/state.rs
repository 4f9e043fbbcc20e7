//! Application state for the metrics API.

use anyhow::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

use lst_common::RegionTimeSeries;

use crate::config::RegionsConfig;

/// Shared application state.
///
/// Time series live in memory only: persistence belongs to the
/// surrounding platform, this service is the computation and serving
/// surface. The region catalog is behind its own lock because regions
/// can be registered at runtime. Lock order is regions first, store
/// second, for any handler that needs both.
pub struct AppState {
    /// Region catalog with per-region derivation constants.
    pub regions: RwLock<RegionsConfig>,

    /// Per-region derived time series, keyed by region id.
    pub store: RwLock<HashMap<String, RegionTimeSeries>>,
}

impl AppState {
    /// Create a new AppState from the regions config directory.
    pub fn new(regions_dir: &str) -> Result<Self> {
        let regions = RegionsConfig::load_from_dir(regions_dir)?;
        Ok(Self::from_config(regions))
    }

    /// Create a new AppState from an already-loaded region catalog.
    pub fn from_config(regions: RegionsConfig) -> Self {
        let store = regions
            .regions
            .iter()
            .map(|r| (r.id.clone(), RegionTimeSeries::new()))
            .collect();

        Self {
            regions: RwLock::new(regions),
            store: RwLock::new(store),
        }
    }
}
