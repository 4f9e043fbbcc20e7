//! Region catalog configuration loading.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use lst_common::{BoundingBox, Region, RegionKind};
use lst_processor::RegionConfig;

/// One region definition from a YAML catalog file.
///
/// Derivation constants may be overridden per region; omitted fields
/// fall back to the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionDefinition {
    pub id: String,
    pub name: String,
    pub bbox: BoundingBox,
    #[serde(rename = "type", default)]
    pub kind: RegionKind,
    #[serde(default)]
    pub config: RegionConfig,
}

impl RegionDefinition {
    /// Catalog entry for API listing.
    pub fn to_region(&self) -> Region {
        Region {
            id: self.id.clone(),
            name: self.name.clone(),
            bbox: self.bbox,
            kind: self.kind,
        }
    }
}

/// The full region catalog.
#[derive(Debug, Clone)]
pub struct RegionsConfig {
    pub regions: Vec<RegionDefinition>,
}

impl RegionsConfig {
    /// Load region definitions from a directory of YAML files.
    ///
    /// Each `.yaml`/`.yml` file holds one region definition. If the
    /// directory does not exist, the built-in catalog is used.
    pub fn load_from_dir(dir: &str) -> Result<Self> {
        let path = Path::new(dir);

        if !path.exists() {
            tracing::warn!(
                "regions config directory {} does not exist, using built-in catalog",
                dir
            );
            return Ok(Self::builtin());
        }

        let mut regions = Vec::new();
        for entry in std::fs::read_dir(path)
            .with_context(|| format!("Failed to read directory: {}", dir))?
        {
            let entry = entry?;
            let file_path = entry.path();

            let is_yaml = file_path
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false);
            if !is_yaml {
                continue;
            }

            let content = std::fs::read_to_string(&file_path)
                .with_context(|| format!("Failed to read: {:?}", file_path))?;
            let definition: RegionDefinition = serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse region definition: {:?}", file_path))?;

            definition
                .config
                .validate()
                .map_err(|e| anyhow::anyhow!("{:?}: {}", file_path, e))?;

            regions.push(definition);
        }

        regions.sort_by(|a, b| a.id.cmp(&b.id));
        tracing::info!("Loaded {} region definitions from {}", regions.len(), dir);

        Ok(Self { regions })
    }

    /// The built-in region catalog.
    pub fn builtin() -> Self {
        let builtin = |id: &str, name: &str, bbox: BoundingBox| RegionDefinition {
            id: id.to_string(),
            name: name.to_string(),
            bbox,
            kind: RegionKind::Builtin,
            config: RegionConfig::default(),
        };

        Self {
            regions: vec![
                builtin(
                    "NYC001",
                    "New York City",
                    BoundingBox::new(-74.2589, 40.4774, -73.7004, 40.9176),
                ),
                builtin(
                    "LAX001",
                    "Los Angeles",
                    BoundingBox::new(-118.6682, 33.7037, -118.1553, 34.3373),
                ),
                builtin(
                    "CHI001",
                    "Chicago",
                    BoundingBox::new(-87.9402, 41.6446, -87.5241, 42.0230),
                ),
                builtin(
                    "MIA001",
                    "Miami",
                    BoundingBox::new(-80.3198, 25.7095, -80.1398, 25.8557),
                ),
            ],
        }
    }

    /// Find a region definition by id.
    pub fn find(&self, id: &str) -> Option<&RegionDefinition> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Add a region definition, keeping the catalog sorted by id.
    pub fn insert(&mut self, definition: RegionDefinition) {
        self.regions.push(definition);
        self.regions.sort_by(|a, b| a.id.cmp(&b.id));
    }

    /// Catalog entries for API listing.
    pub fn catalog(&self) -> Vec<Region> {
        self.regions.iter().map(|r| r.to_region()).collect()
    }
}
