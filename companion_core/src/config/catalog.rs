//! Stat catalog loading
//!
//! The catalog maps the display labels emitted by the character data source
//! onto canonical [`StatType`] keys, and describes which derived stats each
//! attribute converts into.

use super::ConfigError;
use crate::types::StatType;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use tracing::{debug, error};

/// On-disk layout of the catalog table
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    stats: Vec<CatalogEntry>,
    #[serde(default)]
    stones: StoneRules,
    #[serde(default)]
    conversion: ConversionRules,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    key: StatType,
    label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoneRules {
    #[serde(default)]
    percent_scaled: Vec<StatType>,
}

#[derive(Debug, Clone, Deserialize)]
struct ConversionRules {
    #[serde(default)]
    primary: Vec<StatType>,
    #[serde(default = "default_primary_coefficient")]
    primary_coefficient: f64,
    #[serde(default = "default_secondary_coefficient")]
    secondary_coefficient: f64,
    #[serde(default)]
    templates: BTreeMap<String, Vec<StatType>>,
}

impl Default for ConversionRules {
    fn default() -> Self {
        ConversionRules {
            primary: Vec::new(),
            primary_coefficient: default_primary_coefficient(),
            secondary_coefficient: default_secondary_coefficient(),
            templates: BTreeMap::new(),
        }
    }
}

fn default_primary_coefficient() -> f64 {
    0.1
}
fn default_secondary_coefficient() -> f64 {
    0.2
}

/// Bidirectional label <-> key mapping plus attribute conversion templates
#[derive(Debug, Clone)]
pub struct StatCatalog {
    labels: HashMap<StatType, String>,
    by_label: HashMap<String, StatType>,
    templates: HashMap<StatType, Vec<StatType>>,
    primary: HashSet<StatType>,
    primary_coefficient: f64,
    secondary_coefficient: f64,
    stone_percent_scaled: HashSet<StatType>,
}

impl StatCatalog {
    /// A catalog that resolves nothing
    pub fn empty() -> Self {
        StatCatalog {
            labels: HashMap::new(),
            by_label: HashMap::new(),
            templates: HashMap::new(),
            primary: HashSet::new(),
            primary_coefficient: default_primary_coefficient(),
            secondary_coefficient: default_secondary_coefficient(),
            stone_percent_scaled: HashSet::new(),
        }
    }

    fn from_file(file: CatalogFile) -> Result<Self, ConfigError> {
        let mut catalog = StatCatalog::empty();

        for entry in file.stats {
            if entry.key == StatType::Unknown {
                return Err(ConfigError::ValidationError(
                    "the Unknown sentinel cannot be given a label".to_string(),
                ));
            }
            if catalog.labels.contains_key(&entry.key) {
                return Err(ConfigError::ValidationError(format!(
                    "stat key {} declared twice",
                    entry.key
                )));
            }
            // A later key sharing a label takes over reverse lookup
            if let Some(shadowed) = catalog.by_label.insert(entry.label.clone(), entry.key) {
                debug!(
                    label = %entry.label,
                    kept = %entry.key,
                    shadowed = %shadowed,
                    "label shared by two stat keys"
                );
            }
            catalog.labels.insert(entry.key, entry.label);
        }

        for (source, targets) in file.conversion.templates {
            let stat = StatType::from_key(&source).ok_or_else(|| {
                ConfigError::ValidationError(format!("unknown conversion source: {}", source))
            })?;
            if targets.contains(&StatType::Unknown) {
                return Err(ConfigError::ValidationError(format!(
                    "conversion template for {} targets Unknown",
                    source
                )));
            }
            catalog.templates.insert(stat, targets);
        }

        catalog.primary = file.conversion.primary.into_iter().collect();
        catalog.primary_coefficient = file.conversion.primary_coefficient;
        catalog.secondary_coefficient = file.conversion.secondary_coefficient;
        catalog.stone_percent_scaled = file.stones.percent_scaled.into_iter().collect();

        Ok(catalog)
    }

    /// Resolve an already normalized label to its canonical key
    pub fn lookup(&self, label: &str) -> Option<StatType> {
        self.by_label.get(label).copied()
    }

    /// Display label registered for a key
    pub fn label(&self, stat: StatType) -> Option<&str> {
        self.labels.get(&stat).map(String::as_str)
    }

    /// Label if registered, otherwise the key itself
    pub fn display_name(&self, stat: StatType) -> String {
        self.label(stat)
            .map(str::to_string)
            .unwrap_or_else(|| stat.as_key().to_string())
    }

    /// Derived stat types an attribute converts into (empty when none)
    pub fn template(&self, stat: StatType) -> &[StatType] {
        self.templates.get(&stat).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Multiplier applied to an attribute before it is spread over its template
    pub fn conversion_coefficient(&self, stat: StatType) -> f64 {
        if self.primary.contains(&stat) {
            self.primary_coefficient
        } else {
            self.secondary_coefficient
        }
    }

    /// Whether a socketed stone reports this stat at 100x scale
    pub fn is_stone_percent_scaled(&self, stat: StatType) -> bool {
        self.stone_percent_scaled.contains(&stat)
    }

    /// Number of labelled keys
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for StatCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

/// Load a stat catalog from a TOML file
pub fn load_catalog(path: &Path) -> Result<StatCatalog, ConfigError> {
    let file: CatalogFile = super::load_toml(path)?;
    StatCatalog::from_file(file)
}

/// Load a stat catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<StatCatalog, ConfigError> {
    let file: CatalogFile = super::parse_toml(content)?;
    StatCatalog::from_file(file)
}

/// Get the catalog shipped with the crate
pub fn default_catalog() -> StatCatalog {
    let toml = include_str!("../../config/stat_catalog.toml");
    parse_catalog(toml).unwrap_or_else(|e| {
        error!(error = %e, "embedded stat catalog is invalid");
        StatCatalog::empty()
    })
}
