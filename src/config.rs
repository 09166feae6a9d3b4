//! Demonstration configuration: where the data lives and what to look for.

use std::env;
use std::path::PathBuf;

use record::Record;

/// Environment variable overriding the character data path.
pub const ENV_DATA: &str = "MENAGERIE_DATA";

/// Environment variable overriding the character to search for.
pub const ENV_TARGET: &str = "MENAGERIE_TARGET";

pub const DEFAULT_DATA_PATH: &str = "data/characters.txt";

pub const DEFAULT_CHAR_TARGET: char = 'm';

/// Suffix appended to the data path for the sorted snapshot.
pub const SNAPSHOT_SUFFIX: &str = ".sorted";

/// Targets for the map walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTargets {
    /// Looked up before and after sorting, then removed.
    pub key_to_find_and_delete: Record,
    pub key_to_add: Record,
    /// Looked up before and after sorting, then every entry holding it is removed.
    pub value_to_find_and_delete: String,
    pub value_to_add: String,
}

impl Default for MapTargets {
    fn default() -> Self {
        return MapTargets {
            key_to_find_and_delete: Record::new("Udavchyk", 18),
            key_to_add: Record::new("Vasylisk", 26),
            value_to_find_and_delete: "Myroslava".to_string(),
            value_to_add: "Daria".to_string(),
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub data_path: PathBuf,
    /// Where the sorted character array is saved. `None` skips the save.
    pub snapshot_path: Option<PathBuf>,
    pub char_target: char,
    pub map: MapTargets,
}

impl DemoConfig {
    /// Configuration for a given data file, with the snapshot beside it.
    pub fn with_data_path(data_path: impl Into<PathBuf>) -> DemoConfig {
        let data_path = data_path.into();
        let mut snapshot = data_path.clone().into_os_string();
        snapshot.push(SNAPSHOT_SUFFIX);

        return DemoConfig {
            data_path,
            snapshot_path: Some(PathBuf::from(snapshot)),
            char_target: DEFAULT_CHAR_TARGET,
            map: MapTargets::default(),
        };
    }

    /// Defaults, overridden by `MENAGERIE_DATA` and `MENAGERIE_TARGET`.
    pub fn from_env() -> DemoConfig {
        return Self::from_lookup(|name| env::var(name).ok());
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DemoConfig {
        let mut config = match lookup(ENV_DATA) {
            Some(path) if !path.trim().is_empty() => DemoConfig::with_data_path(path.trim()),
            _ => DemoConfig::default(),
        };

        if let Some(target) = lookup(ENV_TARGET).and_then(|t| t.trim().chars().next()) {
            config.char_target = target;
        }
        return config;
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        return DemoConfig::with_data_path(DEFAULT_DATA_PATH);
    }
}

/// The fixed map dataset: record keys with their owners, in insertion order.
pub fn default_map_entries() -> Vec<(Record, String)> {
    let entries = [
        ("Zmiika", 25, "Taras"),
        ("Udavchyk", 18, "Oksana"),
        ("Sirius", 32, "Myroslava"),
        ("Poloz", 22, "Borys"),
        ("Udavchyk", 15, "Larysa"),
        ("Orion", 28, "Myroslava"),
        ("Nahaina", 20, "Vsevolod"),
        ("Meduza", 30, "Oksana"),
        ("Kobra", 12, "Anton"),
        ("Aspid", 35, "Solomiia"),
    ];
    return entries
        .into_iter()
        .map(|(label, count, owner)| (Record::new(label, count), owner.to_string()))
        .collect();
}
