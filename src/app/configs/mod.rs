pub(crate) mod deserializers;
pub(crate) mod hotkey;
pub(crate) mod monitors;

use crate::app::catalog::{Catalog, DEFAULT_APPS};
use crate::app::structs::hotkey::Hotkey;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::workspace::Workspace;
use hotkey::HotkeyConfig;
use monitors::MonitorConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub hotkey: HotkeyConfig,
    pub catalog: CatalogConfig,
    #[serde(deserialize_with = "deserializers::to_monitors_map")]
    pub monitors: HashMap<MonitorId, MonitorConfig>,
    pub export: ExportConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(deserialize_with = "deserializers::to_app_names")]
    pub apps: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            apps: DEFAULT_APPS.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    pub fn hotkey(&self) -> Hotkey {
        Hotkey::from(&self.hotkey)
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.catalog.apps.clone())
    }

    pub fn workspace(&self) -> Workspace {
        let defaults = Workspace::default();
        let splits = MonitorId::all()
            .map(|id| {
                self.monitors
                    .get(&id)
                    .map(|c| c.split)
                    .unwrap_or(defaults.get(id).split())
            })
            .collect::<Vec<_>>();
        Workspace::new([splits[0], splits[1], splits[2], splits[3]])
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export.directory.clone().unwrap_or(PathBuf::from("."))
    }
}
