use crate::app::configs::deserializers;
use crate::app::structs::hotkey::{Hotkey, ModifierKey};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HotkeyConfig {
    #[serde(alias = "mod", alias = "modifier", deserialize_with = "deserializers::to_modifiers")]
    pub modifiers: Vec<ModifierKey>,
    #[serde(deserialize_with = "deserializers::to_trigger_key")]
    pub key: char,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        let hotkey = Hotkey::default();
        HotkeyConfig {
            modifiers: hotkey.modifiers().to_vec(),
            key: hotkey.trigger(),
        }
    }
}

impl From<&HotkeyConfig> for Hotkey {
    fn from(config: &HotkeyConfig) -> Self {
        Hotkey::new(config.modifiers.clone(), config.key)
    }
}
