use crate::app::structs::hotkey::ModifierKey;
use crate::app::structs::monitor_id::MonitorId;
use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;
use std::collections::HashMap;

pub fn to_modifiers<'de, D>(deserializer: D) -> Result<Vec<ModifierKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    parse_modifiers(&s).map_err(D::Error::custom)
}

pub fn to_trigger_key<'de, D>(deserializer: D) -> Result<char, D::Error>
where
    D: Deserializer<'de>,
{
    let s: String = String::deserialize(deserializer)?;
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(D::Error::custom(format!(
            "Invalid key: {s}, the trigger must be a single character"
        ))),
    }
}

pub fn to_app_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let apps: Vec<String> = Vec::deserialize(deserializer)?;
    if apps.iter().any(|a| a.trim().is_empty()) {
        return Err(D::Error::custom("App names cannot be empty"));
    }

    let mut unique: Vec<String> = Vec::with_capacity(apps.len());
    for app in apps {
        if unique.contains(&app) {
            return Err(D::Error::custom(format!("Duplicated app in catalog: {app}")));
        }
        unique.push(app);
    }
    Ok(unique)
}

pub fn to_monitors_map<'de, D, T>(deserializer: D) -> Result<HashMap<MonitorId, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value: HashMap<String, T> = HashMap::deserialize(deserializer)?;
    value
        .into_iter()
        .map(|(k, v)| k.parse::<MonitorId>().map(|id| (id, v)))
        .collect::<Result<HashMap<MonitorId, T>, String>>()
        .map_err(D::Error::custom)
}

/// Parses `cmd+alt+ctrl`. Repeated modifiers are dropped, keeping the first occurrence.
fn parse_modifiers(s: &str) -> Result<Vec<ModifierKey>, String> {
    let keys: Vec<&str> = s.trim().split('+').map(|k| k.trim()).filter(|k| !k.is_empty()).collect();
    let mut parsed_keys: Vec<ModifierKey> = vec![];
    for k in keys {
        let key = ModifierKey::parse(k)
            .ok_or_else(|| format!("Invalid modifiers: {s}, valid modifiers are cmd, alt, ctrl, shift"))?;
        if !parsed_keys.contains(&key) {
            parsed_keys.push(key);
        }
    }
    Ok(parsed_keys)
}
