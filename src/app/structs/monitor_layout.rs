use super::split_mode::SplitMode;
use super::zone_id::ZoneId;

/// Split mode plus zone assignments, in insertion order.
///
/// Zones outside the current split mode are allowed to exist: assigning to an
/// unknown zone creates it and a split change keeps the previous keys around.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorLayout {
    split: SplitMode,
    zones: Vec<(ZoneId, Option<String>)>,
}

impl MonitorLayout {
    pub fn new(split: SplitMode) -> MonitorLayout {
        MonitorLayout {
            split,
            zones: split.default_zones().iter().map(|z| (ZoneId::from(*z), None)).collect(),
        }
    }

    pub fn split(&self) -> SplitMode {
        self.split
    }

    pub fn get(&self, zone: &ZoneId) -> Option<&str> {
        self.zones
            .iter()
            .find(|(z, _)| z == zone)
            .and_then(|(_, app)| app.as_deref())
    }

    pub fn set(&mut self, zone: &ZoneId, app: Option<String>) {
        match self.zones.iter_mut().find(|(z, _)| z == zone) {
            Some((_, slot)) => *slot = app,
            None => self.zones.push((zone.clone(), app)),
        }
    }

    pub fn set_split(&mut self, split: SplitMode) {
        self.split = split;
        for zone in split.default_zones() {
            let zone = ZoneId::from(*zone);
            if !self.zones.iter().any(|(z, _)| *z == zone) {
                self.zones.push((zone, None));
            }
        }
    }

    pub fn zones(&self) -> impl Iterator<Item = (&ZoneId, Option<&str>)> {
        self.zones.iter().map(|(z, app)| (z, app.as_deref()))
    }

    /// Zones of the current split mode, with their assignment.
    pub fn active_zones(&self) -> Vec<(ZoneId, Option<String>)> {
        self.split
            .default_zones()
            .iter()
            .map(|z| {
                let zone = ZoneId::from(*z);
                let app = self.get(&zone).map(|a| a.to_string());
                (zone, app)
            })
            .collect()
    }

    /// Non-empty assignments only; an empty name counts as no app.
    pub fn apps(&self) -> impl Iterator<Item = &str> {
        self.zones().filter_map(|(_, app)| app).filter(|app| !app.is_empty())
    }

    pub fn has_apps(&self) -> bool {
        self.apps().next().is_some()
    }
}
