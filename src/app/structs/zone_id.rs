use std::fmt::Display;

/// Placeholder labels for the zone-ids the designer knows about.
const ZONE_NAMES: [(&str, &str); 8] = [
    ("top", "Top Half"),
    ("bottom", "Bottom Half"),
    ("full", "Fullscreen"),
    ("left", "Left Half"),
    ("right", "Right Half"),
    ("left3", "1/3"),
    ("center3", "1/3"),
    ("right3", "1/3"),
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    pub fn new<T: Into<String>>(id: T) -> ZoneId {
        ZoneId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unknown zone-ids are labelled with the raw id.
    pub fn label(&self) -> &str {
        ZONE_NAMES
            .iter()
            .find(|(id, _)| *id == self.0)
            .map(|(_, name)| *name)
            .unwrap_or(self.0.as_str())
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        ZoneId::new(id)
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
