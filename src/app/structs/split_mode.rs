use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub enum SplitMode {
    #[default]
    #[serde(rename = "single")]
    Single,
    #[serde(rename = "split-2")]
    Split2,
    #[serde(rename = "split-3")]
    Split3,
}

impl SplitMode {
    pub const VALID: [&'static str; 3] = ["single", "split-2", "split-3"];

    pub fn default_zones(&self) -> &'static [&'static str] {
        match self {
            SplitMode::Single => &["full"],
            SplitMode::Split2 => &["top", "bottom"],
            SplitMode::Split3 => &["left3", "center3", "right3"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitMode::Single => "single",
            SplitMode::Split2 => "split-2",
            SplitMode::Split3 => "split-3",
        }
    }
}

impl FromStr for SplitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(SplitMode::Single),
            "split-2" => Ok(SplitMode::Split2),
            "split-3" => Ok(SplitMode::Split3),
            _ => Err(format!(
                "Invalid split mode: {}, valid options are {}",
                s,
                SplitMode::VALID.join(", ")
            )),
        }
    }
}

impl Display for SplitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
