use crate::app::structs::split_mode::SplitMode;
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct MonitorConfig {
    pub split: SplitMode,
}
