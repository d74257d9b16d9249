use crate::app::error::DesignerError;
use std::fmt::Display;
use std::str::FromStr;

pub const MONITORS_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonitorId(u8);

impl MonitorId {
    pub fn all() -> impl Iterator<Item = MonitorId> {
        (1..=MONITORS_COUNT as u8).map(MonitorId)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub(crate) fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl TryFrom<u8> for MonitorId {
    type Error = DesignerError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match (1..=MONITORS_COUNT as u8).contains(&value) {
            true => Ok(MonitorId(value)),
            false => Err(DesignerError::MonitorNotFound(value)),
        }
    }
}

impl FromStr for MonitorId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("Invalid monitor: {s}, expected a number between 1 and {MONITORS_COUNT}"))?;
        MonitorId::try_from(id).map_err(|e| e.to_string())
    }
}

impl Display for MonitorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
