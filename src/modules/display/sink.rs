use crate::app::catalog::Catalog;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::split_mode::SplitMode;
use crate::app::structs::zone_id::ZoneId;

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayEvent {
    ZoneChanged {
        monitor: MonitorId,
        zone: ZoneId,
        app: Option<String>,
    },
    LayoutChanged {
        monitor: MonitorId,
        split: SplitMode,
        zones: Vec<(ZoneId, Option<String>)>,
    },
}

impl DisplayEvent {
    pub fn zone_changed(monitor: MonitorId, zone: ZoneId, app: Option<String>) -> Self {
        DisplayEvent::ZoneChanged { monitor, zone, app }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayError {
    ZoneNotFound { monitor: MonitorId, zone: ZoneId },
}

/// Receives every model change after it happened.
pub trait DisplaySink {
    fn handle(&mut self, event: &DisplayEvent, catalog: &Catalog) -> Result<(), DisplayError>;
    fn render(&self) -> String;
}
