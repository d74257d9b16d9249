use super::WorkspaceCommand;
use crate::app::error::DesignerError;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::workspace::Workspace;
use crate::app::structs::zone_id::ZoneId;
use crate::modules::display::sink::DisplayEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct UnassignCommand {
    pub monitor: u8,
    pub zone: ZoneId,
}

impl UnassignCommand {
    pub fn new<Z: Into<ZoneId>>(monitor: u8, zone: Z) -> Self {
        UnassignCommand {
            monitor,
            zone: zone.into(),
        }
    }
}

impl WorkspaceCommand for UnassignCommand {
    fn apply(&self, workspace: &mut Workspace) -> Result<DisplayEvent, DesignerError> {
        let monitor = MonitorId::try_from(self.monitor)?;
        workspace.get_mut(monitor).set(&self.zone, None);
        Ok(DisplayEvent::zone_changed(monitor, self.zone.clone(), None))
    }
}
