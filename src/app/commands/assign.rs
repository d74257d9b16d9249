use super::WorkspaceCommand;
use crate::app::error::DesignerError;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::workspace::Workspace;
use crate::app::structs::zone_id::ZoneId;
use crate::modules::display::sink::DisplayEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct AssignCommand {
    pub monitor: u8,
    pub zone: ZoneId,
    pub app: String,
}

impl AssignCommand {
    pub fn new<Z: Into<ZoneId>, A: Into<String>>(monitor: u8, zone: Z, app: A) -> Self {
        AssignCommand {
            monitor,
            zone: zone.into(),
            app: app.into(),
        }
    }
}

impl WorkspaceCommand for AssignCommand {
    fn apply(&self, workspace: &mut Workspace) -> Result<DisplayEvent, DesignerError> {
        let monitor = MonitorId::try_from(self.monitor)?;
        workspace.get_mut(monitor).set(&self.zone, Some(self.app.clone()));
        Ok(DisplayEvent::zone_changed(monitor, self.zone.clone(), Some(self.app.clone())))
    }
}
