use super::WorkspaceCommand;
use crate::app::error::DesignerError;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::split_mode::SplitMode;
use crate::app::structs::workspace::Workspace;
use crate::modules::display::sink::DisplayEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitCommand {
    pub monitor: u8,
    pub split: SplitMode,
}

impl SplitCommand {
    pub fn new(monitor: u8, split: SplitMode) -> Self {
        SplitCommand { monitor, split }
    }
}

impl WorkspaceCommand for SplitCommand {
    fn apply(&self, workspace: &mut Workspace) -> Result<DisplayEvent, DesignerError> {
        let monitor = MonitorId::try_from(self.monitor)?;
        let layout = workspace.get_mut(monitor);
        layout.set_split(self.split);
        Ok(DisplayEvent::LayoutChanged {
            monitor,
            split: self.split,
            zones: layout.active_zones(),
        })
    }
}
