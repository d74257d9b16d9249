pub mod assign;
pub mod split;
pub mod unassign;

use crate::app::error::DesignerError;
use crate::app::structs::workspace::Workspace;
use crate::modules::display::sink::DisplayEvent;
use assign::AssignCommand;
use enum_dispatch::enum_dispatch;
use split::SplitCommand;
use unassign::UnassignCommand;

/// A change to the workspace model. Returns the event the display needs to mirror it.
#[enum_dispatch(WorkspaceCommandEnum)]
pub trait WorkspaceCommand {
    fn apply(&self, workspace: &mut Workspace) -> Result<DisplayEvent, DesignerError>;
}

#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceCommandEnum {
    AssignCommand,
    UnassignCommand,
    SplitCommand,
}
