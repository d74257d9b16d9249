use super::commands::assign::AssignCommand;
use super::commands::split::SplitCommand;
use super::commands::unassign::UnassignCommand;
use super::commands::WorkspaceCommandEnum;
use super::error::DesignerError;
use super::structs::split_mode::SplitMode;
use std::path::PathBuf;
use std::str::FromStr;

pub const COMMANDS: [&str; 17] = [
    "drop <monitor> <zone> <app>",
    "assign <monitor> <zone> <app>",
    "select <monitor> <zone> <app>",
    "remove <monitor> <zone>",
    "unassign <monitor> <zone>",
    "split <monitor> <single|split-2|split-3>",
    "show",
    "script",
    "catalog",
    "hotkey",
    "copy",
    "download [folder]",
    "save-preset",
    "load-presets",
    "open-config",
    "help",
    "quit|exit",
];

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    Workspace(WorkspaceCommandEnum),
    Select(AssignCommand),
    Show,
    Script,
    Catalog,
    Hotkey,
    Copy,
    Download(Option<PathBuf>),
    SavePreset,
    LoadPresets,
    OpenConfig,
    Help,
    Quit,
}

impl From<WorkspaceCommandEnum> for DesignerCommand {
    fn from(cmd: WorkspaceCommandEnum) -> Self {
        DesignerCommand::Workspace(cmd)
    }
}

impl FromStr for DesignerCommand {
    type Err = DesignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (name, args) = line
            .split_once(char::is_whitespace)
            .map(|(n, a)| (n, a.trim()))
            .unwrap_or((line, ""));

        let invalid = || {
            DesignerError::InvalidCommand(format!(
                "Invalid command: {}, valid commands are: {}",
                line,
                COMMANDS.join(", ")
            ))
        };
        let no_args = |cmd: DesignerCommand| match args.is_empty() {
            true => Ok(cmd),
            false => Err(invalid()),
        };

        match name.to_lowercase().as_str() {
            "drop" | "assign" => {
                let (monitor, zone, app) = parse_zone_app(args).ok_or_else(invalid)?;
                let app = app.ok_or_else(invalid)?;
                Ok(WorkspaceCommandEnum::from(AssignCommand::new(monitor, zone, app)).into())
            }
            "select" => {
                let (monitor, zone, app) = parse_zone_app(args).ok_or_else(invalid)?;
                Ok(DesignerCommand::Select(AssignCommand::new(
                    monitor,
                    zone,
                    app.unwrap_or_default(),
                )))
            }
            "remove" | "unassign" => {
                let parts: Vec<&str> = args.split_whitespace().collect();
                match parts.as_slice() {
                    [monitor, zone] => {
                        let monitor = monitor.parse::<u8>().map_err(|_| invalid())?;
                        Ok(WorkspaceCommandEnum::from(UnassignCommand::new(monitor, *zone)).into())
                    }
                    _ => Err(invalid()),
                }
            }
            "split" => {
                let parts: Vec<&str> = args.split_whitespace().collect();
                match parts.as_slice() {
                    [monitor, split] => {
                        let monitor = monitor.parse::<u8>().map_err(|_| invalid())?;
                        let split = split.parse::<SplitMode>().map_err(DesignerError::InvalidCommand)?;
                        Ok(WorkspaceCommandEnum::from(SplitCommand::new(monitor, split)).into())
                    }
                    _ => Err(invalid()),
                }
            }
            "download" => match args.is_empty() {
                true => Ok(DesignerCommand::Download(None)),
                false => Ok(DesignerCommand::Download(Some(PathBuf::from(unquote(args))))),
            },
            "show" => no_args(DesignerCommand::Show),
            "script" => no_args(DesignerCommand::Script),
            "catalog" => no_args(DesignerCommand::Catalog),
            "hotkey" => no_args(DesignerCommand::Hotkey),
            "copy" => no_args(DesignerCommand::Copy),
            "save-preset" => no_args(DesignerCommand::SavePreset),
            "load-presets" => no_args(DesignerCommand::LoadPresets),
            "open-config" => no_args(DesignerCommand::OpenConfig),
            "help" => no_args(DesignerCommand::Help),
            "quit" | "exit" => no_args(DesignerCommand::Quit),
            _ => Err(invalid()),
        }
    }
}

/// `<monitor> <zone> [app...]`, where the app is the rest of the line.
fn parse_zone_app(args: &str) -> Option<(u8, &str, Option<String>)> {
    let (monitor, rest) = args.split_once(char::is_whitespace)?;
    let monitor = monitor.parse::<u8>().ok()?;
    let rest = rest.trim_start();
    let (zone, app) = match rest.split_once(char::is_whitespace) {
        Some((zone, app)) => (zone, Some(unquote(app.trim()).to_string())),
        None => (rest, None),
    };
    match zone.is_empty() {
        true => None,
        false => Some((monitor, zone, app)),
    }
}

fn unquote(s: &str) -> &str {
    match s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        true => &s[1..s.len() - 1],
        false => s,
    }
}
