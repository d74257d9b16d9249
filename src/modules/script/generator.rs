use super::nodes::{ScreenEntry, Script, Statement};
use super::serializer::to_lua;
use crate::app::structs::hotkey::Hotkey;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::workspace::Workspace;

pub const HEADER: [&str; 3] = [
    "Hammerspoon Workspace Configuration",
    "Generated by Workspace Designer",
    "Press the hotkey to activate your workspace!",
];

pub const EMPTY_WORKSPACE_COMMENT: &str = "Configure your workspace above to generate Lua code";

/// Apps left running when the workspace hotkey fires.
pub const KEEP_RUNNING: [&str; 2] = ["Hammerspoon", "Finder"];

/// Monitor number to `hs.screen.find` index. Hardware specific, not derived.
// TODO: confirm the 1 -> 5 and 4 -> 1 entries with the owner of the target machine
pub const SCREEN_MAP: [(&str, u8, u8); 4] = [("one", 1, 5), ("two", 2, 2), ("three", 3, 3), ("four", 4, 1)];

pub const LAUNCH_DELAY_SECS: u32 = 3;
pub const PLACEMENT_DELAY_SECS: u32 = 5;

pub fn display_index(monitor: MonitorId) -> u8 {
    SCREEN_MAP
        .iter()
        .find(|(_, m, _)| *m == monitor.get())
        .map(|(_, _, d)| *d)
        .unwrap_or(monitor.get())
}

pub fn build(workspace: &Workspace, hotkey: &Hotkey) -> Script {
    let mut script = Script::new();
    HEADER.iter().for_each(|h| {
        script.push(Statement::comment(*h));
    });
    script.push(Statement::Blank);

    if !workspace.has_apps() {
        script.push(Statement::comment(EMPTY_WORKSPACE_COMMENT));
        return script;
    }

    let screens = Statement::ScreenTable {
        entries: SCREEN_MAP
            .iter()
            .map(|(name, _, display)| ScreenEntry {
                name: name.to_string(),
                display: *display,
            })
            .collect(),
    };

    let mut launch_body = vec![screens, Statement::Blank];
    launch_body.extend(
        workspace
            .distinct_apps()
            .into_iter()
            .map(|app| Statement::LaunchOrFocus(app.to_string())),
    );
    launch_body.push(Statement::Blank);
    launch_body.push(Statement::comment("Window placement after delay"));
    launch_body.push(Statement::do_after(
        PLACEMENT_DELAY_SECS,
        vec![Statement::comment("Add window placement logic here")],
    ));

    script.push(Statement::HotkeyBind {
        modifiers: hotkey.modifiers().iter().map(|m| m.lua_name().to_string()).collect(),
        key: hotkey.trigger().to_string(),
        body: vec![
            Statement::comment("Close all apps except essentials"),
            Statement::KillAllExcept {
                keep: KEEP_RUNNING.iter().map(|k| k.to_string()).collect(),
            },
            Statement::Blank,
            Statement::do_after(LAUNCH_DELAY_SECS, launch_body),
        ],
    });

    script
}

pub fn generate(workspace: &Workspace, hotkey: &Hotkey) -> String {
    to_lua(&build(workspace, hotkey))
}
