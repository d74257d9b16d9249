pub mod assets;
pub mod catalog;
pub mod cli_args;
pub mod commands;
pub mod configs;
pub mod designer;
pub mod designer_command;
pub mod error;

pub mod structs {
    pub mod hotkey;
    pub mod monitor_id;
    pub mod monitor_layout;
    pub mod split_mode;
    pub mod workspace;
    pub mod zone_id;
}
