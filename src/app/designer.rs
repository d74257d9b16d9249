use super::catalog::Catalog;
use super::commands::{WorkspaceCommand, WorkspaceCommandEnum};
use super::designer_command::{DesignerCommand, COMMANDS};
use super::error::{DesignerError, DesignerSuccess};
use super::structs::hotkey::Hotkey;
use super::structs::workspace::Workspace;
use crate::modules::display::sink::DisplaySink;
use crate::modules::export::clipboard::ClipboardWriter;
use crate::modules::export::download::{download, DOWNLOAD_MIME_TYPE};
use crate::modules::script::generator::generate;
use std::path::PathBuf;

pub const DEFAULT_PRESET_NAME: &str = "Default Workspace";
pub const COPY_CONFIRMATION: &str = "Script copied to clipboard!";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignerContext {
    pub workspace: Workspace,
    pub hotkey: Hotkey,
    pub catalog: Catalog,
}

/// Owns the designer state. Every command runs to completion (model, display, script)
/// before `execute` returns.
pub struct Designer<D: DisplaySink> {
    context: DesignerContext,
    display: D,
    clipboard: Box<dyn ClipboardWriter>,
    output: String,
    export_dir: PathBuf,
    config_path: Option<PathBuf>,
}

impl<D: DisplaySink> Designer<D> {
    pub fn new(context: DesignerContext, display: D, clipboard: Box<dyn ClipboardWriter>, export_dir: PathBuf) -> Self {
        let output = generate(&context.workspace, &context.hotkey);
        Designer {
            context,
            display,
            clipboard,
            output,
            export_dir,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, config_path: PathBuf) -> Self {
        self.config_path = Some(config_path);
        self
    }

    pub fn context(&self) -> &DesignerContext {
        &self.context
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn execute(&mut self, command: DesignerCommand) -> Result<DesignerSuccess, DesignerError> {
        log::trace!("{:?}", command);
        match command {
            DesignerCommand::Workspace(cmd) => self.apply(cmd),
            DesignerCommand::Select(cmd) => {
                if cmd.app.is_empty() {
                    return Ok(DesignerSuccess::NoChange);
                }
                if !self.context.catalog.contains(&cmd.app) {
                    return DesignerError::AppNotInCatalog(cmd.app).into();
                }
                self.apply(cmd.into())
            }
            DesignerCommand::Show => Ok(DesignerSuccess::Message(self.display.render())),
            DesignerCommand::Script => Ok(DesignerSuccess::Message(self.output.clone())),
            DesignerCommand::Catalog => Ok(DesignerSuccess::Message(self.context.catalog.apps().join("\n"))),
            DesignerCommand::Hotkey => Ok(DesignerSuccess::Message(format!(
                "{}\n{} - Configure your apps",
                self.context.hotkey.display(),
                DEFAULT_PRESET_NAME
            ))),
            DesignerCommand::Copy => self.copy(),
            DesignerCommand::Download(dir) => self.download(dir),
            DesignerCommand::SavePreset => DesignerError::NotImplemented("Preset saving").into(),
            DesignerCommand::LoadPresets => DesignerError::NotImplemented("Preset loading").into(),
            DesignerCommand::OpenConfig => match &self.config_path {
                Some(path) => open::that(path)
                    .map(|_| DesignerSuccess::NoChange)
                    .map_err(DesignerError::from),
                None => DesignerError::Io("No configuration file in use".to_string()).into(),
            },
            DesignerCommand::Help => Ok(DesignerSuccess::Message(COMMANDS.join("\n"))),
            DesignerCommand::Quit => Ok(DesignerSuccess::Quit),
        }
    }

    /// The model is updated and the script regenerated even when the display
    /// has no widget for the zone; that case is reported as `ZoneNotFound`.
    fn apply(&mut self, command: WorkspaceCommandEnum) -> Result<DesignerSuccess, DesignerError> {
        let event = command.apply(&mut self.context.workspace)?;
        let displayed = self.display.handle(&event, &self.context.catalog);
        self.output = generate(&self.context.workspace, &self.context.hotkey);
        displayed?;
        Ok(DesignerSuccess::Updated)
    }

    fn copy(&mut self) -> Result<DesignerSuccess, DesignerError> {
        self.clipboard.write_text(&self.output).map_err(|e| {
            log::error!("Clipboard write failed: {e}");
            DesignerError::ClipboardUnavailable
        })?;
        Ok(DesignerSuccess::Message(COPY_CONFIRMATION.to_string()))
    }

    fn download(&self, dir: Option<PathBuf>) -> Result<DesignerSuccess, DesignerError> {
        let dir = dir.unwrap_or(self.export_dir.clone());
        let path = download(&dir, &self.output)?;
        log::info!("Script saved to {}", path.display());
        Ok(DesignerSuccess::Message(format!(
            "Saved {} ({})",
            path.display(),
            DOWNLOAD_MIME_TYPE
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::{Designer, DesignerContext, COPY_CONFIRMATION};
    use crate::app::catalog::Catalog;
    use crate::app::designer_command::DesignerCommand;
    use crate::app::error::{DesignerError, DesignerSuccess};
    use crate::app::structs::monitor_id::MonitorId;
    use crate::app::structs::zone_id::ZoneId;
    use crate::modules::display::board::Board;
    use crate::modules::display::sink::{DisplayError, DisplayEvent, DisplaySink};
    use crate::modules::export::clipboard::ClipboardWriter;
    use crate::modules::export::download::DOWNLOAD_FILE_NAME;
    use crate::modules::script::generator::EMPTY_WORKSPACE_COMMENT;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingSink {
        events: Vec<DisplayEvent>,
    }

    impl DisplaySink for RecordingSink {
        fn handle(&mut self, event: &DisplayEvent, _catalog: &Catalog) -> Result<(), DisplayError> {
            self.events.push(event.clone());
            Ok(())
        }

        fn render(&self) -> String {
            format!("{} events", self.events.len())
        }
    }

    #[derive(Clone, Default)]
    struct FakeClipboard {
        content: Rc<RefCell<Option<String>>>,
        broken: bool,
    }

    impl ClipboardWriter for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), String> {
            if self.broken {
                return Err("no display".to_string());
            }
            self.content.replace(Some(text.to_string()));
            Ok(())
        }
    }

    fn board_designer() -> Designer<Board> {
        let context = DesignerContext::default();
        let board = Board::new(&context.workspace, &context.catalog);
        Designer::new(context, board, Box::new(FakeClipboard::default()), PathBuf::from("."))
    }

    fn run<D: DisplaySink>(designer: &mut Designer<D>, line: &str) -> Result<DesignerSuccess, DesignerError> {
        designer.execute(line.parse::<DesignerCommand>()?)
    }

    #[test]
    fn test_initial_output() {
        let designer = board_designer();
        assert!(designer.output().ends_with(EMPTY_WORKSPACE_COMMENT));
    }

    #[test]
    fn test_assign_updates_display_and_script() {
        let mut designer = Designer::new(
            DesignerContext::default(),
            RecordingSink::default(),
            Box::new(FakeClipboard::default()),
            PathBuf::from("."),
        );

        assert_eq!(run(&mut designer, "drop 1 top Notion"), Ok(DesignerSuccess::Updated));
        assert_eq!(designer.display().events.len(), 1);
        assert!(designer.output().contains("hs.application.launchOrFocus(\"Notion\")"));
    }

    #[test]
    fn test_unassign_last_app_restores_placeholder() {
        let mut designer = board_designer();
        run(&mut designer, "drop 2 bottom Cursor").unwrap();
        run(&mut designer, "remove 2 bottom").unwrap();

        assert!(designer.output().ends_with(EMPTY_WORKSPACE_COMMENT));
        assert!(!designer.output().contains("hs.hotkey.bind"));
        assert_eq!(designer.context().workspace.monitors_count(), 4);
    }

    #[test]
    fn test_select_checks_catalog() {
        let mut designer = board_designer();

        assert_eq!(
            run(&mut designer, "select 1 top Notepad"),
            Err(DesignerError::AppNotInCatalog("Notepad".to_string()))
        );
        assert_eq!(run(&mut designer, "select 1 top"), Ok(DesignerSuccess::NoChange));
        assert_eq!(run(&mut designer, "drop 1 top Notepad"), Ok(DesignerSuccess::Updated));
        assert!(designer.output().contains("launchOrFocus(\"Notepad\")"));
    }

    #[test]
    fn test_zone_without_widget() {
        let mut designer = board_designer();
        let res = run(&mut designer, "drop 3 left Safari");

        assert_eq!(
            res,
            Err(DesignerError::ZoneNotFound {
                monitor: 3,
                zone: "left".to_string()
            })
        );
        assert!(designer.output().contains("launchOrFocus(\"Safari\")"));
    }

    #[test]
    fn test_remove_zone_without_widget() {
        let mut designer = board_designer();
        run(&mut designer, "drop 1 top Notion").unwrap();
        run(&mut designer, "split 1 single").unwrap();

        assert_eq!(
            run(&mut designer, "remove 1 top"),
            Err(DesignerError::ZoneNotFound {
                monitor: 1,
                zone: "top".to_string()
            })
        );
        let layout = designer.context().workspace.get(MonitorId::try_from(1).unwrap());
        assert_eq!(layout.get(&ZoneId::from("top")), None);
        assert!(designer.output().ends_with(EMPTY_WORKSPACE_COMMENT));
    }

    #[test]
    fn test_invalid_monitor_keeps_state() {
        let mut designer = board_designer();
        let before = designer.context().clone();

        assert_eq!(run(&mut designer, "drop 9 top Safari"), Err(DesignerError::MonitorNotFound(9)));
        assert_eq!(designer.context(), &before);
    }

    #[test]
    fn test_split_rebuilds_board() {
        let mut designer = board_designer();
        run(&mut designer, "split 4 split-3").unwrap();

        assert_eq!(run(&mut designer, "select 4 center3 Claude"), Ok(DesignerSuccess::Updated));
        match run(&mut designer, "show") {
            Ok(DesignerSuccess::Message(board)) => assert!(board.contains("1/3          | Claude [x]")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_idempotent_assign() {
        let mut once = board_designer();
        let mut twice = board_designer();
        run(&mut once, "drop 1 top Notion").unwrap();
        run(&mut twice, "drop 1 top Notion").unwrap();
        run(&mut twice, "drop 1 top Notion").unwrap();

        assert_eq!(once.context(), twice.context());
        assert_eq!(once.output(), twice.output());
        assert_eq!(once.display(), twice.display());
    }

    #[test]
    fn test_copy() {
        let clipboard = FakeClipboard::default();
        let context = DesignerContext::default();
        let board = Board::new(&context.workspace, &context.catalog);
        let mut designer = Designer::new(context, board, Box::new(clipboard.clone()), PathBuf::from("."));
        run(&mut designer, "drop 1 top Notion").unwrap();

        assert_eq!(
            run(&mut designer, "copy"),
            Ok(DesignerSuccess::Message(COPY_CONFIRMATION.to_string()))
        );
        assert_eq!(clipboard.content.borrow().as_deref(), Some(designer.output()));
    }

    #[test]
    fn test_copy_failure() {
        let clipboard = FakeClipboard {
            broken: true,
            ..Default::default()
        };
        let mut designer = Designer::new(
            DesignerContext::default(),
            RecordingSink::default(),
            Box::new(clipboard),
            PathBuf::from("."),
        );

        assert_eq!(run(&mut designer, "copy"), Err(DesignerError::ClipboardUnavailable));
    }

    #[test]
    fn test_download() {
        let dir = tempfile::tempdir().unwrap();
        let mut designer = board_designer();
        run(&mut designer, "drop 1 top Notion").unwrap();
        let res = run(&mut designer, &format!("download {}", dir.path().display())).unwrap();

        let content = std::fs::read_to_string(dir.path().join(DOWNLOAD_FILE_NAME)).unwrap();
        assert_eq!(content, designer.output());
        assert!(matches!(res, DesignerSuccess::Message(m) if m.ends_with("(text/plain)")));
    }

    #[test]
    fn test_stubs_and_info() {
        let mut designer = board_designer();

        assert_eq!(
            run(&mut designer, "save-preset"),
            Err(DesignerError::NotImplemented("Preset saving"))
        );
        assert_eq!(
            run(&mut designer, "hotkey"),
            Ok(DesignerSuccess::Message(
                "⌘ + ⌥ + ⌃ + W\nDefault Workspace - Configure your apps".to_string()
            ))
        );
        assert_eq!(run(&mut designer, "quit"), Ok(DesignerSuccess::Quit));
    }
}
