use arboard::Clipboard;

pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// System clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(|e| e.to_string())?);
        }

        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard.set_text(text).map_err(|e| e.to_string()),
            None => Err("Clipboard not available".to_string()),
        }
    }
}
