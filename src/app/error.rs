use crate::modules::display::sink::DisplayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DesignerError {
    #[error("Monitor {0} not found")]
    MonitorNotFound(u8),
    #[error("Zone '{zone}' not found on monitor {monitor}")]
    ZoneNotFound { monitor: u8, zone: String },
    #[error("{0}")]
    InvalidCommand(String),
    #[error("'{0}' is not in the app catalog")]
    AppNotInCatalog(String),
    #[error("Failed to copy script to clipboard")]
    ClipboardUnavailable,
    #[error("I/O error: {0}")]
    Io(String),
    #[error("{0} will be implemented shortly")]
    NotImplemented(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DesignerSuccess {
    Updated,
    NoChange,
    Message(String),
    Quit,
}

impl<T> From<DesignerError> for Result<T, DesignerError> {
    fn from(value: DesignerError) -> Self {
        Err(value)
    }
}

impl From<DisplayError> for DesignerError {
    fn from(value: DisplayError) -> Self {
        match value {
            DisplayError::ZoneNotFound { monitor, zone } => DesignerError::ZoneNotFound {
                monitor: monitor.get(),
                zone: zone.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for DesignerError {
    fn from(value: std::io::Error) -> Self {
        DesignerError::Io(value.to_string())
    }
}

impl DesignerError {
    pub fn get_log_level(&self) -> log::Level {
        match self {
            Self::ZoneNotFound { .. } | Self::ClipboardUnavailable | Self::Io(_) => log::Level::Error,
            Self::MonitorNotFound(_) | Self::AppNotInCatalog(_) => log::Level::Warn,
            _ => log::Level::Debug,
        }
    }

    pub fn get_info(&self) -> String {
        format!("{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::DesignerError;

    #[test]
    fn test_log_levels() {
        let zone = DesignerError::ZoneNotFound {
            monitor: 1,
            zone: "left".to_string(),
        };
        assert_eq!(zone.get_log_level(), log::Level::Error);
        assert_eq!(DesignerError::MonitorNotFound(7).get_log_level(), log::Level::Warn);
        assert_eq!(
            DesignerError::NotImplemented("Preset saving").get_log_level(),
            log::Level::Debug
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DesignerError::NotImplemented("Preset saving").to_string(),
            "Preset saving will be implemented shortly"
        );
        assert_eq!(
            DesignerError::ClipboardUnavailable.to_string(),
            "Failed to copy script to clipboard"
        );
    }
}
