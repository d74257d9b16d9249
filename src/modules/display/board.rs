use super::sink::{DisplayError, DisplayEvent, DisplaySink};
use crate::app::catalog::Catalog;
use crate::app::structs::monitor_id::MonitorId;
use crate::app::structs::split_mode::SplitMode;
use crate::app::structs::workspace::Workspace;
use crate::app::structs::zone_id::ZoneId;
use crate::modules::script::generator::display_index;

pub const DROP_HINT: &str = "Drop app here or click to select";
pub const SELECTOR_PROMPT: &str = "Choose an app...";

#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
    pub options: Vec<String>,
    pub selected: Option<String>,
}

impl Selector {
    fn from_catalog(catalog: &Catalog, selected: Option<&str>) -> Selector {
        Selector {
            options: catalog.apps().to_vec(),
            selected: selected.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ZoneWidgetState {
    Empty { label: String, selector: Selector },
    Occupied { app: String, selector: Selector },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneWidget {
    pub zone: ZoneId,
    pub state: ZoneWidgetState,
}

impl ZoneWidget {
    fn new(zone: ZoneId, app: Option<&str>, catalog: &Catalog) -> ZoneWidget {
        let state = ZoneWidget::state_for(&zone, app, catalog);
        ZoneWidget { zone, state }
    }

    fn show(&mut self, app: Option<&str>, catalog: &Catalog) {
        self.state = ZoneWidget::state_for(&self.zone, app, catalog);
    }

    /// Empty names leave the zone empty.
    fn state_for(zone: &ZoneId, app: Option<&str>, catalog: &Catalog) -> ZoneWidgetState {
        match app.filter(|a| !a.is_empty()) {
            Some(app) => ZoneWidgetState::Occupied {
                app: app.to_string(),
                selector: Selector::from_catalog(catalog, Some(app)),
            },
            None => ZoneWidgetState::Empty {
                label: zone.label().to_string(),
                selector: Selector::from_catalog(catalog, None),
            },
        }
    }

    #[cfg(test)]
    pub fn is_occupied(&self) -> bool {
        matches!(self.state, ZoneWidgetState::Occupied { .. })
    }

    fn render(&self) -> String {
        match &self.state {
            ZoneWidgetState::Occupied { app, .. } => format!("{:<12} | {app} [x]", self.zone.label()),
            ZoneWidgetState::Empty { label, selector } => format!(
                "{:<12} | {DROP_HINT} ({SELECTOR_PROMPT} {} options)",
                label,
                selector.options.len()
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct MonitorWidgets {
    id: MonitorId,
    split: SplitMode,
    zones: Vec<ZoneWidget>,
}

/// Terminal rendering of the workspace: one widget per zone of each monitor's split mode.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    monitors: Vec<MonitorWidgets>,
}

impl Board {
    pub fn new(workspace: &Workspace, catalog: &Catalog) -> Board {
        let monitors = workspace
            .monitors()
            .map(|(id, layout)| MonitorWidgets {
                id,
                split: layout.split(),
                zones: layout
                    .active_zones()
                    .into_iter()
                    .map(|(zone, app)| ZoneWidget::new(zone, app.as_deref(), catalog))
                    .collect(),
            })
            .collect();
        Board { monitors }
    }

    #[cfg(test)]
    pub fn widget(&self, monitor: MonitorId, zone: &ZoneId) -> Option<&ZoneWidget> {
        self.monitors
            .iter()
            .find(|m| m.id == monitor)
            .and_then(|m| m.zones.iter().find(|w| w.zone == *zone))
    }

    fn widget_mut(&mut self, monitor: MonitorId, zone: &ZoneId) -> Option<&mut ZoneWidget> {
        self.monitors
            .iter_mut()
            .find(|m| m.id == monitor)
            .and_then(|m| m.zones.iter_mut().find(|w| w.zone == *zone))
    }
}

impl DisplaySink for Board {
    fn handle(&mut self, event: &DisplayEvent, catalog: &Catalog) -> Result<(), DisplayError> {
        match event {
            DisplayEvent::ZoneChanged { monitor, zone, app } => {
                let widget = self.widget_mut(*monitor, zone).ok_or(DisplayError::ZoneNotFound {
                    monitor: *monitor,
                    zone: zone.clone(),
                })?;
                widget.show(app.as_deref(), catalog);
            }
            DisplayEvent::LayoutChanged { monitor, split, zones } => {
                if let Some(m) = self.monitors.iter_mut().find(|m| m.id == *monitor) {
                    m.split = *split;
                    m.zones = zones
                        .iter()
                        .map(|(zone, app)| ZoneWidget::new(zone.clone(), app.as_deref(), catalog))
                        .collect();
                }
            }
        }
        Ok(())
    }

    fn render(&self) -> String {
        let mut lines = vec![];
        for m in &self.monitors {
            lines.push(format!(
                "Monitor {} [{}] -> hs.screen.find({})",
                m.id,
                m.split,
                display_index(m.id)
            ));
            lines.extend(m.zones.iter().map(|w| format!("  {}", w.render())));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, ZoneWidgetState};
    use crate::app::catalog::Catalog;
    use crate::app::structs::monitor_id::MonitorId;
    use crate::app::structs::split_mode::SplitMode;
    use crate::app::structs::workspace::Workspace;
    use crate::app::structs::zone_id::ZoneId;
    use crate::modules::display::sink::{DisplayError, DisplayEvent, DisplaySink};

    fn monitor(id: u8) -> MonitorId {
        MonitorId::try_from(id).unwrap()
    }

    #[test]
    fn test_initial_widgets() {
        let board = Board::new(&Workspace::default(), &Catalog::default());

        let top = board.widget(monitor(1), &ZoneId::from("top")).unwrap();
        assert!(!top.is_occupied());
        assert!(board.widget(monitor(3), &ZoneId::from("full")).is_some());
        assert!(board.widget(monitor(3), &ZoneId::from("top")).is_none());
    }

    #[test]
    fn test_occupy_and_clear() {
        let catalog = Catalog::default();
        let mut board = Board::new(&Workspace::default(), &catalog);
        let assign = DisplayEvent::zone_changed(monitor(2), ZoneId::from("bottom"), Some("Notion".to_string()));
        let clear = DisplayEvent::zone_changed(monitor(2), ZoneId::from("bottom"), None);

        board.handle(&assign, &catalog).unwrap();
        let widget = board.widget(monitor(2), &ZoneId::from("bottom")).unwrap();
        match &widget.state {
            ZoneWidgetState::Occupied { app, selector } => {
                assert_eq!(app, "Notion");
                assert_eq!(selector.selected.as_deref(), Some("Notion"));
            }
            _ => panic!("zone should be occupied"),
        }

        board.handle(&clear, &catalog).unwrap();
        let widget = board.widget(monitor(2), &ZoneId::from("bottom")).unwrap();
        match &widget.state {
            ZoneWidgetState::Empty { label, selector } => {
                assert_eq!(label, "Bottom Half");
                assert_eq!(selector.options.len(), catalog.len());
                assert_eq!(selector.selected, None);
            }
            _ => panic!("zone should be empty"),
        }
    }

    #[test]
    fn test_missing_widget() {
        let catalog = Catalog::default();
        let mut board = Board::new(&Workspace::default(), &catalog);
        let event = DisplayEvent::zone_changed(monitor(4), ZoneId::from("left"), Some("Safari".to_string()));

        assert_eq!(
            board.handle(&event, &catalog),
            Err(DisplayError::ZoneNotFound {
                monitor: monitor(4),
                zone: ZoneId::from("left")
            })
        );
    }

    #[test]
    fn test_layout_changed() {
        let catalog = Catalog::default();
        let mut board = Board::new(&Workspace::default(), &catalog);
        let event = DisplayEvent::LayoutChanged {
            monitor: monitor(3),
            split: SplitMode::Split3,
            zones: vec![
                (ZoneId::from("left3"), None),
                (ZoneId::from("center3"), Some("Cursor".to_string())),
                (ZoneId::from("right3"), None),
            ],
        };

        board.handle(&event, &catalog).unwrap();
        assert!(board.widget(monitor(3), &ZoneId::from("full")).is_none());
        assert!(board.widget(monitor(3), &ZoneId::from("center3")).unwrap().is_occupied());
        assert!(board.render().contains("Monitor 3 [split-3] -> hs.screen.find(3)"));
    }

    #[test]
    fn test_render() {
        let catalog = Catalog::default();
        let mut board = Board::new(&Workspace::default(), &catalog);
        let event = DisplayEvent::zone_changed(monitor(1), ZoneId::from("top"), Some("Claude".to_string()));
        board.handle(&event, &catalog).unwrap();

        let rendered = board.render();
        assert!(rendered.starts_with("Monitor 1 [split-2] -> hs.screen.find(5)"));
        assert!(rendered.contains("Top Half     | Claude [x]"));
        assert!(rendered.contains("Bottom Half  | Drop app here or click to select (Choose an app... 18 options)"));
    }
}
