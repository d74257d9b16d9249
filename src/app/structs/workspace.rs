use super::monitor_id::MonitorId;
use super::monitor_id::MONITORS_COUNT;
use super::monitor_layout::MonitorLayout;
use super::split_mode::SplitMode;

const DEFAULT_SPLITS: [SplitMode; MONITORS_COUNT] =
    [SplitMode::Split2, SplitMode::Split2, SplitMode::Single, SplitMode::Single];

/// The four monitors and their layouts. Monitors are never added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    monitors: [MonitorLayout; MONITORS_COUNT],
}

impl Workspace {
    pub fn new(splits: [SplitMode; MONITORS_COUNT]) -> Workspace {
        Workspace {
            monitors: splits.map(MonitorLayout::new),
        }
    }

    pub fn get(&self, monitor: MonitorId) -> &MonitorLayout {
        &self.monitors[monitor.index()]
    }

    pub fn get_mut(&mut self, monitor: MonitorId) -> &mut MonitorLayout {
        &mut self.monitors[monitor.index()]
    }

    pub fn monitors(&self) -> impl Iterator<Item = (MonitorId, &MonitorLayout)> {
        MonitorId::all().zip(self.monitors.iter())
    }

    #[cfg(test)]
    pub fn monitors_count(&self) -> usize {
        self.monitors.len()
    }

    pub fn has_apps(&self) -> bool {
        self.monitors.iter().any(|m| m.has_apps())
    }

    /// Distinct app names, in order of first occurrence (monitor 1..4, then zone order).
    pub fn distinct_apps(&self) -> Vec<&str> {
        let mut apps: Vec<&str> = vec![];
        for app in self.monitors.iter().flat_map(|m| m.apps()) {
            if !apps.contains(&app) {
                apps.push(app);
            }
        }
        apps
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Workspace::new(DEFAULT_SPLITS)
    }
}

#[cfg(test)]
mod tests {
    use super::Workspace;
    use crate::app::structs::monitor_id::MonitorId;
    use crate::app::structs::split_mode::SplitMode;
    use crate::app::structs::zone_id::ZoneId;

    fn monitor(id: u8) -> MonitorId {
        MonitorId::try_from(id).unwrap()
    }

    #[test]
    fn test_default() {
        let ws = Workspace::default();
        let splits: Vec<SplitMode> = ws.monitors().map(|(_, m)| m.split()).collect();

        assert_eq!(ws.monitors_count(), 4);
        assert_eq!(
            splits,
            vec![SplitMode::Split2, SplitMode::Split2, SplitMode::Single, SplitMode::Single]
        );
        assert!(!ws.has_apps());
    }

    #[test]
    fn test_distinct_apps_order() {
        let mut ws = Workspace::default();
        ws.get_mut(monitor(2)).set(&ZoneId::from("top"), Some("Safari".to_string()));
        ws.get_mut(monitor(1)).set(&ZoneId::from("bottom"), Some("Notion".to_string()));
        ws.get_mut(monitor(1)).set(&ZoneId::from("top"), Some("Cursor".to_string()));
        ws.get_mut(monitor(4)).set(&ZoneId::from("full"), Some("Notion".to_string()));

        assert_eq!(ws.distinct_apps(), vec!["Cursor", "Notion", "Safari"]);
    }

    #[test]
    fn test_distinct_apps_skips_empty() {
        let mut ws = Workspace::default();
        ws.get_mut(monitor(3)).set(&ZoneId::from("full"), Some(String::new()));

        assert!(ws.distinct_apps().is_empty());
        assert!(!ws.has_apps());
    }
}
