#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKey {
    Cmd,
    Alt,
    Ctrl,
    Shift,
}

impl ModifierKey {
    pub fn parse(modifier: &str) -> Option<ModifierKey> {
        match modifier.trim().to_uppercase().as_str() {
            "CMD" => Some(ModifierKey::Cmd),
            "ALT" => Some(ModifierKey::Alt),
            "CTRL" => Some(ModifierKey::Ctrl),
            "SHIFT" => Some(ModifierKey::Shift),
            _ => None,
        }
    }

    /// Name of the modifier in `hs.hotkey.bind`.
    pub fn lua_name(&self) -> &'static str {
        match self {
            ModifierKey::Cmd => "cmd",
            ModifierKey::Alt => "alt",
            ModifierKey::Ctrl => "ctrl",
            ModifierKey::Shift => "shift",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ModifierKey::Cmd => "⌘",
            ModifierKey::Alt => "⌥",
            ModifierKey::Ctrl => "⌃",
            ModifierKey::Shift => "⇧",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hotkey {
    modifiers: Vec<ModifierKey>,
    trigger: char,
    display: String,
}

impl Hotkey {
    /// Repeated modifiers are dropped, keeping the first occurrence.
    pub fn new(modifiers: Vec<ModifierKey>, trigger: char) -> Hotkey {
        let mut unique: Vec<ModifierKey> = Vec::with_capacity(modifiers.len());
        for m in modifiers {
            if !unique.contains(&m) {
                unique.push(m);
            }
        }

        let display = unique
            .iter()
            .map(|m| m.symbol().to_string())
            .chain(std::iter::once(trigger.to_string()))
            .collect::<Vec<String>>()
            .join(" + ");

        Hotkey {
            modifiers: unique,
            trigger,
            display,
        }
    }

    pub fn modifiers(&self) -> &[ModifierKey] {
        &self.modifiers
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

impl Default for Hotkey {
    fn default() -> Self {
        Hotkey::new(vec![ModifierKey::Cmd, ModifierKey::Alt, ModifierKey::Ctrl], 'W')
    }
}
