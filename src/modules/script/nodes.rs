#[derive(Debug, Clone, PartialEq)]
pub struct ScreenEntry {
    pub name: String,
    pub display: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Comment(String),
    Blank,
    HotkeyBind {
        modifiers: Vec<String>,
        key: String,
        body: Vec<Statement>,
    },
    KillAllExcept {
        keep: Vec<String>,
    },
    DoAfter {
        seconds: u32,
        body: Vec<Statement>,
    },
    ScreenTable {
        entries: Vec<ScreenEntry>,
    },
    LaunchOrFocus(String),
}

impl Statement {
    pub fn comment<T: Into<String>>(text: T) -> Statement {
        Statement::Comment(text.into())
    }

    pub fn do_after(seconds: u32, body: Vec<Statement>) -> Statement {
        Statement::DoAfter { seconds, body }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    statements: Vec<Statement>,
}

impl Script {
    pub fn new() -> Script {
        Script::default()
    }

    pub fn push(&mut self, statement: Statement) -> &mut Script {
        self.statements.push(statement);
        self
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }
}
