use super::nodes::{Script, Statement};

const INDENT: &str = "  ";

/// Renders a script as Lua source, two spaces per nesting level.
///
/// Lines are joined with `\n` and there is no trailing newline. Strings are
/// written as they are, without escaping quotes.
pub fn to_lua(script: &Script) -> String {
    let mut writer = LuaWriter::default();
    writer.write_all(script.statements());
    writer.lines.join("\n")
}

#[derive(Default)]
struct LuaWriter {
    lines: Vec<String>,
    depth: usize,
}

impl LuaWriter {
    fn line<T: AsRef<str>>(&mut self, text: T) {
        self.lines.push(format!("{}{}", INDENT.repeat(self.depth), text.as_ref()));
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn block(&mut self, open: String, body: &[Statement], close: &str) {
        self.line(open);
        self.depth += 1;
        self.write_all(body);
        self.depth -= 1;
        self.line(close);
    }

    fn write_all(&mut self, statements: &[Statement]) {
        statements.iter().for_each(|s| self.write(s));
    }

    fn write(&mut self, statement: &Statement) {
        match statement {
            Statement::Comment(text) => self.line(format!("-- {text}")),
            Statement::Blank => self.blank(),
            Statement::HotkeyBind { modifiers, key, body } => {
                let mods = modifiers
                    .iter()
                    .map(|m| format!("\"{m}\""))
                    .collect::<Vec<String>>()
                    .join(",");
                self.block(format!("hs.hotkey.bind({{{mods}}}, \"{key}\", function()"), body, "end)");
            }
            Statement::KillAllExcept { keep } => {
                let keep = keep
                    .iter()
                    .map(|k| format!("[\"{k}\"]=true"))
                    .collect::<Vec<String>>()
                    .join(", ");
                self.line(format!("local toKeep = {{ {keep} }}"));
                self.line("for _, app in ipairs(hs.application.runningApplications()) do");
                self.depth += 1;
                self.line("local name = app:name()");
                self.line("if name and not toKeep[name] then app:kill() end");
                self.depth -= 1;
                self.line("end");
            }
            Statement::DoAfter { seconds, body } => {
                self.block(format!("hs.timer.doAfter({seconds}, function()"), body, "end)");
            }
            Statement::ScreenTable { entries } => {
                self.line("local screens = {");
                self.depth += 1;
                let last = entries.len().saturating_sub(1);
                for (i, e) in entries.iter().enumerate() {
                    let sep = if i < last { "," } else { "" };
                    self.line(format!("{} = hs.screen.find({}){}", e.name, e.display, sep));
                }
                self.depth -= 1;
                self.line("}");
            }
            Statement::LaunchOrFocus(app) => self.line(format!("hs.application.launchOrFocus(\"{app}\")")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::to_lua;
    use crate::modules::script::nodes::{ScreenEntry, Script, Statement};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nested_blocks() {
        let mut script = Script::new();
        script.push(Statement::do_after(
            2,
            vec![
                Statement::comment("inner"),
                Statement::Blank,
                Statement::LaunchOrFocus("Safari".to_string()),
            ],
        ));

        let expected = [
            "hs.timer.doAfter(2, function()",
            "  -- inner",
            "",
            "  hs.application.launchOrFocus(\"Safari\")",
            "end)",
        ]
        .join("\n");
        assert_eq!(to_lua(&script), expected);
    }

    #[test]
    fn test_hotkey_and_keep_list() {
        let mut script = Script::new();
        script.push(Statement::HotkeyBind {
            modifiers: vec!["cmd".to_string(), "shift".to_string()],
            key: "K".to_string(),
            body: vec![Statement::KillAllExcept {
                keep: vec!["Finder".to_string()],
            }],
        });

        let expected = [
            "hs.hotkey.bind({\"cmd\",\"shift\"}, \"K\", function()",
            "  local toKeep = { [\"Finder\"]=true }",
            "  for _, app in ipairs(hs.application.runningApplications()) do",
            "    local name = app:name()",
            "    if name and not toKeep[name] then app:kill() end",
            "  end",
            "end)",
        ]
        .join("\n");
        assert_eq!(to_lua(&script), expected);
    }

    #[test]
    fn test_screen_table_separators() {
        let mut script = Script::new();
        script.push(Statement::ScreenTable {
            entries: vec![
                ScreenEntry {
                    name: "one".to_string(),
                    display: 5,
                },
                ScreenEntry {
                    name: "two".to_string(),
                    display: 2,
                },
            ],
        });

        let expected = [
            "local screens = {",
            "  one = hs.screen.find(5),",
            "  two = hs.screen.find(2)",
            "}",
        ]
        .join("\n");
        assert_eq!(to_lua(&script), expected);
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let mut script = Script::new();
        script.push(Statement::LaunchOrFocus("My \"App\"".to_string()));
        assert_eq!(to_lua(&script), "hs.application.launchOrFocus(\"My \"App\"\")");
    }
}
