pub const DEFAULT_APPS: [&str; 18] = [
    "Microsoft Outlook",
    "Microsoft Teams",
    "Notion",
    "Red Sands",
    "ChatGPT",
    "Claude",
    "Perplexity- Ask Anything",
    "Cursor",
    "GitHub Desktop",
    "Messages",
    "Microsoft Excel",
    "Microsoft Word",
    "Microsoft PowerPoint",
    "Hammerspoon",
    "Google Chrome",
    "Microsoft Edge",
    "Safari",
    "Perplexity Comet",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    apps: Vec<String>,
}

impl Catalog {
    pub fn new<T: Into<String>, I: IntoIterator<Item = T>>(apps: I) -> Catalog {
        Catalog {
            apps: apps.into_iter().map(|a| a.into()).collect(),
        }
    }

    pub fn contains(&self, app: &str) -> bool {
        self.apps.iter().any(|a| a == app)
    }

    pub fn apps(&self) -> &[String] {
        &self.apps
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.apps.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new(DEFAULT_APPS)
    }
}
