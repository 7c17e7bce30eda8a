use std::fmt;

/// The three views of every topic page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Practice,
    Info,
    Code,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Practice, Tab::Info, Tab::Code];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Practice => "practice",
            Tab::Info => "info",
            Tab::Code => "code",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Tab::Practice => "Practice",
            Tab::Info => "Info",
            Tab::Code => "Code",
        }
    }

    /// Parses a tab name; anything unrecognised is `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Tab::ALL.into_iter().find(|tab| tab.as_str() == name)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content blocks for a topic page, one per tab.
///
/// The practice block doubles as the fallback for unknown tab names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabContent<T> {
    pub practice: T,
    pub info: T,
    pub code: T,
}

impl<T> TabContent<T> {
    #[must_use]
    pub fn new(practice: T, info: T, code: T) -> Self {
        Self {
            practice,
            info,
            code,
        }
    }

    #[must_use]
    pub fn select(&self, tab: Tab) -> &T {
        match tab {
            Tab::Practice => &self.practice,
            Tab::Info => &self.info,
            Tab::Code => &self.code,
        }
    }

    #[must_use]
    pub fn render_tab(&self, name: &str) -> &T {
        self.select(Tab::from_name(name).unwrap_or_default())
    }

    pub fn map<U>(self, mut f: impl FnMut(Tab, T) -> U) -> TabContent<U> {
        TabContent {
            practice: f(Tab::Practice, self.practice),
            info: f(Tab::Info, self.info),
            code: f(Tab::Code, self.code),
        }
    }
}
