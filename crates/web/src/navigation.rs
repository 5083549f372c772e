use strum::{Display, EnumIter};

/// Destinations in the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Page {
    Competitors,
    Library,
    Automations,
    Reports,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Competitors => "/competitors",
            Page::Library => "/library",
            Page::Automations => "/automations",
            Page::Reports => "/reports",
        }
    }
}
