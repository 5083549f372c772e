/// Placeholder content for automations that are not built yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutomationsView {
    pub heading: &'static str,
    pub intro: &'static str,
    pub planned: &'static [&'static str],
    pub note: &'static str,
}

pub const AUTOMATIONS: AutomationsView = AutomationsView {
    heading: "Automations (coming in Phase 2)",
    intro: "Here you'll later have buttons to trigger:",
    planned: &[
        "Financials: Discover→Download",
        "Financials: Parse→Summarize",
        "Biweekly News",
        "Deck Builder",
    ],
    note: "We'll add an OpenAI Agent + a simple scheduler in Phase 2.",
};

pub fn load() -> &'static AutomationsView {
    &AUTOMATIONS
}
