use competitor_intel_core::application::pages::{
    automations::AutomationsView, competitors::CompetitorsView, library::LibraryView,
    reports::ReportsView,
};
use competitor_intel_core::domain::table_load::TableLoad;
use std::fmt::Write;

use super::{escape, placeholder_table, table};

/// Add-competitor form inputs: field name and label.
pub const COMPETITOR_FORM_FIELDS: [(&str, &str); 10] = [
    ("name", "Name"),
    ("website", "Website"),
    ("ir_url", "IR URL"),
    ("news_rss", "News RSS (optional)"),
    ("linkedin_url", "LinkedIn (optional)"),
    ("tickers", "Tickers (comma-separated)"),
    ("currency", "Currency (e.g., EUR)"),
    ("fiscal_calendar_notes", "Fiscal calendar notes"),
    ("drive_folder_id", "Drive folder ID (optional now)"),
    ("tags", "Tags (comma-separated)"),
];

pub fn competitors(view: &CompetitorsView, saved: bool) -> String {
    let mut html = String::from("<h2>Competitors</h2>");
    if saved {
        html.push_str("<div class=\"success\">Saved!</div>");
    }

    html.push_str("<h3>Database</h3>");
    if view.rows.is_empty() {
        html.push_str(&placeholder_table("No rows yet"));
    } else {
        html.push_str(&table(&view.rows));
    }

    html.push_str("<h3>Add / Edit</h3><form method=\"post\" action=\"/competitors\">");
    for (name, label) in COMPETITOR_FORM_FIELDS {
        let _ = write!(
            html,
            "<label for=\"{name}\">{label}</label><input type=\"text\" id=\"{name}\" name=\"{name}\">"
        );
    }
    html.push_str("<p><button type=\"submit\">Save</button></p></form>");
    html
}

pub fn library(view: &LibraryView) -> String {
    let mut html = String::from("<h2>Library (Google Drive)</h2>");
    match view {
        LibraryView::Unconfigured => html.push_str(
            "<div class=\"info\">Set google.drive_top_folder_id in the configuration \
             and share that folder with your Service Account.</div>",
        ),
        LibraryView::Empty => html.push_str(
            "<p>No items yet. Create a subfolder per competitor and drop files there.</p>",
        ),
        LibraryView::Entries(entries) => {
            html.push_str("<ul>");
            for entry in entries {
                let name = match &entry.web_view_link {
                    Some(link) => format!("<a href=\"{}\">{}</a>", escape(link), escape(&entry.name)),
                    None => escape(&entry.name),
                };
                let _ = write!(html, "<li>{} — {}</li>", name, escape(&entry.mime_type));
            }
            html.push_str("</ul>");
        }
    }
    html
}

pub fn automations(view: &AutomationsView) -> String {
    let mut html = format!(
        "<h2>{}</h2><p>{}</p><ul>",
        escape(view.heading),
        escape(view.intro)
    );
    for item in view.planned {
        let _ = write!(html, "<li>{}</li>", escape(item));
    }
    let _ = write!(html, "</ul><div class=\"info\">{}</div>", escape(view.note));
    html
}

fn table_load(title: &str, load: &TableLoad) -> String {
    let body = match load {
        TableLoad::Loaded(rows) => table(rows),
        TableLoad::Empty => placeholder_table("No data yet"),
        TableLoad::Failed(reason) => format!(
            "<div class=\"error\">Could not load this table: {}</div>",
            escape(reason)
        ),
    };
    format!("<h3>{}</h3>{}", escape(title), body)
}

pub fn reports(view: &ReportsView) -> String {
    let mut html = String::from("<h2>Reports</h2>");
    html.push_str(&table_load("Financial metrics", &view.financial_metrics));
    html.push_str(&table_load("News", &view.news));
    html
}

pub fn error(page: &str, details: &str) -> String {
    format!(
        "<h2>{}</h2><div class=\"error\"><p>Something went wrong.</p><pre>{}</pre></div>",
        escape(page),
        escape(details)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use competitor_intel_core::application::pages::automations::AUTOMATIONS;
    use competitor_intel_core::domain::{file_entry::FileEntry, record::Record};

    #[test]
    fn test_competitors_empty() {
        let html = competitors(&CompetitorsView { rows: vec![] }, false);
        assert!(html.contains("<td>No rows yet</td>"));
        assert!(!html.contains("Saved!"));
    }

    #[test]
    fn test_competitors_form_has_ten_fields() {
        let html = competitors(&CompetitorsView { rows: vec![] }, true);
        assert_eq!(html.matches("<input type=\"text\"").count(), 10);
        assert!(html.contains("name=\"fiscal_calendar_notes\""));
        assert!(html.contains("Saved!"));
    }

    #[test]
    fn test_competitors_rows() {
        let view = CompetitorsView {
            rows: vec![Record::new().with("id", "acme").with("name", "Acme")],
        };
        let html = competitors(&view, false);
        assert!(html.contains("<tr><td>acme</td><td>Acme</td></tr>"));
    }

    #[test]
    fn test_library_views() {
        assert!(library(&LibraryView::Unconfigured).contains("google.drive_top_folder_id"));
        assert!(library(&LibraryView::Empty).contains("No items yet."));

        let html = library(&LibraryView::Entries(vec![
            FileEntry {
                id: "1".to_string(),
                name: "Acme".to_string(),
                mime_type: "application/vnd.google-apps.folder".to_string(),
                web_view_link: Some("https://drive.google.com/drive/folders/1".to_string()),
            },
            FileEntry {
                id: "2".to_string(),
                name: "notes.txt".to_string(),
                mime_type: "text/plain".to_string(),
                web_view_link: None,
            },
        ]));
        assert!(html.contains(
            "<li><a href=\"https://drive.google.com/drive/folders/1\">Acme</a> — application/vnd.google-apps.folder</li>"
        ));
        assert!(html.contains("<li>notes.txt — text/plain</li>"));
    }

    #[test]
    fn test_automations_placeholder() {
        let html = automations(&AUTOMATIONS);
        assert!(html.contains("Automations (coming in Phase 2)"));
        assert!(html.contains("<li>Biweekly News</li>"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_reports_failure_is_distinct_from_empty() {
        let html = reports(&ReportsView {
            financial_metrics: TableLoad::Failed("Failed to read table financial_metrics".to_string()),
            news: TableLoad::Loaded(vec![Record::new().with("headline", "Acme IPO")]),
        });
        assert!(html.contains("Could not load this table: Failed to read table financial_metrics"));
        assert!(html.contains("<td>Acme IPO</td>"));
        assert!(!html.contains("No data yet"));

        let html = reports(&ReportsView {
            financial_metrics: TableLoad::Empty,
            news: TableLoad::Empty,
        });
        assert_eq!(html.matches("No data yet").count(), 2);
    }
}
