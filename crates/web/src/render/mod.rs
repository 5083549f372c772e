pub mod pages;

use competitor_intel_core::application::context::AppContext;
use competitor_intel_core::application::spreadsheet_gateway::derive_header;
use competitor_intel_core::domain::record::Record;
use std::fmt::Write;
use strum::IntoEnumIterator;

use crate::navigation::Page;

const STYLE: &str = "\
body{margin:0;display:flex;font-family:sans-serif;color:#262730}\
.sidebar{width:16rem;min-height:100vh;padding:1.5rem;background:#f0f2f6}\
.sidebar a{display:block;padding:.2rem 0;color:inherit;text-decoration:none}\
.sidebar a.active{font-weight:bold}\
.caption{color:#808495;font-size:.85rem}\
main{flex:1;padding:1.5rem 3rem}\
table{border-collapse:collapse}\
th,td{border:1px solid #e6e9ef;padding:.25rem .5rem;text-align:left}\
.info{background:#e8f0fe;padding:.75rem;border-radius:.25rem}\
.success{background:#e6f4ea;padding:.75rem;border-radius:.25rem}\
.error{background:#fdecea;padding:.75rem;border-radius:.25rem}\
label{display:block;margin-top:.5rem}\
input[type=text]{width:28rem}";

/// Escapes text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// What the side panel shows on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sidebar {
    pub local_time: String,
    pub timezone: String,
    pub sheet_id: String,
    pub drive_folder_id: String,
}

impl Sidebar {
    pub fn from_context(ctx: &AppContext) -> Self {
        Sidebar {
            local_time: ctx.local_time(),
            timezone: ctx.timezone.name().to_string(),
            sheet_id: ctx.sheet_id.clone(),
            drive_folder_id: ctx.drive_top_folder_id.clone(),
        }
    }
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "unset"
    } else {
        value
    }
}

pub fn layout(active: Page, sidebar: &Sidebar, body: &str) -> String {
    let mut nav = String::new();
    for page in Page::iter() {
        let class = if page == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{}>{}</a>", page.path(), class, page);
    }

    format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>{active} · Competitor Intelligence</title><style>{STYLE}</style></head>\
<body><aside class=\"sidebar\"><h1>Competitor Intelligence</h1>\
<p class=\"caption\">Local time: {time}</p><p>Timezone: {tz}</p>\
<nav><p>Navigate</p>{nav}</nav><hr>\
<p>Google Sheet ID: {sheet}</p><p>Drive folder: {folder}</p></aside>\
<main>{body}</main></body></html>",
        time = escape(&sidebar.local_time),
        tz = escape(&sidebar.timezone),
        sheet = escape(or_unset(&sidebar.sheet_id)),
        folder = escape(or_unset(&sidebar.drive_folder_id)),
    )
}

/// Renders records as a table whose columns are the union of their keys.
pub fn table(rows: &[Record]) -> String {
    let header = derive_header(None, rows);
    let mut html = String::from("<table><thead><tr>");
    for column in &header {
        let _ = write!(html, "<th>{}</th>", escape(column));
    }
    html.push_str("</tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for column in &header {
            let _ = write!(html, "<td>{}</td>", escape(row.value_or_blank(column)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

/// Single-cell table standing in for an empty one.
pub fn placeholder_table(message: &str) -> String {
    table(&[Record::new().with("info", message)])
}
