//! CLI presentation: text and JSON formatters for command results.

use crate::context::{TreeStats, Visit};
use crate::error::ApiError;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

fn section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

pub fn format_validate_result_text(stats: &TreeStats, roots: usize) -> String {
    let mut s = format!(
        "{}\n  Root contexts: {}\n  Contexts: {}\n  Leaves: {}\n  Max depth: {}",
        section_heading("Validation passed"),
        roots,
        stats.nodes,
        stats.leaves,
        stats.max_depth
    );

    if !stats.kinds.is_empty() {
        let kinds: Vec<String> = stats
            .kinds
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect();
        s.push_str(&format!("\n  Kinds: {}", kinds.join(", ")));
    }

    if stats.unknown_types > 0 || stats.unknown_topics > 0 {
        s.push_str(&format!("\n\n{}", section_heading("Notes")));
        if stats.unknown_types > 0 {
            s.push_str(&format!(
                "\n  - {} context(s) use an unrecognized typeInt and resolve to kind none",
                stats.unknown_types
            ));
        }
        if stats.unknown_topics > 0 {
            s.push_str(&format!(
                "\n  - {} context(s) use an unrecognized topicString and resolve to no topic",
                stats.unknown_topics
            ));
        }
    }
    s
}

/// One row of `inspect` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectRow {
    pub depth: usize,
    pub path: String,
    pub identifier: String,
    pub title: String,
    pub display_order: i64,
    pub kind: String,
    pub type_int: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub universal_link: Option<String>,
}

impl From<&Visit<'_>> for InspectRow {
    fn from(visit: &Visit<'_>) -> Self {
        let node = visit.node;
        Self {
            depth: visit.depth,
            path: visit.path_string(),
            identifier: node.identifier().to_string(),
            title: node.title().to_string(),
            display_order: node.display_order(),
            kind: node.kind().to_string(),
            type_int: node.raw_type(),
            topic: node.topic().map(|topic| topic.to_string()),
            universal_link: node.universal_link().map(str::to_owned),
        }
    }
}

pub fn format_inspect_text(visits: &[Visit<'_>]) -> String {
    if visits.is_empty() {
        return "No contexts.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Title", "Order", "Kind", "Topic", "Universal link"]);
    for visit in visits {
        let row = InspectRow::from(visit);
        let indented_path = format!("{}{}", "  ".repeat(row.depth), row.identifier);
        table.add_row(vec![
            indented_path,
            row.title,
            row.display_order.to_string(),
            row.kind,
            row.topic.unwrap_or_else(|| "-".to_string()),
            row.universal_link.unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table.to_string()
}

pub fn format_inspect_json(visits: &[Visit<'_>], pretty: bool) -> Result<String, ApiError> {
    let rows: Vec<InspectRow> = visits.iter().map(InspectRow::from).collect();
    let rendered = if pretty {
        serde_json::to_string_pretty(&rows)
    } else {
        serde_json::to_string(&rows)
    };
    rendered.map_err(|e| ApiError::Encode(e.to_string()))
}
