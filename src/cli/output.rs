//! Output formatting utilities

use crate::application::{ExpandReport, TagDefinition};

/// Format the configured tag definitions for display
pub fn format_tag_list(tags: &[TagDefinition]) -> String {
    if tags.is_empty() {
        return "No tags defined".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{{{}}}  {}\n", tag.name, tag.base_uri));
    }

    output
}

/// Format per-file expansion reports plus a total
pub fn format_expand_summary(reports: &[ExpandReport]) -> String {
    let mut output = String::new();
    let mut total = 0;

    for report in reports {
        if report.expanded > 0 {
            output.push_str(&format!(
                "{}: {} expanded\n",
                report.path.display(),
                report.expanded
            ));
            total += report.expanded;
        }
    }

    if total == 0 {
        return "Nothing to expand\n".to_string();
    }

    output.push_str(&format!(
        "Expanded {} occurrence{} in {} file{}\n",
        total,
        if total == 1 { "" } else { "s" },
        reports.iter().filter(|r| r.expanded > 0).count(),
        if reports.iter().filter(|r| r.expanded > 0).count() == 1 {
            ""
        } else {
            "s"
        }
    ));

    output
}
