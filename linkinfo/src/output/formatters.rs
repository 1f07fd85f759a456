//! Output formatter implementations.

use crate::Result;

use super::{LinkReport, OutputFormatter};

/// Formatter for human-readable output.
///
/// Each link is printed as its canonical path followed by indented views
/// and the list of classifications that hold.
pub struct HumanFormatter;

impl HumanFormatter {
    fn flags(report: &LinkReport) -> Vec<&'static str> {
        [
            (report.is_empty, "empty"),
            (report.is_relative, "relative"),
            (report.is_absolute, "absolute"),
            (report.is_local, "local"),
            (report.is_external, "external"),
            (report.is_uri, "uri"),
            (report.is_image, "image"),
            (report.is_markdown, "markdown"),
            (report.is_wiki_page, "wiki-page"),
            (report.contains_spaces, "spaces"),
            (report.contains_anchor, "anchor"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }

    fn format_one(report: &LinkReport) -> String {
        let heading = if report.full_path.is_empty() {
            "(empty)"
        } else {
            report.full_path.as_str()
        };

        let lines = [
            heading.to_string(),
            format!("  path: {}", report.path),
            format!("  file_name: {}", report.file_name),
            format!("  file_name_no_ext: {}", report.file_name_no_ext),
            format!("  file_path_no_ext: {}", report.file_path_no_ext),
            format!("  ext: {}", report.ext),
            format!("  name_bounds: {}..{}", report.name_start, report.name_end),
            format!("  flags: {}", Self::flags(report).join(", ")),
        ];
        lines.join("\n")
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, reports: &[LinkReport]) -> Result<String> {
        if reports.is_empty() {
            return Ok("No links.".to_string());
        }

        Ok(reports
            .iter()
            .map(Self::format_one)
            .collect::<Vec<_>>()
            .join("\n\n"))
    }
}

/// Formatter for JSON output.
///
/// Always renders an array, even for a single link.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[LinkReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, reports: &[LinkReport]) -> Result<String> {
        let yaml = serde_yaml::to_string(reports)?;
        Ok(yaml.trim_end().to_string())
    }
}
