//! Output formatter implementations.

use std::fmt::Write as _;

use crate::Result;

use super::{OutputFormatter, PathReport};

/// JSON formatter: a pretty-printed array of reports.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[PathReport]) -> Result<String> {
        Ok(serde_json::to_string_pretty(reports)?)
    }
}

/// YAML formatter: a sequence of reports.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, reports: &[PathReport]) -> Result<String> {
        Ok(serde_yaml::to_string(reports)?)
    }
}

/// Human-readable formatter.
pub struct HumanFormatter;

impl HumanFormatter {
    fn flag(value: bool) -> &'static str {
        if value {
            "yes"
        } else {
            "no"
        }
    }

    fn render(report: &PathReport, out: &mut String) -> std::fmt::Result {
        writeln!(out, "{}", report.input)?;
        if let Some(device) = report.device {
            writeln!(out, "  device:    {device}")?;
        }
        if let Some(node) = &report.node {
            writeln!(out, "  node:      {node}")?;
        }
        if !report.dirs.is_empty() {
            writeln!(out, "  dirs:      {}", report.dirs.join(", "))?;
        }
        if let Some(name) = &report.name {
            writeln!(out, "  name:      {name}")?;
        }
        writeln!(
            out,
            "  absolute:  {}  remote: {}  extended: {}",
            Self::flag(report.absolute),
            Self::flag(report.remote),
            Self::flag(report.extended_length)
        )?;
        writeln!(out, "  canonical: {}", report.canonical)?;
        writeln!(out, "  extended:  {}", report.extended)?;
        for err in &report.errors {
            writeln!(out, "  error:     {err}")?;
        }
        Ok(())
    }
}

impl OutputFormatter for HumanFormatter {
    fn format(&self, reports: &[PathReport]) -> Result<String> {
        let mut out = String::new();
        for (i, report) in reports.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            // Writing to a String cannot fail.
            let _ = Self::render(report, &mut out);
        }
        Ok(out.trim_end().to_string())
    }
}
