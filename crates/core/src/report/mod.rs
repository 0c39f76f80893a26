//! Report layouts
//!
//! Human-facing renderings of a prospect file. Markdown and HTML are built
//! block by block from the typed records, CSV goes through the same table
//! writer as the CRM exports, and JSON re-serializes the untyped document so
//! nothing in the input is lost.

pub mod csv;
pub mod html;
pub mod json;
pub mod markdown;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde_json::Value;

use crate::record::ProspectData;
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
    Csv,
    Html,
}

impl ReportFormat {
    pub const AVAILABLE: &'static str = "markdown, json, csv, html";
}

impl FromStr for ReportFormat {
    type Err = Error;

    /// Case-insensitive; `md` is accepted as an alias of `markdown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            "html" => Ok(ReportFormat::Html),
            _ => Err(Error::unknown_format(s, Self::AVAILABLE)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Markdown => "markdown",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Html => "html",
        };
        write!(f, "{name}")
    }
}

/// Inputs a report needs besides the records themselves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportContext {
    /// Shown as "Last updated" for records that carry no `last_updated`.
    pub today: NaiveDate,
}

impl ReportContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub(crate) fn today_string(&self) -> String {
        self.today.format("%Y-%m-%d").to_string()
    }
}

/// Render a parsed prospect document in the given report layout.
pub fn render_report(
    format: ReportFormat,
    document: &Value,
    context: &ReportContext,
) -> Result<String, Error> {
    match format {
        ReportFormat::Json => json::render(document),
        ReportFormat::Markdown => {
            let data = ProspectData::from_json(document)?;
            Ok(markdown::render(&data, context))
        }
        ReportFormat::Csv => self::csv::render(&ProspectData::from_json(document)?),
        ReportFormat::Html => Ok(html::render(&ProspectData::from_json(document)?)),
    }
}
