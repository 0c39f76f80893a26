//! Standalone HTML report
//!
//! A single document with an inline style sheet: an optional metadata line,
//! a card per person with a colored score badge, and a card per company with
//! its leadership table. Record text is HTML-escaped.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::record::{Company, ExportMetadata, FieldValue, OptionalField, Person, ProspectData};
use crate::score::HTML_BADGE;

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Prospect Research Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; max-width: 1200px; margin: 0 auto; padding: 20px; }
        h1 { color: #1a1a2e; border-bottom: 2px solid #4a4e69; padding-bottom: 10px; }
        h2 { color: #4a4e69; margin-top: 30px; }
        .card { background: #f8f9fa; border-radius: 8px; padding: 20px; margin: 20px 0; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .dm-score { display: inline-block; background: #4a4e69; color: white; padding: 5px 15px; border-radius: 20px; font-weight: bold; }
        .dm-high { background: #2ecc71; }
        .dm-medium { background: #f39c12; }
        .dm-low { background: #e74c3c; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background: #4a4e69; color: white; }
        tr:hover { background: #f5f5f5; }
        .meta { color: #666; font-size: 0.9em; margin-top: 20px; }
    </style>
</head>
<body>
    <h1>Prospect Research Report</h1>
"#;

const DOCUMENT_FOOT: &str = r#"
    <p class="meta">Generated by Prospector Plugin</p>
</body>
</html>"#;

/// Source shown in the metadata line when the export does not name one.
pub const DEFAULT_SOURCE: &str = "prospector";

pub fn render(data: &ProspectData) -> String {
    let mut html = String::from(DOCUMENT_HEAD);

    if let Some(meta) = data.export_metadata.as_ref().filter(|meta| !meta.is_empty()) {
        html.push_str(&metadata_line(meta));
    }

    if !data.persons.is_empty() {
        html.push_str("<h2>Contact Profiles</h2>\n");
        for person in &data.persons {
            html.push_str(&person_card(person));
        }
    }

    if !data.companies.is_empty() {
        html.push_str("<h2>Company Profiles</h2>\n");
        for company in &data.companies {
            html.push_str(&company_card(company));
        }
    }

    html.push_str(DOCUMENT_FOOT);
    html
}

/// Escaped text of a field, or of `placeholder` when it is missing.
fn text(value: &Option<FieldValue>, placeholder: &str) -> String {
    encode_text(&value.or_placeholder(placeholder)).into_owned()
}

/// Escaped attribute value of a field, or of `placeholder` when it is missing.
fn attr(value: &Option<FieldValue>, placeholder: &str) -> String {
    encode_double_quoted_attribute(&value.or_placeholder(placeholder)).into_owned()
}

pub fn metadata_line(meta: &ExportMetadata) -> String {
    format!(
        "<p class='meta'>Generated: {} | Source: {}</p>\n",
        text(&meta.timestamp, ""),
        text(&meta.source, DEFAULT_SOURCE)
    )
}

pub fn person_card(person: &Person) -> String {
    let badge = HTML_BADGE.classify(person.decision_maker_score);
    let score = person
        .decision_maker_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        r#"<div class="card">
    <h3>{name}
        <span class="dm-score {badge}">DM Score: {score}/10</span>
    </h3>
    <p><strong>{title}</strong> at {company}</p>
    <p>Email: {email} | Phone: {phone} | <a href="{linkedin}">LinkedIn</a></p>
    <p>Location: {location}</p>
</div>
"#,
        name = text(&person.name, "Unknown"),
        title = text(&person.current_title, "Unknown"),
        company = text(&person.current_company, "Unknown"),
        email = text(&person.email, "N/A"),
        phone = text(&person.phone, "N/A"),
        linkedin = attr(&person.linkedin_url, "#"),
        location = text(&person.location, "Unknown"),
    )
}

pub fn company_card(company: &Company) -> String {
    let mut html = format!(
        r#"<div class="card">
    <h3>{name}</h3>
    <p><strong>Industry:</strong> {industry} | <strong>Size:</strong> {size} | <strong>Revenue:</strong> {revenue}</p>
    <p><a href="{href}">{website}</a> | Phone: {phone}</p>
"#,
        name = text(&company.name, "Unknown"),
        industry = text(&company.industry, "Unknown"),
        size = text(&company.employee_count, "Unknown"),
        revenue = text(&company.revenue_estimate, "Unknown"),
        href = attr(&company.website, "#"),
        website = text(&company.website, "N/A"),
        phone = text(&company.headquarters_phone(), "N/A"),
    );

    if !company.leadership.is_empty() {
        html.push_str("<h4>Leadership</h4>\n<table><tr><th>Name</th><th>Title</th><th>Email</th><th>DM Score</th></tr>\n");
        for leader in &company.leadership {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                text(&leader.name, ""),
                text(&leader.title, ""),
                text(&leader.email, ""),
                text(&leader.dm_score, "")
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</div>\n");
    html
}
