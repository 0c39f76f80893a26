//! Markdown profiles
//!
//! One block per record, persons first, each block followed by a `---` rule.
//! Sections whose data is missing or empty are left out entirely; single
//! fields fall back to `Unknown` / `Not found`.

use crate::record::{Company, OptionalField, Person, ProspectData};

use super::ReportContext;

const RECORD_SEPARATOR: &str = "\n---\n\n";

pub fn render(data: &ProspectData, context: &ReportContext) -> String {
    let today = context.today_string();
    let mut output = String::new();

    for person in &data.persons {
        output.push_str(&person_markdown(person, &today));
        output.push_str(RECORD_SEPARATOR);
    }
    for company in &data.companies {
        output.push_str(&company_markdown(company, &today));
        output.push_str(RECORD_SEPARATOR);
    }

    output
}

/// Contact profile block for a single person
pub fn person_markdown(person: &Person, today: &str) -> String {
    let mut md = format!(
        "# Contact Profile: {}\n\n",
        person.name.or_placeholder("Unknown")
    );

    md.push_str("## Contact Information\n");
    md.push_str(&format!(
        "- **Email**: {}",
        person.email.or_placeholder("Not found")
    ));
    if person.email_confidence.is_truthy() {
        md.push_str(&format!(
            " ({}% confidence)",
            person.email_confidence.or_empty()
        ));
    }
    md.push('\n');
    md.push_str(&format!(
        "- **Phone**: {}\n",
        person.phone.or_placeholder("Not found")
    ));
    md.push_str(&format!(
        "- **LinkedIn**: {}\n",
        person.linkedin_url.or_placeholder("Not found")
    ));
    md.push_str(&format!(
        "- **Twitter**: {}\n\n",
        person.twitter.or_placeholder("Not found")
    ));

    md.push_str("## Professional Profile\n");
    md.push_str(&format!(
        "- **Current Role**: {} at {}\n",
        person.current_title.or_placeholder("Unknown"),
        person.current_company.or_placeholder("Unknown")
    ));
    md.push_str(&format!(
        "- **Location**: {}\n\n",
        person.location.or_placeholder("Unknown")
    ));

    if !person.work_history.is_empty() {
        md.push_str("## Work History\n");
        for (i, job) in person.work_history.iter().enumerate() {
            md.push_str(&format!(
                "{}. {} at {}",
                i + 1,
                job.title.or_placeholder("Unknown"),
                job.company.or_placeholder("Unknown")
            ));
            // Dates only when the range is complete
            if job.start.is_truthy() && job.end.is_truthy() {
                md.push_str(&format!(
                    " ({} - {})",
                    job.start.or_empty(),
                    job.end.or_empty()
                ));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    if let Some(score) = person.decision_maker_score.filter(|s| !s.is_zero()) {
        md.push_str(&format!("## Decision-Maker Score: {score}/10\n\n"));
    }

    if !person.data_sources.is_empty() {
        md.push_str("## Data Sources\n");
        for source in &person.data_sources {
            md.push_str(&format!("- {source}\n"));
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "*Last updated: {}*\n",
        person.last_updated.or_placeholder(today)
    ));

    md
}

/// Company profile block for a single company
pub fn company_markdown(company: &Company, today: &str) -> String {
    let mut md = format!(
        "# Company Profile: {}\n\n",
        company.name.or_placeholder("Unknown")
    );

    md.push_str("## Overview\n");
    md.push_str(&format!(
        "- **Industry**: {}\n",
        company.industry.or_placeholder("Unknown")
    ));
    md.push_str(&format!(
        "- **Founded**: {}\n",
        company.founded.or_placeholder("Unknown")
    ));
    md.push_str(&format!(
        "- **Employees**: {}\n",
        company.employee_count.or_placeholder("Unknown")
    ));
    md.push_str(&format!(
        "- **Revenue**: {}\n",
        company.revenue_estimate.or_placeholder("Unknown")
    ));
    md.push_str(&format!(
        "- **Website**: {}\n\n",
        company.website.or_placeholder("Unknown")
    ));

    if let Some(hq) = company.headquarters.as_ref().filter(|hq| !hq.is_empty()) {
        md.push_str("## Headquarters\n");
        md.push_str(&format!(
            "- **Address**: {}\n",
            hq.address.or_placeholder("Unknown")
        ));
        md.push_str(&format!(
            "- **Phone**: {}\n\n",
            hq.phone.or_placeholder("Unknown")
        ));
    }

    if !company.leadership.is_empty() {
        md.push_str("## Leadership Team\n\n");
        md.push_str("| Name | Title | Email | DM Score |\n");
        md.push_str("|------|-------|-------|----------|\n");
        for leader in &company.leadership {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                leader.name.or_empty(),
                leader.title.or_empty(),
                leader.email.or_empty(),
                leader.dm_score.or_empty()
            ));
        }
        md.push('\n');
    }

    if !company.decision_makers.is_empty() {
        md.push_str("## Decision Makers\n");
        for (i, dm) in company.decision_makers.iter().enumerate() {
            md.push_str(&format!(
                "{}. **{}** - {}",
                i + 1,
                dm.name.or_placeholder("Unknown"),
                dm.title.or_placeholder("Unknown")
            ));
            if dm.role.is_truthy() {
                md.push_str(&format!(" ({})", dm.role.or_empty()));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    if !company.recent_news.is_empty() {
        md.push_str("## Recent News\n");
        for news in &company.recent_news {
            md.push_str(&format!(
                "- [{}] {}",
                news.date.or_empty(),
                news.headline.or_empty()
            ));
            if news.source.is_truthy() {
                md.push_str(&format!(" ({})", news.source.or_empty()));
            }
            md.push('\n');
        }
        md.push('\n');
    }

    md.push_str(&format!(
        "*Last updated: {}*\n",
        company.last_updated.or_placeholder(today)
    ));

    md
}
