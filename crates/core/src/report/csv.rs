//! Flat CSV report: one row per person, then one row per company.

use crate::fields::find_ceo;
use crate::record::{Company, OptionalField, Person, ProspectData};
use crate::table::CsvTable;
use crate::Error;

pub const REPORT_HEADERS: [&str; 12] = [
    "type",
    "name",
    "email",
    "email_confidence",
    "phone",
    "linkedin_url",
    "twitter",
    "title",
    "company",
    "location",
    "dm_score",
    "last_updated",
];

pub fn render(data: &ProspectData) -> Result<String, Error> {
    let mut table = CsvTable::new(&REPORT_HEADERS)?;

    for person in &data.persons {
        table.row(&person_row(person))?;
    }
    for company in &data.companies {
        table.row(&company_row(company))?;
    }

    table.finish()
}

pub fn person_row(person: &Person) -> Vec<String> {
    vec![
        "person".to_string(),
        person.name.or_empty(),
        person.email.or_empty(),
        person.email_confidence.or_empty(),
        person.phone.or_empty(),
        person.linkedin_url.or_empty(),
        person.twitter.or_empty(),
        person.current_title.or_empty(),
        person.current_company.or_empty(),
        person.location.or_empty(),
        person
            .decision_maker_score
            .map(|score| score.to_string())
            .unwrap_or_default(),
        person.last_updated.or_empty(),
    ]
}

/// Company row; the email column carries the CEO's email when a CEO is listed.
pub fn company_row(company: &Company) -> Vec<String> {
    let ceo_email = find_ceo(&company.leadership)
        .map(|ceo| ceo.email.or_empty())
        .unwrap_or_default();

    vec![
        "company".to_string(),
        company.name.or_empty(),
        ceo_email,
        String::new(),
        company.headquarters_phone().or_empty(),
        String::new(),
        String::new(),
        String::new(),
        company.name.or_empty(),
        company.headquarters_address().or_empty(),
        String::new(),
        company.last_updated.or_empty(),
    ]
}
