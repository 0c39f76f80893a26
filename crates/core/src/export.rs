//! CRM import layouts
//!
//! Each target maps a [`Person`] to one CSV row under a fixed header. The
//! header text and column order are what the CRM importers expect, so they are
//! reproduced exactly. Only the generic target also emits company rows.

use std::fmt;
use std::str::FromStr;

use crate::fields::{
    flatten_work_history, join_sources, normalize_twitter, split_location, split_name,
};
use crate::record::{Company, OptionalField, Person, ProspectData};
use crate::score::{HUBSPOT_LEAD_STATUS, PIPEDRIVE_LABEL, SALESFORCE_RATING};
use crate::table::CsvTable;
use crate::Error;

/// Value of the "Lead Source" column wherever a target has one.
pub const LEAD_SOURCE: &str = "Prospector";

pub const SALESFORCE_HEADERS: [&str; 13] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Company",
    "Title",
    "Industry",
    "Website",
    "LinkedIn__c",
    "Twitter__c",
    "Lead Source",
    "Description",
    "Rating",
];

pub const HUBSPOT_HEADERS: [&str; 13] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone Number",
    "Company Name",
    "Job Title",
    "LinkedIn Bio",
    "Twitter Username",
    "City",
    "State/Region",
    "Lead Status",
    "Lifecycle Stage",
    "Lead Source",
];

pub const PIPEDRIVE_HEADERS: [&str; 8] = [
    "Name",
    "Email",
    "Phone",
    "Organization",
    "Label",
    "Owner",
    "Visible to",
    "Note",
];

pub const GENERIC_HEADERS: [&str; 17] = [
    "record_type",
    "name",
    "email",
    "email_confidence",
    "phone",
    "linkedin_url",
    "twitter",
    "title",
    "company",
    "location",
    "industry",
    "employee_count",
    "website",
    "decision_maker_score",
    "work_history",
    "data_sources",
    "last_updated",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Salesforce,
    Hubspot,
    Pipedrive,
    GenericCsv,
}

impl ExportFormat {
    pub const AVAILABLE: &'static str = "salesforce, hubspot, pipedrive, generic-csv";

    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ExportFormat::Salesforce => &SALESFORCE_HEADERS,
            ExportFormat::Hubspot => &HUBSPOT_HEADERS,
            ExportFormat::Pipedrive => &PIPEDRIVE_HEADERS,
            ExportFormat::GenericCsv => &GENERIC_HEADERS,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    /// Case-insensitive; `generic` is accepted as an alias of `generic-csv`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "salesforce" => Ok(ExportFormat::Salesforce),
            "hubspot" => Ok(ExportFormat::Hubspot),
            "pipedrive" => Ok(ExportFormat::Pipedrive),
            "generic-csv" | "generic" => Ok(ExportFormat::GenericCsv),
            _ => Err(Error::unknown_format(s, Self::AVAILABLE)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Salesforce => "salesforce",
            ExportFormat::Hubspot => "hubspot",
            ExportFormat::Pipedrive => "pipedrive",
            ExportFormat::GenericCsv => "generic-csv",
        };
        write!(f, "{name}")
    }
}

/// Render the whole prospect set in the given CRM layout.
///
/// Produces the header row, one row per person, and for the generic target
/// one row per company after the persons.
pub fn render_export(format: ExportFormat, data: &ProspectData) -> Result<String, Error> {
    let mut table = CsvTable::new(format.headers())?;

    for person in &data.persons {
        let row = match format {
            ExportFormat::Salesforce => salesforce_row(person),
            ExportFormat::Hubspot => hubspot_row(person),
            ExportFormat::Pipedrive => pipedrive_row(person),
            ExportFormat::GenericCsv => generic_person_row(person),
        };
        table.row(&row)?;
    }

    if format == ExportFormat::GenericCsv {
        for company in &data.companies {
            table.row(&generic_company_row(company))?;
        }
    }

    table.finish()
}

/// Salesforce Lead import row
pub fn salesforce_row(person: &Person) -> Vec<String> {
    let name = person.name.or_empty();
    let (first_name, last_name) = split_name(&name);

    vec![
        first_name.to_string(),
        last_name.to_string(),
        person.email.or_empty(),
        person.phone.or_empty(),
        person.current_company.or_empty(),
        person.current_title.or_empty(),
        // Industry and Website only exist on company records
        String::new(),
        String::new(),
        person.linkedin_url.or_empty(),
        person.twitter.or_empty(),
        LEAD_SOURCE.to_string(),
        format!(
            "DM Score: {}/10. {}",
            person.score(),
            join_sources(&person.data_sources)
        ),
        SALESFORCE_RATING
            .classify(person.decision_maker_score)
            .to_string(),
    ]
}

/// HubSpot Contact import row
pub fn hubspot_row(person: &Person) -> Vec<String> {
    let name = person.name.or_empty();
    let (first_name, last_name) = split_name(&name);
    let location = person.location.or_empty();
    let (city, region) = split_location(&location);
    let twitter = person.twitter.or_empty();

    vec![
        first_name.to_string(),
        last_name.to_string(),
        person.email.or_empty(),
        person.phone.or_empty(),
        person.current_company.or_empty(),
        person.current_title.or_empty(),
        person.linkedin_url.or_empty(),
        normalize_twitter(&twitter).to_string(),
        city.to_string(),
        region.to_string(),
        HUBSPOT_LEAD_STATUS
            .classify(person.decision_maker_score)
            .to_string(),
        "lead".to_string(),
        LEAD_SOURCE.to_string(),
    ]
}

/// Pipedrive Person import row
pub fn pipedrive_row(person: &Person) -> Vec<String> {
    vec![
        person.name.or_empty(),
        person.email.or_empty(),
        person.phone.or_empty(),
        person.current_company.or_empty(),
        PIPEDRIVE_LABEL
            .classify(person.decision_maker_score)
            .to_string(),
        // Owner is left blank for auto-assignment
        String::new(),
        "Everyone".to_string(),
        pipedrive_note(person),
    ]
}

fn pipedrive_note(person: &Person) -> String {
    format!(
        "Title: {}\nLinkedIn: {}\nDM Score: {}/10\nSources: {}",
        person.current_title.or_placeholder("N/A"),
        person.linkedin_url.or_placeholder("N/A"),
        person.score(),
        join_sources(&person.data_sources)
    )
}

/// Generic layout row for a person (`record_type` = `person`)
pub fn generic_person_row(person: &Person) -> Vec<String> {
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
        String::new(),
        String::new(),
        String::new(),
        person
            .decision_maker_score
            .map(|score| score.to_string())
            .unwrap_or_default(),
        flatten_work_history(&person.work_history),
        join_sources(&person.data_sources),
        person.last_updated.or_empty(),
    ]
}

/// Generic layout row for a company (`record_type` = `company`)
pub fn generic_company_row(company: &Company) -> Vec<String> {
    vec![
        "company".to_string(),
        company.name.or_empty(),
        String::new(),
        String::new(),
        company.headquarters_phone().or_empty(),
        String::new(),
        String::new(),
        String::new(),
        company.name.or_empty(),
        company.headquarters_address().or_empty(),
        company.industry.or_empty(),
        company.employee_count.or_empty(),
        company.website.or_empty(),
        String::new(),
        String::new(),
        join_sources(&company.data_sources),
        company.last_updated.or_empty(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FieldValue, Headquarters, Score, WorkHistoryEntry};
    use serde_json::json;

    fn jane() -> Person {
        Person {
            name: Some("Jane Doe".into()),
            email: Some("jane@x.com".into()),
            email_confidence: Some(FieldValue::Integer(92)),
            phone: Some("+1 555 0100".into()),
            linkedin_url: Some("https://linkedin.com/in/janedoe".into()),
            twitter: Some("@janedoe".into()),
            current_title: Some("VP Sales".into()),
            current_company: Some("Acme".into()),
            location: Some("Austin, TX".into()),
            decision_maker_score: Some(Score::Integer(9)),
            work_history: vec![WorkHistoryEntry {
                title: Some("Director".into()),
                company: Some("Initech".into()),
                start: Some("2018".into()),
                end: Some("2021".into()),
            }],
            data_sources: vec!["linkedin".to_string(), "apollo".to_string()],
            last_updated: Some("2024-05-01".into()),
        }
    }

    fn acme() -> Company {
        Company {
            name: Some("Acme, Inc.".into()),
            industry: Some("Software".into()),
            employee_count: Some(FieldValue::Integer(250)),
            website: Some("https://acme.com".into()),
            headquarters: Some(Headquarters {
                address: Some("1 Main St, Austin".into()),
                phone: Some("+1 555 0199".into()),
            }),
            data_sources: vec!["crunchbase".to_string()],
            last_updated: Some("2024-04-01".into()),
            ..Company::default()
        }
    }

    fn data(persons: Vec<Person>, companies: Vec<Company>) -> ProspectData {
        ProspectData {
            persons,
            companies,
            export_metadata: None,
        }
    }

    // ============================================================================
    // Format parsing tests
    // ============================================================================

    #[test]
    fn test_parse_export_formats() {
        assert_eq!("salesforce".parse::<ExportFormat>().unwrap(), ExportFormat::Salesforce);
        assert_eq!("HubSpot".parse::<ExportFormat>().unwrap(), ExportFormat::Hubspot);
        assert_eq!("pipedrive".parse::<ExportFormat>().unwrap(), ExportFormat::Pipedrive);
        assert_eq!("generic-csv".parse::<ExportFormat>().unwrap(), ExportFormat::GenericCsv);
        assert_eq!("generic".parse::<ExportFormat>().unwrap(), ExportFormat::GenericCsv);
    }

    #[test]
    fn test_parse_unknown_export_format() {
        let err = "excel".parse::<ExportFormat>().unwrap_err();
        assert!(matches!(err, Error::UnknownFormat { ref name, .. } if name == "excel"));
        assert!(err.to_string().contains(ExportFormat::AVAILABLE));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for format in [
            ExportFormat::Salesforce,
            ExportFormat::Hubspot,
            ExportFormat::Pipedrive,
            ExportFormat::GenericCsv,
        ] {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }

    // ============================================================================
    // Row shape tests
    // ============================================================================

    #[test]
    fn test_rows_match_header_width_for_full_and_empty_person() {
        for person in [jane(), Person::default()] {
            assert_eq!(salesforce_row(&person).len(), SALESFORCE_HEADERS.len());
            assert_eq!(hubspot_row(&person).len(), HUBSPOT_HEADERS.len());
            assert_eq!(pipedrive_row(&person).len(), PIPEDRIVE_HEADERS.len());
            assert_eq!(generic_person_row(&person).len(), GENERIC_HEADERS.len());
        }
        assert_eq!(generic_company_row(&Company::default()).len(), GENERIC_HEADERS.len());
    }

    // ============================================================================
    // Salesforce tests
    // ============================================================================

    #[test]
    fn test_salesforce_end_to_end() {
        let document = json!({
            "persons": [{"name": "Jane Doe", "decision_maker_score": 9, "email": "jane@x.com"}]
        });
        let data = ProspectData::from_json(&document).unwrap();

        let csv = render_export(ExportFormat::Salesforce, &data).unwrap();

        assert_eq!(
            csv,
            "First Name,Last Name,Email,Phone,Company,Title,Industry,Website,LinkedIn__c,Twitter__c,Lead Source,Description,Rating\r\n\
             Jane,Doe,jane@x.com,,,,,,,,Prospector,DM Score: 9/10. ,Hot\r\n"
        );
    }

    #[test]
    fn test_salesforce_description_and_rating() {
        let row = salesforce_row(&jane());
        assert_eq!(row[11], "DM Score: 9/10. linkedin, apollo");
        assert_eq!(row[12], "Hot");
        assert_eq!(row[9], "@janedoe");
    }

    #[test]
    fn test_float_scores_classify_in_every_crm_target() {
        let document = json!({
            "persons": [{"decision_maker_score": 8.0}, {"decision_maker_score": 7.5}]
        });
        let data = ProspectData::from_json(&document).unwrap();
        let (whole, half) = (&data.persons[0], &data.persons[1]);

        assert_eq!(salesforce_row(whole)[11], "DM Score: 8.0/10. ");
        assert_eq!(salesforce_row(whole)[12], "Hot");
        assert_eq!(salesforce_row(half)[12], "Warm");
        assert_eq!(hubspot_row(half)[10], "Qualified");
        assert_eq!(pipedrive_row(half)[4], "Warm lead");
        assert_eq!(generic_person_row(half)[13], "7.5");
    }

    #[test]
    fn test_salesforce_empty_person() {
        let row = salesforce_row(&Person::default());
        assert_eq!(row[10], "Prospector");
        assert_eq!(row[11], "DM Score: 0/10. ");
        assert_eq!(row[12], "Cold");
        assert!(row[..10].iter().all(String::is_empty));
    }

    // ============================================================================
    // HubSpot tests
    // ============================================================================

    #[test]
    fn test_hubspot_row() {
        let row = hubspot_row(&jane());
        assert_eq!(row[0], "Jane");
        assert_eq!(row[1], "Doe");
        assert_eq!(row[7], "janedoe");
        assert_eq!(row[8], "Austin");
        assert_eq!(row[9], "TX");
        assert_eq!(row[10], "Qualified");
        assert_eq!(row[11], "lead");
        assert_eq!(row[12], "Prospector");
    }

    #[test]
    fn test_hubspot_empty_person() {
        let row = hubspot_row(&Person::default());
        assert_eq!(row[10], "New");
        assert!(row[..10].iter().all(String::is_empty));
    }

    // ============================================================================
    // Pipedrive tests
    // ============================================================================

    #[test]
    fn test_pipedrive_row() {
        let row = pipedrive_row(&jane());
        assert_eq!(row[0], "Jane Doe");
        assert_eq!(row[4], "Hot lead");
        assert_eq!(row[5], "");
        assert_eq!(row[6], "Everyone");
        assert_eq!(
            row[7],
            "Title: VP Sales\nLinkedIn: https://linkedin.com/in/janedoe\nDM Score: 9/10\nSources: linkedin, apollo"
        );
    }

    #[test]
    fn test_pipedrive_note_placeholders() {
        let row = pipedrive_row(&Person::default());
        assert_eq!(row[4], "Cold lead");
        assert_eq!(row[7], "Title: N/A\nLinkedIn: N/A\nDM Score: 0/10\nSources: ");
    }

    #[test]
    fn test_pipedrive_note_is_quoted_in_csv() {
        let csv = render_export(ExportFormat::Pipedrive, &data(vec![jane()], vec![])).unwrap();
        assert!(csv.contains(",Everyone,\"Title: VP Sales\nLinkedIn:"));
    }

    // ============================================================================
    // Generic tests
    // ============================================================================

    #[test]
    fn test_generic_person_row() {
        let row = generic_person_row(&jane());
        assert_eq!(row[0], "person");
        assert_eq!(row[3], "92");
        assert_eq!(row[6], "@janedoe");
        assert_eq!(row[13], "9");
        assert_eq!(row[14], "Director at Initech (2018-2021)");
        assert_eq!(row[15], "linkedin, apollo");
        assert_eq!(row[16], "2024-05-01");
    }

    #[test]
    fn test_generic_person_without_score_leaves_column_empty() {
        assert_eq!(generic_person_row(&Person::default())[13], "");
    }

    #[test]
    fn test_generic_company_row() {
        let row = generic_company_row(&acme());
        assert_eq!(row[0], "company");
        assert_eq!(row[1], "Acme, Inc.");
        assert_eq!(row[4], "+1 555 0199");
        assert_eq!(row[8], "Acme, Inc.");
        assert_eq!(row[9], "1 Main St, Austin");
        assert_eq!(row[10], "Software");
        assert_eq!(row[11], "250");
        assert_eq!(row[12], "https://acme.com");
        assert_eq!(row[15], "crunchbase");
    }

    #[test]
    fn test_generic_emits_persons_then_companies() {
        let csv =
            render_export(ExportFormat::GenericCsv, &data(vec![jane()], vec![acme()])).unwrap();
        let lines: Vec<&str> = csv.split("\r\n").collect();

        assert!(lines[0].starts_with("record_type,name,email"));
        assert!(lines[1].starts_with("person,Jane Doe,"));
        assert!(lines[2].starts_with("company,\"Acme, Inc.\","));
    }

    #[test]
    fn test_crm_targets_skip_companies() {
        let csv =
            render_export(ExportFormat::Salesforce, &data(vec![], vec![acme()])).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
