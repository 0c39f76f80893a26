//! Prospect records
//!
//! Typed view of the prospect JSON file. Every field is optional: a missing key
//! and an explicit `null` both deserialize to `None` (or an empty sequence), so
//! partial prospect data never fails to load.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::Error;

/// A scalar record value.
///
/// Prospect sources disagree on whether things like phone numbers, employee
/// counts or confidence values are text or numbers, so scalar fields accept
/// either and render them the same way the export tooling always has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Whether the value counts as "present" for optional report sections.
    ///
    /// Empty text, zero and `false` are treated like a missing value.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Bool(b) => *b,
            FieldValue::Integer(n) => *n != 0,
            FieldValue::Float(n) => *n != 0.0,
            FieldValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(true) => write!(f, "True"),
            FieldValue::Bool(false) => write!(f, "False"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            // Integral floats keep their fractional digit (4.0, not 4).
            FieldValue::Float(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e16 => {
                write!(f, "{n:.1}")
            }
            FieldValue::Float(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

/// Decision-maker score, 0-10 and not range checked.
///
/// Whole scores show up both as `8` and as `8.0`, so any JSON number is
/// accepted and compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Integer(i64),
    Float(f64),
}

impl Score {
    pub fn value(self) -> f64 {
        match self {
            Score::Integer(n) => n as f64,
            Score::Float(n) => n,
        }
    }

    pub fn is_zero(self) -> bool {
        self.value() == 0.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Score::Integer(0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::Integer(n) => fmt::Display::fmt(&FieldValue::Integer(n), f),
            Score::Float(n) => fmt::Display::fmt(&FieldValue::Float(n), f),
        }
    }
}

impl From<i64> for Score {
    fn from(n: i64) -> Self {
        Score::Integer(n)
    }
}

/// Accessors for optional scalar fields.
pub trait OptionalField {
    /// Rendered value, or an empty string when absent.
    fn or_empty(&self) -> String;

    /// Rendered value, or `placeholder` when absent.
    fn or_placeholder(&self, placeholder: &str) -> String;

    /// Present and truthy (see [`FieldValue::is_truthy`]).
    fn is_truthy(&self) -> bool;
}

impl OptionalField for Option<FieldValue> {
    fn or_empty(&self) -> String {
        self.or_placeholder("")
    }

    fn or_placeholder(&self, placeholder: &str) -> String {
        match self {
            Some(value) => value.to_string(),
            None => placeholder.to_string(),
        }
    }

    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(FieldValue::is_truthy)
    }
}

/// Treat `null` the same as a missing key for sequence fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of a person's work history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkHistoryEntry {
    pub title: Option<FieldValue>,
    pub company: Option<FieldValue>,
    pub start: Option<FieldValue>,
    pub end: Option<FieldValue>,
}

/// A prospect person (lead)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub name: Option<FieldValue>,
    pub email: Option<FieldValue>,
    /// 0-100
    pub email_confidence: Option<FieldValue>,
    pub phone: Option<FieldValue>,
    pub linkedin_url: Option<FieldValue>,
    pub twitter: Option<FieldValue>,
    pub current_title: Option<FieldValue>,
    pub current_company: Option<FieldValue>,
    /// Free text, usually "City, Region"
    pub location: Option<FieldValue>,
    pub decision_maker_score: Option<Score>,
    #[serde(deserialize_with = "null_as_default")]
    pub work_history: Vec<WorkHistoryEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_sources: Vec<String>,
    pub last_updated: Option<FieldValue>,
}

impl Person {
    /// Score used by every classifier and "DM Score" text; absent counts as 0.
    pub fn score(&self) -> Score {
        self.decision_maker_score.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headquarters {
    pub address: Option<FieldValue>,
    pub phone: Option<FieldValue>,
}

impl Headquarters {
    pub fn is_empty(&self) -> bool {
        self.address.is_none() && self.phone.is_none()
    }
}

/// Member of a company's leadership team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leader {
    pub name: Option<FieldValue>,
    pub title: Option<FieldValue>,
    pub email: Option<FieldValue>,
    pub dm_score: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionMaker {
    pub name: Option<FieldValue>,
    pub title: Option<FieldValue>,
    pub role: Option<FieldValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsItem {
    pub date: Option<FieldValue>,
    pub headline: Option<FieldValue>,
    pub source: Option<FieldValue>,
}

impl ExportMetadata {
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none() && self.source.is_none()
    }
}

/// A prospect company
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: Option<FieldValue>,
    pub industry: Option<FieldValue>,
    pub founded: Option<FieldValue>,
    pub employee_count: Option<FieldValue>,
    pub revenue_estimate: Option<FieldValue>,
    pub website: Option<FieldValue>,
    pub headquarters: Option<Headquarters>,
    #[serde(deserialize_with = "null_as_default")]
    pub leadership: Vec<Leader>,
    #[serde(deserialize_with = "null_as_default")]
    pub decision_makers: Vec<DecisionMaker>,
    #[serde(deserialize_with = "null_as_default")]
    pub recent_news: Vec<NewsItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub data_sources: Vec<String>,
    pub last_updated: Option<FieldValue>,
}

impl Company {
    pub fn headquarters_phone(&self) -> Option<FieldValue> {
        self.headquarters.as_ref().and_then(|hq| hq.phone.clone())
    }

    pub fn headquarters_address(&self) -> Option<FieldValue> {
        self.headquarters.as_ref().and_then(|hq| hq.address.clone())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportMetadata {
    pub timestamp: Option<FieldValue>,
    pub source: Option<FieldValue>,
}

/// The whole prospect file: persons, companies and optional export metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProspectData {
    #[serde(deserialize_with = "null_as_default")]
    pub persons: Vec<Person>,
    #[serde(deserialize_with = "null_as_default")]
    pub companies: Vec<Company>,
    pub export_metadata: Option<ExportMetadata>,
}

impl ProspectData {
    /// Build the typed view from an already parsed JSON document.
    pub fn from_json(document: &Value) -> Result<Self, Error> {
        Ok(ProspectData::deserialize(document)?)
    }
}
