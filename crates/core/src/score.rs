//! Decision-maker score classification
//!
//! Every target turns the 0-10 decision-maker score into one of three labels.
//! Thresholds differ per target, so each target owns its own ladder instead of
//! sharing one.

use crate::record::Score;

/// A three-step threshold ladder.
///
/// `score >= high` yields `top`, `score >= mid` yields `middle`, anything else
/// (including negative and missing scores) yields `bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLadder {
    pub high: i64,
    pub mid: i64,
    pub top: &'static str,
    pub middle: &'static str,
    pub bottom: &'static str,
}

/// Salesforce `Rating` column
pub const SALESFORCE_RATING: ScoreLadder = ScoreLadder {
    high: 8,
    mid: 5,
    top: "Hot",
    middle: "Warm",
    bottom: "Cold",
};

/// HubSpot `Lead Status` column
pub const HUBSPOT_LEAD_STATUS: ScoreLadder = ScoreLadder {
    high: 7,
    mid: 4,
    top: "Qualified",
    middle: "Open",
    bottom: "New",
};

/// Pipedrive `Label` column
pub const PIPEDRIVE_LABEL: ScoreLadder = ScoreLadder {
    high: 8,
    mid: 5,
    top: "Hot lead",
    middle: "Warm lead",
    bottom: "Cold lead",
};

/// CSS class of the score badge in the HTML report
pub const HTML_BADGE: ScoreLadder = ScoreLadder {
    high: 7,
    mid: 4,
    top: "dm-high",
    middle: "dm-medium",
    bottom: "dm-low",
};

impl ScoreLadder {
    /// Label for `score`; a missing score is classified as 0.
    pub fn classify(&self, score: Option<Score>) -> &'static str {
        let score = score.map_or(0.0, Score::value);
        if score >= self.high as f64 {
            self.top
        } else if score >= self.mid as f64 {
            self.middle
        } else {
            self.bottom
        }
    }
}
