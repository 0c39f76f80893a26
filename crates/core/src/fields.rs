//! Field mapping helpers shared by the export and report targets

use crate::record::{Leader, OptionalField, WorkHistoryEntry};

/// Split a full name into first and last name on the first space.
///
/// A name without a space yields an empty last name. Everything after the
/// first space, further spaces included, is the last name.
pub fn split_name(name: &str) -> (&str, &str) {
    name.split_once(' ').unwrap_or((name, ""))
}

/// Split a "City, Region" location into city and region.
///
/// Only the first two `", "` separated segments are used; a missing region is
/// empty.
pub fn split_location(location: &str) -> (&str, &str) {
    let mut parts = location.split(", ");
    let city = parts.next().unwrap_or("");
    let region = parts.next().unwrap_or("");
    (city, region)
}

/// Strip a single leading `@` from a Twitter handle.
pub fn normalize_twitter(handle: &str) -> &str {
    handle.strip_prefix('@').unwrap_or(handle)
}

/// Render work history as `"{title} at {company} ({start}-{end})"` entries
/// joined with `"; "`.
pub fn flatten_work_history(history: &[WorkHistoryEntry]) -> String {
    history
        .iter()
        .map(|job| {
            format!(
                "{} at {} ({}-{})",
                job.title.or_empty(),
                job.company.or_empty(),
                job.start.or_empty(),
                job.end.or_empty()
            )
        })
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn join_sources(sources: &[String]) -> String {
    sources.join(", ")
}

/// First leader whose title contains "CEO" (case-sensitive).
pub fn find_ceo(leadership: &[Leader]) -> Option<&Leader> {
    leadership.iter().find(|leader| {
        leader
            .title
            .as_ref()
            .is_some_and(|title| title.to_string().contains("CEO"))
    })
}
