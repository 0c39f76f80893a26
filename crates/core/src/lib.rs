//! Core library for prospector
//!
//! This crate implements the **Functional Core** of the prospector tools,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The prospector project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`prospector_core`** (this crate): Pure transformation functions with zero I/O
//! - **`prospector`**: File I/O, argument parsing and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No file access, no clock reads, no printing
//! - **Tolerant of partial data**: Every record field is optional and renders as
//!   an empty string or a placeholder when missing
//!
//! # Module Organization
//!
//! - [`record`]: Person and Company records as read from the prospect JSON file
//! - [`score`]: Decision-maker score to label ladders, one per target
//! - [`fields`]: Field mapping helpers shared by the targets (name and location
//!   splitting, work history flattening, CEO lookup)
//! - [`export`]: CRM import layouts (Salesforce, HubSpot, Pipedrive, generic CSV)
//! - [`report`]: Report layouts (Markdown, JSON, CSV, HTML)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use prospector_core::export::{render_export, ExportFormat};
//! use prospector_core::record::ProspectData;
//!
//! let document = serde_json::json!({
//!     "persons": [{"name": "Jane Doe", "decision_maker_score": 9}]
//! });
//! let data = ProspectData::from_json(&document)?;
//!
//! let csv = render_export(ExportFormat::Salesforce, &data)?;
//! assert!(csv.contains("Jane,Doe"));
//! ```

pub mod error;
pub mod export;
pub mod fields;
pub mod record;
pub mod report;
pub mod score;

mod table;

pub use error::Error;
