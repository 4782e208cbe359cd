//! Role Inventory - Scoring engine for a team role self-perception inventory
//!
//! Respondents spread points over the statements of each question; this
//! crate normalizes those allocations, aggregates them per role through a
//! scoring key, calibrates the raw scores against per-role tables, and
//! classifies each role as natural, secondary, or avoided.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
