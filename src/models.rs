//! Frontend Models
//!
//! Data structures matching the task API.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned task identifier
pub type TaskId = u32;

/// Task record (owned by the server, read-only here)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "bool_or_int")]
    pub completed: bool,
    pub created_at: String,
}

impl Task {
    /// Description text, `None` when absent or empty
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Human-readable creation date (`M/D/YYYY`).
    ///
    /// Falls back to the raw server value when it can't be parsed.
    pub fn created_label(&self) -> String {
        parse_timestamp(&self.created_at)
            .map(|ts| ts.format("%-m/%-d/%Y").to_string())
            .unwrap_or_else(|| self.created_at.clone())
    }
}

/// MySQL-backed servers send `BOOLEAN` columns as `0`/`1`
fn bool_or_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(flag) => flag,
        Flag::Int(n) => n != 0,
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.naive_local());
    }
    if let Ok(ts) = DateTime::parse_from_rfc2822(raw) {
        return Some(ts.naive_local());
    }
    // HTTP-date with a literal "GMT" zone
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%a, %d %b %Y %H:%M:%S GMT") {
        return Some(ts);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// List scope sent as the `filter` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    #[serde(alias = "pending")]
    Active,
    Completed,
}

impl Filter {
    /// Filter controls in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}

/// Body of `POST /api/tasks`
#[derive(Debug, Serialize)]
pub struct CreateTaskArgs<'a> {
    pub title: &'a str,
    pub description: &'a str,
}

/// Body of `PUT /api/tasks/{id}`; absent fields are left untouched
#[derive(Debug, Default, Serialize)]
pub struct UpdateTaskArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> UpdateTaskArgs<'a> {
    pub fn completion(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }

    pub fn content(title: &'a str, description: &'a str) -> Self {
        Self { title: Some(title), description: Some(description), ..Default::default() }
    }
}
