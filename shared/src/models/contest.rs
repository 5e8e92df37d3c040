use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contest as returned by the Codeforces `contest.list` endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Codeforces contest id
    pub id: i64,

    /// Name of the contest
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Name must be between 1 and 1000 characters"
    ))]
    pub name: String,

    /// Contest format ("CF", "IOI", "ICPC")
    #[serde(rename = "type")]
    pub kind: String,

    /// Lifecycle phase ("BEFORE", "CODING", "FINISHED", ...)
    pub phase: String,

    /// Contest duration in seconds
    pub duration_seconds: i64,

    /// Contest start time as a unix timestamp (seconds)
    #[serde(default)]
    pub start_time_seconds: i64,
}

impl Contest {
    pub fn is_finished(&self) -> bool {
        self.phase == "FINISHED"
    }

    /// Validates the contest data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}
