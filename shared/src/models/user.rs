use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user profile as returned by the Codeforces `user.ratedList` endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Codeforces handle
    #[validate(length(min = 1, max = 100, message = "Handle cannot be empty"))]
    pub handle: String,

    /// Current rating; never-rated accounts have none
    pub rating: Option<u32>,

    /// Current rank string ("expert", "legendary grandmaster", ...)
    pub rank: Option<String>,

    /// Community contribution score, may be negative
    pub contribution: Option<i32>,

    /// All-time best rating
    pub max_rating: Option<u32>,

    /// Rank string at the all-time best rating
    pub max_rank: Option<String>,

    pub country: Option<String>,

    pub organization: Option<String>,
}

impl UserProfile {
    /// Validates the profile data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}
