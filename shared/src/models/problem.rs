use crate::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A problem as returned by the Codeforces `problemset.problems` endpoint
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Id of the contest the problem first appeared in
    #[serde(default)]
    pub contest_id: i64,

    /// Position of the problem within its contest ("A", "B1", ...)
    pub index: String,

    /// Name of the problem
    #[validate(length(
        min = 1,
        max = 1000,
        message = "Name must be between 1 and 1000 characters"
    ))]
    pub name: String,

    /// Difficulty rating; unrated problems have none
    pub rating: Option<u32>,

    /// Topic tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Problem {
    /// The displayed problem code, e.g. "1917-C"
    pub fn code(&self) -> String {
        format!("{}-{}", self.contest_id, self.index)
    }

    /// Validates the problem data
    pub fn validate_fields(&self) -> Result<()> {
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_log::test;

    #[test]
    fn test_problem_code() {
        let problem = Problem {
            contest_id: 1917,
            index: "E2".to_string(),
            name: "Construct Matrix (hard version)".to_string(),
            rating: Some(2500),
            tags: vec!["constructive algorithms".to_string(), "math".to_string()],
        };

        assert_eq!(problem.code(), "1917-E2");
        assert!(problem.validate_fields().is_ok());
    }

    #[test]
    fn test_problem_deserializes_api_shape() {
        let json = r#"{
            "contestId": 1917,
            "problemsetName": null,
            "index": "A",
            "name": "Least Product",
            "type": "PROGRAMMING",
            "rating": 800,
            "tags": ["constructive algorithms", "math"]
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.contest_id, 1917);
        assert_eq!(problem.rating, Some(800));
        assert_eq!(problem.tags.len(), 2);
    }

    #[test]
    fn test_problem_without_rating() {
        let json = r#"{
            "contestId": 1,
            "index": "A",
            "name": "Theatre Square",
            "tags": []
        }"#;

        let problem: Problem = serde_json::from_str(json).unwrap();
        assert_eq!(problem.rating, None);
    }
}
