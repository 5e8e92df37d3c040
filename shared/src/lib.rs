pub mod models {
    pub mod contest;
    pub mod problem;
    pub mod user;
}

pub mod query {
    pub mod classify;
    pub mod debounce;
    pub mod engine;
    pub mod presets;
}

pub mod error;

// Re-export commonly used items
pub use error::{Result, SharedError};

// Re-export models
pub use models::{contest::Contest, problem::Problem, user::UserProfile};

// Re-export the query engine surface
pub use query::{
    classify::{difficulty_bucket, division, rank_tier, Difficulty, Division, RankTier},
    debounce::{Debouncer, Scheduler},
    engine::{apply_query, EngineConfig, FilterSpec, Query, SortDirection, SortSpec},
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contest_creation() {
        let contest = Contest {
            id: 1917,
            name: "Codeforces Round 917 (Div. 2)".to_string(),
            kind: "CF".to_string(),
            phase: "FINISHED".to_string(),
            duration_seconds: 7200,
            start_time_seconds: 1703341200,
        };

        assert_eq!(contest.id, 1917);
        assert_eq!(division(&contest.name), Division::Div2);
    }

    #[test]
    fn test_problem_creation() {
        let problem = Problem {
            contest_id: 1917,
            index: "C".to_string(),
            name: "Watering an Array".to_string(),
            rating: Some(1700),
            tags: vec!["brute force".to_string(), "greedy".to_string()],
        };

        assert_eq!(problem.code(), "1917-C");
        assert_eq!(difficulty_bucket(problem.rating), Difficulty::Medium);
    }

    #[test]
    fn test_user_profile_creation() {
        let user = UserProfile {
            handle: "tourist".to_string(),
            rating: Some(3858),
            rank: Some("legendary grandmaster".to_string()),
            contribution: Some(0),
            max_rating: Some(4009),
            max_rank: Some("legendary grandmaster".to_string()),
            country: Some("Belarus".to_string()),
            organization: Some("ITMO University".to_string()),
        };

        assert_eq!(user.handle, "tourist");
        assert_eq!(rank_tier(user.rank.as_deref()), RankTier::LegendaryGrandmaster);
    }
}
