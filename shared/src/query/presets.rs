//! Per-page engine configurations.
//!
//! Each function wires the generic engine to one list page: which fields the
//! search box scans, which dropdown filters exist, and which sort keys the
//! sort menu offers.

use crate::models::{contest::Contest, problem::Problem, user::UserProfile};
use crate::query::classify::{difficulty_bucket, division};
use crate::query::engine::{EngineConfig, FilterSpec, SortSpec};

/// Contests page: search by name or id, filter by division, sort by date or
/// by division label.
pub fn contests() -> EngineConfig<Contest> {
    EngineConfig::new()
        .search_field(|c: &Contest| c.name.clone())
        .search_field(|c: &Contest| c.id.to_string())
        .filter(
            "division",
            FilterSpec::label(|c: &Contest| division(&c.name).label().to_string()),
        )
        .sort_key(
            "date",
            SortSpec::numeric(|c: &Contest| c.start_time_seconds as f64),
        )
        .sort_key(
            "division",
            SortSpec::categorical(|c: &Contest| division(&c.name).label().to_string()),
        )
}

/// Problems page: search by problem code, name, or rating, filter by
/// difficulty bucket and tag, sort by rating.
pub fn problems() -> EngineConfig<Problem> {
    EngineConfig::new()
        .search_field(|p: &Problem| p.code())
        .search_field(|p: &Problem| p.name.clone())
        .search_field(|p: &Problem| p.rating.map(|r| r.to_string()).unwrap_or_default())
        .filter(
            "difficulty",
            FilterSpec::label(|p: &Problem| difficulty_bucket(p.rating).slug().to_string()),
        )
        .filter(
            "tag",
            FilterSpec::membership(|p: &Problem, tag| p.tags.iter().any(|t| t == tag)),
        )
        .sort_key(
            "rating",
            SortSpec::numeric(|p: &Problem| p.rating.unwrap_or(0) as f64),
        )
}

/// Profiles page: search by handle, organization, or country, filter by raw
/// rank string, sort by rating, handle, or contribution.
pub fn profiles() -> EngineConfig<UserProfile> {
    EngineConfig::new()
        .search_field(|u: &UserProfile| u.handle.clone())
        .search_field(|u: &UserProfile| u.organization.clone().unwrap_or_default())
        .search_field(|u: &UserProfile| u.country.clone().unwrap_or_default())
        .filter(
            "rank",
            // Unranked profiles never match a specific rank selection
            FilterSpec::membership(|u: &UserProfile, selected| {
                u.rank
                    .as_deref()
                    .map(|r| r.to_lowercase() == selected.to_lowercase())
                    .unwrap_or(false)
            }),
        )
        .sort_key(
            "rating",
            SortSpec::numeric(|u: &UserProfile| u.rating.unwrap_or(0) as f64),
        )
        .sort_key(
            "alphabetical",
            SortSpec::text(|u: &UserProfile| u.handle.clone()),
        )
        .sort_key(
            "contribution",
            SortSpec::numeric(|u: &UserProfile| u.contribution.unwrap_or(0) as f64),
        )
}

/// Distinct tags across the loaded problems, sorted, for the tag dropdown
pub fn unique_tags(problems: &[Problem]) -> Vec<String> {
    let mut tags: Vec<String> = problems
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Distinct lowercased rank strings across the loaded users, sorted, for the
/// rank dropdown
pub fn unique_ranks(users: &[UserProfile]) -> Vec<String> {
    let mut ranks: Vec<String> = users
        .iter()
        .filter_map(|u| u.rank.as_ref().map(|r| r.to_lowercase()))
        .collect();
    ranks.sort();
    ranks.dedup();
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::engine::{apply_query, Query, SortDirection, ALL};
    use pretty_assertions::assert_eq;
    use test_log::test;

    fn contest(id: i64, name: &str, start: i64) -> Contest {
        Contest {
            id,
            name: name.to_string(),
            kind: "CF".to_string(),
            phase: "FINISHED".to_string(),
            duration_seconds: 7200,
            start_time_seconds: start,
        }
    }

    fn contest_fixtures() -> Vec<Contest> {
        vec![
            contest(1916, "Good Bye 2023", 1703515500),
            contest(1917, "Codeforces Round 917 (Div. 2)", 1703341200),
            contest(1915, "Codeforces Round 918 (Div. 4)", 1703253900),
            contest(1919, "Codeforces Round 919 (Div. 1)", 1703857500),
        ]
    }

    fn contest_ids(view: &[Contest]) -> Vec<i64> {
        view.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_contests_default_query_sorts_newest_first() {
        let query = Query::new("date");
        let view = apply_query(&contest_fixtures(), &query, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1919, 1916, 1917, 1915]);
    }

    #[test]
    fn test_contests_search_matches_id_and_name() {
        let by_id = Query::new("date").with_search("1917");
        let view = apply_query(&contest_fixtures(), &by_id, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1917]);

        let by_name = Query::new("date").with_search("good bye");
        let view = apply_query(&contest_fixtures(), &by_name, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1916]);
    }

    #[test]
    fn test_contests_division_filter() {
        let query = Query::new("date").with_filter("division", "Div. 2");
        let view = apply_query(&contest_fixtures(), &query, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1917]);

        let all = Query::new("date").with_filter("division", ALL);
        let view = apply_query(&contest_fixtures(), &all, &contests()).unwrap();
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_division_sort_direction_is_inverted() {
        // Descending runs the plain A→Z label comparison; this mirrors how
        // the contests page has always ordered divisions and is pinned here
        // so nobody "fixes" it silently
        let desc = Query::new("division").with_direction(SortDirection::Descending);
        let view = apply_query(&contest_fixtures(), &desc, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1919, 1917, 1915, 1916]);

        let asc = Query::new("division").with_direction(SortDirection::Ascending);
        let view = apply_query(&contest_fixtures(), &asc, &contests()).unwrap();
        assert_eq!(contest_ids(&view), vec![1916, 1915, 1917, 1919]);
    }

    fn problem(contest_id: i64, index: &str, name: &str, rating: Option<u32>, tags: &[&str]) -> Problem {
        Problem {
            contest_id,
            index: index.to_string(),
            name: name.to_string(),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn problem_fixtures() -> Vec<Problem> {
        vec![
            problem(1917, "A", "Least Product", Some(800), &["math"]),
            problem(1917, "C", "Watering an Array", Some(1700), &["brute force", "greedy"]),
            problem(1917, "E2", "Construct Matrix (hard version)", Some(2900), &["math"]),
            problem(1, "A", "Theatre Square", None, &["math"]),
        ]
    }

    #[test]
    fn test_problems_search_matches_code_name_and_rating() {
        let cfg = problems();
        let fixtures = problem_fixtures();

        let by_code = Query::new("rating").with_search("1917-c");
        let view = apply_query(&fixtures, &by_code, &cfg).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].index, "C");

        // "1700" hits the rating of 1917-C
        let by_rating = Query::new("rating").with_search("1700");
        let view = apply_query(&fixtures, &by_rating, &cfg).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].rating, Some(1700));
    }

    #[test]
    fn test_problems_difficulty_and_tag_filters_intersect() {
        let cfg = problems();
        let query = Query::new("rating")
            .with_filter("difficulty", "very-hard")
            .with_filter("tag", "math");
        let view = apply_query(&problem_fixtures(), &query, &cfg).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].index, "E2");
    }

    #[test]
    fn test_problems_unrated_sort_as_zero() {
        let cfg = problems();
        let asc = Query::new("rating").with_direction(SortDirection::Ascending);
        let view = apply_query(&problem_fixtures(), &asc, &cfg).unwrap();
        assert_eq!(view[0].name, "Theatre Square");
        assert_eq!(view.last().unwrap().index, "E2");
    }

    fn user(handle: &str, rating: Option<u32>, rank: Option<&str>, contribution: Option<i32>) -> UserProfile {
        UserProfile {
            handle: handle.to_string(),
            rating,
            rank: rank.map(|r| r.to_string()),
            contribution,
            max_rating: rating,
            max_rank: rank.map(|r| r.to_string()),
            country: Some("Poland".to_string()),
            organization: None,
        }
    }

    fn user_fixtures() -> Vec<UserProfile> {
        vec![
            user("tourist", Some(3858), Some("legendary grandmaster"), Some(0)),
            user("Errichto", Some(3156), Some("grandmaster"), Some(189)),
            user("casual_solver", Some(1450), Some("Specialist"), Some(-12)),
            user("lurker", None, None, None),
        ]
    }

    #[test]
    fn test_profiles_rank_filter_is_case_insensitive_and_skips_unranked() {
        let cfg = profiles();
        let query = Query::new("rating").with_filter("rank", "specialist");
        let view = apply_query(&user_fixtures(), &query, &cfg).unwrap();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].handle, "casual_solver");
    }

    #[test]
    fn test_profiles_search_scans_country() {
        let cfg = profiles();
        let query = Query::new("rating").with_search("poland");
        let view = apply_query(&user_fixtures(), &query, &cfg).unwrap();
        assert_eq!(view.len(), 4);
    }

    #[test]
    fn test_profiles_contribution_sort_handles_negatives() {
        let cfg = profiles();
        let desc = Query::new("contribution");
        let view = apply_query(&user_fixtures(), &desc, &cfg).unwrap();
        let handles: Vec<&str> = view.iter().map(|u| u.handle.as_str()).collect();
        // missing contribution counts as 0, tied with tourist's explicit 0
        assert_eq!(handles, vec!["Errichto", "tourist", "lurker", "casual_solver"]);
    }

    #[test]
    fn test_profiles_alphabetical_sort_ignores_case() {
        let cfg = profiles();
        let asc = Query::new("alphabetical").with_direction(SortDirection::Ascending);
        let view = apply_query(&user_fixtures(), &asc, &cfg).unwrap();
        let handles: Vec<&str> = view.iter().map(|u| u.handle.as_str()).collect();
        assert_eq!(handles, vec!["casual_solver", "Errichto", "lurker", "tourist"]);
    }

    #[test]
    fn test_unique_tags_sorted_and_deduplicated() {
        let tags = unique_tags(&problem_fixtures());
        assert_eq!(tags, vec!["brute force", "greedy", "math"]);
    }

    #[test]
    fn test_unique_ranks_lowercased() {
        let ranks = unique_ranks(&user_fixtures());
        assert_eq!(
            ranks,
            vec!["grandmaster", "legendary grandmaster", "specialist"]
        );
    }
}
