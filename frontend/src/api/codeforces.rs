use crate::api::api_url;
use crate::api::cache::RequestCache;
use gloo::console::log;
use gloo_net::http::Request;
use serde::Deserialize;
use shared::{Contest, Problem, UserProfile};
use std::sync::LazyLock;

/// The list pages cap how much they render; the API returns thousands of
/// rows and the engine is meant for small in-memory collections.
const CONTEST_LIMIT: usize = 100;
const PROBLEM_LIMIT: usize = 150;
const USER_LIMIT: usize = 200;

static API_CACHE: LazyLock<RequestCache> = LazyLock::new(RequestCache::new_default);

/// Standard Codeforces response envelope
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: String,
    comment: Option<String>,
    result: Option<T>,
}

#[derive(Debug, Deserialize)]
struct ProblemsetResult {
    problems: Vec<Problem>,
}

async fn fetch_body(url: String) -> Result<String, String> {
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    resp.text().await.map_err(|e| e.to_string())
}

async fn get_result<T: for<'de> Deserialize<'de>>(path: &str) -> Result<T, String> {
    let url = api_url(path);
    let key = url.clone();
    let body = API_CACHE.get_or_fetch(&key, move || fetch_body(url)).await?;

    let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| e.to_string())?;
    if envelope.status != "OK" {
        return Err(envelope
            .comment
            .unwrap_or_else(|| "Codeforces API error".to_string()));
    }
    envelope
        .result
        .ok_or_else(|| "Codeforces API returned no result".to_string())
}

/// Finished contests, newest-first as the API returns them, capped at 100
pub async fn fetch_finished_contests() -> Result<Vec<Contest>, String> {
    let contests: Vec<Contest> = get_result("/contest.list").await?;
    let finished: Vec<Contest> = contests
        .into_iter()
        .filter(|c| c.is_finished())
        .take(CONTEST_LIMIT)
        .collect();
    log!("Loaded", finished.len(), "finished contests");
    Ok(finished)
}

/// Rated problems from the problemset, capped at 150
pub async fn fetch_rated_problems() -> Result<Vec<Problem>, String> {
    let result: ProblemsetResult = get_result("/problemset.problems").await?;
    let rated: Vec<Problem> = result
        .problems
        .into_iter()
        .filter(|p| p.rating.is_some())
        .take(PROBLEM_LIMIT)
        .collect();
    log!("Loaded", rated.len(), "rated problems");
    Ok(rated)
}

/// Active rated users, capped at the top 200
pub async fn fetch_active_users() -> Result<Vec<UserProfile>, String> {
    let users: Vec<UserProfile> = get_result("/user.ratedList?activeOnly=true").await?;
    let rated: Vec<UserProfile> = users
        .into_iter()
        .filter(|u| u.rating.is_some() && u.rank.is_some())
        .take(USER_LIMIT)
        .collect();
    log!("Loaded", rated.len(), "rated users");
    Ok(rated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_ok_decodes_result() {
        let body = r#"{"status":"OK","result":[{"id":1,"name":"Round","type":"CF","phase":"FINISHED","durationSeconds":7200,"startTimeSeconds":100}]}"#;
        let envelope: Envelope<Vec<Contest>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "OK");
        assert_eq!(envelope.result.unwrap().len(), 1);
    }

    #[test]
    fn test_envelope_failed_carries_comment() {
        let body = r#"{"status":"FAILED","comment":"contestId: Contest with id 0 not found"}"#;
        let envelope: Envelope<Vec<Contest>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "FAILED");
        assert!(envelope.comment.unwrap().contains("not found"));
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_problemset_result_shape() {
        let body = r#"{"problems":[{"contestId":1917,"index":"A","name":"Least Product","rating":800,"tags":["math"]}],"problemStatistics":[]}"#;
        let result: ProblemsetResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.problems.len(), 1);
    }
}
