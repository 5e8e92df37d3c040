// Re-export all API modules
pub mod cache;
pub mod codeforces;

use crate::config::Config;

pub fn api_url(path: &str) -> String {
    format!("{}{}", Config::api_base_url(), path)
}
