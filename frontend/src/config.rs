pub struct Config;

impl Config {
    /// Base URL of the public contest-data API.
    ///
    /// Kept as a single override point so tests and a future self-hosted
    /// mirror can swap the host without touching the api modules.
    pub fn api_base_url() -> String {
        "https://codeforces.com/api".to_string()
    }
}
