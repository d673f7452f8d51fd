use crate::Credentials;

pub const DEFAULT_LIST_IDS: [&str; 4] = [
    "2023175604594467083",
    "2023174944079647146",
    "2023171777426309170",
    "2023176436958314922",
];

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub list_ids: Vec<String>,
    pub max_results: u32,
    pub timeout_secs: u64,
    pub auth: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://api.twitter.com".to_string(),
            list_ids: DEFAULT_LIST_IDS.iter().map(|id| id.to_string()).collect(),
            max_results: 20,
            timeout_secs: 15,
            auth: Credentials::default(),
        }
    }
}
