/// Number of answer options offered per quiz question.
pub const DEFAULT_OPTION_COUNT: usize = 4;
/// Random distractor draws attempted before falling back to unused names.
pub const MAX_DISTRACTOR_DRAWS: usize = 64;
/// Page global an embedding page may set to override [`ExplorerConfig`] fields.
pub const CONFIG_GLOBAL: &str = "periodicConfig";

/// Runtime settings of the explorer front-end.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// URL the element dataset is fetched from when the page provides none.
    pub dataset_url: String,
    /// Name of a page global holding the dataset, checked before fetching.
    pub dataset_global: String,
    pub option_count: usize,
    pub max_distractor_draws: usize,
    /// `log` level filter name, e.g. `info` or `debug`.
    pub log_level: String,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset_url: "elements.json".to_string(),
            dataset_global: "elements".to_string(),
            option_count: DEFAULT_OPTION_COUNT,
            max_distractor_draws: MAX_DISTRACTOR_DRAWS,
            log_level: "info".to_string(),
        }
    }
}

impl ExplorerConfig {
    /// Reads overrides from JSON; fields that are absent keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Defaults when the page supplied nothing, otherwise the parsed overrides.
    pub fn from_overrides(json: Option<&str>) -> Result<Self, serde_json::Error> {
        json.map_or_else(|| Ok(Self::default()), Self::from_json_str)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
