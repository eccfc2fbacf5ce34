use serde::Deserialize;

use crate::models::{Credentials, PlotLength, TitleType};
use crate::services::probe::ProbePlan;

/// Probe configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Free-text term for the search probe
    #[serde(default = "default_search_term")]
    pub omdb_search_term: String,

    /// Result page for the search probe; the provider defaults to 1
    #[serde(default)]
    pub omdb_search_page: Option<u32>,

    /// IMDb identifier for the identifier probe
    #[serde(default = "default_imdb_id")]
    pub omdb_imdb_id: String,

    /// Plot length for the identifier probe (`short` or `full`)
    #[serde(default)]
    pub omdb_plot: Option<PlotLength>,

    /// Exact title for the title probe
    #[serde(default = "default_title")]
    pub omdb_title: String,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_search_term() -> String {
    "Guardians of the Galaxy".to_string()
}

fn default_imdb_id() -> String {
    // Guardians of the Galaxy Vol. 2
    "tt3896198".to_string()
}

fn default_title() -> String {
    "Guardians of the Galaxy Vol. 2".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.omdb_api_key.clone())
    }

    /// The three reference probes, with any overrides applied
    pub fn probe_plan(&self) -> ProbePlan {
        ProbePlan {
            search_term: self.omdb_search_term.clone(),
            search_type: Some(TitleType::Movie),
            search_page: self.omdb_search_page,
            imdb_id: self.omdb_imdb_id.clone(),
            plot: self.omdb_plot,
            title: self.omdb_title.clone(),
        }
    }
}
