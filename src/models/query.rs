use std::fmt::{self, Display};

use serde::Deserialize;

use crate::error::{OmdbError, OmdbResult};

/// Static OMDb API key, sent as the `apikey` query parameter on every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Value of the `type` filter accepted by the search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleType {
    Movie,
    Series,
    Episode,
}

impl TitleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TitleType::Movie => "movie",
            TitleType::Series => "series",
            TitleType::Episode => "episode",
        }
    }
}

/// Value of the `plot` parameter accepted by the identifier endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotLength {
    Short,
    Full,
}

impl PlotLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlotLength::Short => "short",
            PlotLength::Full => "full",
        }
    }
}

/// One OMDb request shape. Each variant selects which of `s`, `i` or `t` is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Free-text search (`s`), optionally narrowed by `type` and paginated by `page`
    Search {
        term: String,
        type_filter: Option<TitleType>,
        page: Option<u32>,
    },
    /// Lookup by provider identifier (`i`), e.g. "tt3896198"
    ById {
        imdb_id: String,
        plot: Option<PlotLength>,
    },
    /// Lookup by exact title (`t`)
    ByTitle { title: String },
}

impl Query {
    /// Search restricted to movies, as the reference probe issues it
    pub fn movie_search(term: impl Into<String>) -> Self {
        Query::Search {
            term: term.into(),
            type_filter: Some(TitleType::Movie),
            page: None,
        }
    }

    pub fn by_id(imdb_id: impl Into<String>) -> Self {
        Query::ById {
            imdb_id: imdb_id.into(),
            plot: None,
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Query::ByTitle {
            title: title.into(),
        }
    }

    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Query::Search { .. } => "search",
            Query::ById { .. } => "id",
            Query::ByTitle { .. } => "title",
        }
    }

    /// The user-supplied value carried by the variant
    pub fn value(&self) -> &str {
        match self {
            Query::Search { term, .. } => term,
            Query::ById { imdb_id, .. } => imdb_id,
            Query::ByTitle { title } => title,
        }
    }

    pub fn validate(&self) -> OmdbResult<()> {
        if self.value().trim().is_empty() {
            return Err(OmdbError::InvalidInput(format!(
                "{} query value cannot be empty",
                self.kind()
            )));
        }
        Ok(())
    }

    /// Query parameters for this variant, excluding `apikey`, in wire order
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(3);
        match self {
            Query::Search {
                term,
                type_filter,
                page,
            } => {
                params.push(("s", term.clone()));
                if let Some(type_filter) = type_filter {
                    params.push(("type", type_filter.as_str().to_string()));
                }
                if let Some(page) = page {
                    params.push(("page", page.to_string()));
                }
            }
            Query::ById { imdb_id, plot } => {
                params.push(("i", imdb_id.clone()));
                if let Some(plot) = plot {
                    params.push(("plot", plot.as_str().to_string()));
                }
            }
            Query::ByTitle { title } => {
                params.push(("t", title.clone()));
            }
        }
        params
    }
}

impl Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.value())
    }
}
