use std::io::Write;

use crate::{
    error::{OmdbError, OmdbResult},
    models::{PlotLength, Query, TitleType},
    services::MovieLookup,
};

/// The three reference lookups issued on every run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePlan {
    pub search_term: String,
    pub search_type: Option<TitleType>,
    pub search_page: Option<u32>,
    pub imdb_id: String,
    pub plot: Option<PlotLength>,
    pub title: String,
}

impl Default for ProbePlan {
    fn default() -> Self {
        Self {
            search_term: "Guardians of the Galaxy".to_string(),
            search_type: Some(TitleType::Movie),
            search_page: None,
            imdb_id: "tt3896198".to_string(),
            plot: None,
            title: "Guardians of the Galaxy Vol. 2".to_string(),
        }
    }
}

/// A single report section: heading line plus the query behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub heading: String,
    pub query: Query,
}

impl ProbePlan {
    /// Probes in the order they are run: search, identifier, title
    pub fn probes(&self) -> Vec<Probe> {
        vec![
            Probe {
                heading: format!("Testing OMDB API search for: {}", self.search_term),
                query: Query::Search {
                    term: self.search_term.clone(),
                    type_filter: self.search_type,
                    page: self.search_page,
                },
            },
            Probe {
                heading: format!("Testing OMDB API for specific movie: {}", self.imdb_id),
                query: Query::ById {
                    imdb_id: self.imdb_id.clone(),
                    plot: self.plot,
                },
            },
            Probe {
                heading: format!(
                    "Testing OMDB API for specific movie title: {}",
                    self.title
                ),
                query: Query::by_title(self.title.clone()),
            },
        ]
    }
}

/// Runs every probe in order, writing URL and pretty-printed body for each.
///
/// Stops at the first failure; probes after it are not attempted. Returns the
/// number of sections written.
pub async fn run_probes<A, W>(api: &A, plan: &ProbePlan, out: &mut W) -> OmdbResult<usize>
where
    A: MovieLookup + ?Sized,
    W: Write,
{
    let mut completed = 0;

    for probe in plan.probes() {
        if completed > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", probe.heading)?;

        // The printed URL is the one sent.
        let url = api.build_url(&probe.query)?;
        writeln!(out, "URL: {}", url)?;

        let body = api.send(&probe.query, url).await.map_err(|e| {
            tracing::error!(error = %e, query_kind = probe.query.kind(), "Probe failed");
            e
        })?;

        // Two-space indent, keys in provider order
        serde_json::to_writer_pretty(&mut *out, &body)
            .map_err(|e| OmdbError::Output(e.into()))?;
        writeln!(out)?;
        out.flush()?;

        completed += 1;
    }

    tracing::info!(probes = completed, "All probes completed");

    Ok(completed)
}
