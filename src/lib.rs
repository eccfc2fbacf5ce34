pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{OmdbError, OmdbResult};
pub use models::{Credentials, Query};
pub use services::{
    omdb::OmdbClient,
    probe::{run_probes, ProbePlan},
    MovieLookup,
};
