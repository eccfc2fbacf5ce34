pub mod query;
pub mod response;

pub use query::{Credentials, PlotLength, Query, TitleType};
pub use response::{Envelope, ProviderStatus};
