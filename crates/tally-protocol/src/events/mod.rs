pub mod request;
pub mod response;
pub mod types;

pub use request::{EventIngestBody, EventIngestQuery, EventIngestRequest};
pub use response::{EventIngestResponse, IngestDebug, ValidationFailed};
pub use types::*;
