pub mod request;
pub mod response;
pub mod types;

pub use request::{PriceEvaluateParams, PriceEvaluateRequest};
pub use response::PriceEvaluateResponse;
pub use types::*;
