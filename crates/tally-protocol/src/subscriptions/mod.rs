pub mod request;
pub mod types;

pub use request::{SubscriptionPriceIntervalsParams, SubscriptionPriceIntervalsRequest};
pub use types::*;
