pub mod request;
pub mod response;
pub mod types;

pub use request::CustomerCreateParams;
pub use response::{Customer, CustomerPage};
pub use types::*;
