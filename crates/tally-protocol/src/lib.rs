pub mod customers;
pub mod events;
pub mod price_evaluate;
pub mod prices;
pub mod shared;
pub mod subscriptions;
