use std::collections::BTreeMap;

use serde_json::Value;
use time::OffsetDateTime;

use tally_model::model;

model! {
    /// A usage event; exactly one of the two customer ids should be set.
    pub struct Event {
        required event_name / set_event_name: String = "event_name";
        /// Deduplication key, unique per event.
        required idempotency_key / set_idempotency_key: String = "idempotency_key";
        required properties / set_properties: BTreeMap<String, Value> = "properties";
        required timestamp / set_timestamp: OffsetDateTime = "timestamp";
        nullable customer_id / set_customer_id: String = "customer_id";
        nullable external_customer_id / set_external_customer_id: String = "external_customer_id";
    }
}
