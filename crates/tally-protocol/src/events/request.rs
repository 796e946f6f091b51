use serde_json::Value;

use tally_model::{Model, model};

use crate::events::types::Event;

model! {
    pub struct EventIngestQuery {
        nullable backfill_id / set_backfill_id: String = "backfill_id";
        optional debug / set_debug: bool = "debug";
    }
}

impl EventIngestQuery {
    /// Query-string pairs for the set, non-null parameters.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.raw()
            .iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(text) => Some((key.clone(), text.clone())),
                other => Some((key.clone(), other.to_string())),
            })
            .collect()
    }
}

model! {
    pub struct EventIngestBody {
        required events / set_events: Vec<Event> = "events";
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventIngestRequest {
    pub query: EventIngestQuery,
    pub body: EventIngestBody,
}
