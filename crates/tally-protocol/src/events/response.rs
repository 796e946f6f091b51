use tally_model::model;

model! {
    pub struct ValidationFailed {
        required idempotency_key / set_idempotency_key: String = "idempotency_key";
        required validation_errors / set_validation_errors: Vec<String> = "validation_errors";
    }
}

model! {
    /// Present only when the request asked for `debug=true`.
    pub struct IngestDebug {
        required duplicate / set_duplicate: Vec<String> = "duplicate";
        required ingested / set_ingested: Vec<String> = "ingested";
    }
}

model! {
    pub struct EventIngestResponse {
        required validation_failed / set_validation_failed: Vec<ValidationFailed> = "validation_failed";
        nullable debug / set_debug: IngestDebug = "debug";
    }
}
