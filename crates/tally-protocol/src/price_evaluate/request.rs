use time::OffsetDateTime;

use tally_model::model;

model! {
    pub struct PriceEvaluateParams {
        required timeframe_start / set_timeframe_start: OffsetDateTime = "timeframe_start";
        /// Exclusive upper bound of the evaluated window.
        required timeframe_end / set_timeframe_end: OffsetDateTime = "timeframe_end";
        nullable customer_id / set_customer_id: String = "customer_id";
        nullable external_customer_id / set_external_customer_id: String = "external_customer_id";
        /// Event filter expression, e.g. `region = 'us'`.
        nullable filter / set_filter: String = "filter";
        optional grouping_keys / set_grouping_keys: Vec<String> = "grouping_keys";
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceEvaluateRequest {
    pub price_id: String,
    pub body: PriceEvaluateParams,
}
