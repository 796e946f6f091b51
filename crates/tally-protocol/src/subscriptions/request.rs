use tally_model::model;

use crate::subscriptions::types::PriceIntervalAdd;

model! {
    pub struct SubscriptionPriceIntervalsParams {
        optional add / set_add: Vec<PriceIntervalAdd> = "add";
        nullable allow_invoice_credit_or_void / set_allow_invoice_credit_or_void: bool = "allow_invoice_credit_or_void";
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPriceIntervalsRequest {
    pub subscription_id: String,
    pub body: SubscriptionPriceIntervalsParams,
}
