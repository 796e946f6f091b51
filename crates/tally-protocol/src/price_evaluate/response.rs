use tally_model::model;

use crate::price_evaluate::types::EvaluatePriceGroup;

model! {
    pub struct PriceEvaluateResponse {
        required data / set_data: Vec<EvaluatePriceGroup> = "data";
    }
}
