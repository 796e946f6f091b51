use time::OffsetDateTime;

use tally_model::{model, variant_union};

use crate::prices::NewPrice;

model! {
    pub struct PriceIntervalById {
        required start_date / set_start_date: OffsetDateTime = "start_date";
        required price_id / set_price_id: String = "price_id";
        nullable end_date / set_end_date: OffsetDateTime = "end_date";
    }
}

model! {
    pub struct PriceIntervalByExternalId {
        required start_date / set_start_date: OffsetDateTime = "start_date";
        required external_price_id / set_external_price_id: String = "external_price_id";
        nullable end_date / set_end_date: OffsetDateTime = "end_date";
    }
}

model! {
    pub struct PriceIntervalInline {
        required start_date / set_start_date: OffsetDateTime = "start_date";
        required price / set_price: NewPrice = "price";
        nullable end_date / set_end_date: OffsetDateTime = "end_date";
    }
}

variant_union! {
    /// A price interval to add; the variant is inferred from which price
    /// reference is present.
    pub enum PriceIntervalAdd {
        ById(PriceIntervalById),
        ByExternalId(PriceIntervalByExternalId),
        Inline(PriceIntervalInline),
    }
}
