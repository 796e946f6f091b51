use std::collections::BTreeMap;

use tally_model::{model, open_enum};

open_enum! {
    /// How often a price is billed.
    pub enum CadenceKnown as Cadence {
        OneTime = "one_time",
        Monthly = "monthly",
        Quarterly = "quarterly",
        SemiAnnual = "semi_annual",
        Annual = "annual",
        Custom = "custom",
    }
}

open_enum! {
    pub enum PriceTypeKnown as PriceType {
        UsagePrice = "usage_price",
        FixedPrice = "fixed_price",
        CompositePrice = "composite_price",
    }
}

open_enum! {
    pub enum DurationUnitKnown as DurationUnit {
        Day = "day",
        Month = "month",
    }
}

open_enum! {
    /// External system invoices are synced to.
    pub enum PaymentProviderKnown as PaymentProvider {
        Quickbooks = "quickbooks",
        BillCom = "bill.com",
        StripeCharge = "stripe_charge",
        StripeInvoice = "stripe_invoice",
        Netsuite = "netsuite",
    }
}

/// User-defined key/value pairs as returned by the API.
pub type Metadata = BTreeMap<String, String>;

/// Metadata update; a `None` value deletes the key server-side.
pub type MetadataPatch = BTreeMap<String, Option<String>>;

model! {
    pub struct BillableMetricTiny {
        required id / set_id: String = "id";
    }
}

model! {
    pub struct ItemSlim {
        required id / set_id: String = "id";
        required name / set_name: String = "name";
    }
}

model! {
    pub struct BillingCycleConfiguration {
        required duration / set_duration: i64 = "duration";
        required duration_unit / set_duration_unit: DurationUnit = "duration_unit";
    }
}

model! {
    pub struct PaginationMetadata {
        required has_more / set_has_more: bool = "has_more";
        /// `null` on the last page.
        nullable next_cursor / set_next_cursor: String = "next_cursor";
    }
}
