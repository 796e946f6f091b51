use tally_model::{model, variant_union};

use crate::prices::types::{
    BulkConfig, BulkWithFiltersConfig, GroupedAllocationConfig, MinimumConfig, PackageConfig,
    PercentConfig, TieredConfig, UnitConfig,
};
use crate::shared::{BillingCycleConfiguration, Cadence, MetadataPatch};

macro_rules! new_price_variant {
    (
        $(#[$meta:meta])*
        $name:ident = $tag:literal {
            $getter:ident / $setter:ident : $config:ty = $wire:literal;
        }
    ) => {
        model! {
            $(#[$meta])*
            pub struct $name ["model_type" = $tag] {
                required cadence / set_cadence: Cadence = "cadence";
                required currency / set_currency: String = "currency";
                required item_id / set_item_id: String = "item_id";
                required name / set_name: String = "name";
                required $getter / $setter: $config = $wire;
                nullable billable_metric_id / set_billable_metric_id: String = "billable_metric_id";
                /// Bill in advance instead of in arrears; fixed fees only.
                nullable billed_in_advance / set_billed_in_advance: bool = "billed_in_advance";
                nullable billing_cycle_configuration / set_billing_cycle_configuration: BillingCycleConfiguration = "billing_cycle_configuration";
                nullable conversion_rate / set_conversion_rate: f64 = "conversion_rate";
                nullable external_price_id / set_external_price_id: String = "external_price_id";
                nullable fixed_price_quantity / set_fixed_price_quantity: f64 = "fixed_price_quantity";
                nullable invoice_grouping_key / set_invoice_grouping_key: String = "invoice_grouping_key";
                nullable metadata / set_metadata: MetadataPatch = "metadata";
            }
        }
    };
}

new_price_variant! {
    NewUnitPrice = "unit" {
        unit_config / set_unit_config: UnitConfig = "unit_config";
    }
}

new_price_variant! {
    NewPackagePrice = "package" {
        package_config / set_package_config: PackageConfig = "package_config";
    }
}

new_price_variant! {
    NewTieredPrice = "tiered" {
        tiered_config / set_tiered_config: TieredConfig = "tiered_config";
    }
}

new_price_variant! {
    NewBulkPrice = "bulk" {
        bulk_config / set_bulk_config: BulkConfig = "bulk_config";
    }
}

new_price_variant! {
    NewBulkWithFiltersPrice = "bulk_with_filters" {
        bulk_with_filters_config / set_bulk_with_filters_config: BulkWithFiltersConfig = "bulk_with_filters_config";
    }
}

new_price_variant! {
    NewGroupedAllocationPrice = "grouped_allocation" {
        grouped_allocation_config / set_grouped_allocation_config: GroupedAllocationConfig = "grouped_allocation_config";
    }
}

new_price_variant! {
    NewMinimumPrice = "minimum" {
        minimum_config / set_minimum_config: MinimumConfig = "minimum_config";
    }
}

new_price_variant! {
    NewPercentPrice = "percent" {
        percent_config / set_percent_config: PercentConfig = "percent_config";
    }
}

variant_union! {
    /// Body of a create-price call, also used for inline prices elsewhere.
    pub enum NewPrice ["model_type"] {
        Unit(NewUnitPrice),
        Package(NewPackagePrice),
        Tiered(NewTieredPrice),
        Bulk(NewBulkPrice),
        BulkWithFilters(NewBulkWithFiltersPrice),
        GroupedAllocation(NewGroupedAllocationPrice),
        Minimum(NewMinimumPrice),
        Percent(NewPercentPrice),
    }
}

pub type PriceCreateParams = NewPrice;

model! {
    pub struct PriceUpdateParams {
        nullable metadata / set_metadata: MetadataPatch = "metadata";
    }
}

model! {
    pub struct PriceListParams {
        nullable cursor / set_cursor: String = "cursor";
        /// Page size; the server default applies when unset.
        optional limit / set_limit: i64 = "limit";
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceUpdateRequest {
    pub price_id: String,
    pub body: PriceUpdateParams,
}
