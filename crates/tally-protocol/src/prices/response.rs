use time::OffsetDateTime;

use tally_model::{model, variant_union};

use crate::prices::types::{
    BulkConfig, BulkWithFiltersConfig, CumulativeGroupedBulkConfig, EventOutputConfig,
    GroupedAllocationConfig, GroupedTieredConfig, MatrixConfig, MinimumConfig, PackageConfig,
    PercentConfig, ThresholdTotalAmountConfig, TieredConfig, UnitConfig,
};
use crate::shared::{
    BillableMetricTiny, BillingCycleConfiguration, Cadence, ItemSlim, Metadata,
    PaginationMetadata, PriceType,
};

// Every returned price shares these fields and differs only by its tag and
// configuration object.
macro_rules! price_variant {
    (
        $(#[$meta:meta])*
        $name:ident = $tag:literal {
            $getter:ident / $setter:ident : $config:ty = $wire:literal;
        }
    ) => {
        model! {
            $(#[$meta])*
            pub struct $name ["model_type" = $tag] {
                required id / set_id: String = "id";
                required name / set_name: String = "name";
                required cadence / set_cadence: Cadence = "cadence";
                required currency / set_currency: String = "currency";
                required created_at / set_created_at: OffsetDateTime = "created_at";
                required item / set_item: ItemSlim = "item";
                nullable billable_metric / set_billable_metric: BillableMetricTiny = "billable_metric";
                required billing_cycle_configuration / set_billing_cycle_configuration: BillingCycleConfiguration = "billing_cycle_configuration";
                nullable conversion_rate / set_conversion_rate: f64 = "conversion_rate";
                nullable external_price_id / set_external_price_id: String = "external_price_id";
                nullable fixed_price_quantity / set_fixed_price_quantity: f64 = "fixed_price_quantity";
                nullable maximum_amount / set_maximum_amount: String = "maximum_amount";
                nullable minimum_amount / set_minimum_amount: String = "minimum_amount";
                required metadata / set_metadata: Metadata = "metadata";
                /// Phase of the plan this price belongs to, if phased.
                nullable plan_phase_order / set_plan_phase_order: i64 = "plan_phase_order";
                required price_type / set_price_type: PriceType = "price_type";
                nullable replaces_price_id / set_replaces_price_id: String = "replaces_price_id";
                required $getter / $setter: $config = $wire;
            }
        }
    };
}

price_variant! {
    UnitPrice = "unit" {
        unit_config / set_unit_config: UnitConfig = "unit_config";
    }
}

price_variant! {
    PackagePrice = "package" {
        package_config / set_package_config: PackageConfig = "package_config";
    }
}

price_variant! {
    MatrixPrice = "matrix" {
        matrix_config / set_matrix_config: MatrixConfig = "matrix_config";
    }
}

price_variant! {
    TieredPrice = "tiered" {
        tiered_config / set_tiered_config: TieredConfig = "tiered_config";
    }
}

price_variant! {
    BulkPrice = "bulk" {
        bulk_config / set_bulk_config: BulkConfig = "bulk_config";
    }
}

price_variant! {
    BulkWithFiltersPrice = "bulk_with_filters" {
        bulk_with_filters_config / set_bulk_with_filters_config: BulkWithFiltersConfig = "bulk_with_filters_config";
    }
}

price_variant! {
    ThresholdTotalAmountPrice = "threshold_total_amount" {
        threshold_total_amount_config / set_threshold_total_amount_config: ThresholdTotalAmountConfig = "threshold_total_amount_config";
    }
}

price_variant! {
    GroupedAllocationPrice = "grouped_allocation" {
        grouped_allocation_config / set_grouped_allocation_config: GroupedAllocationConfig = "grouped_allocation_config";
    }
}

price_variant! {
    GroupedTieredPrice = "grouped_tiered" {
        grouped_tiered_config / set_grouped_tiered_config: GroupedTieredConfig = "grouped_tiered_config";
    }
}

price_variant! {
    /// Charges at least `minimum_amount` per billing period.
    MinimumPrice = "minimum" {
        minimum_config / set_minimum_config: MinimumConfig = "minimum_config";
    }
}

price_variant! {
    PercentPrice = "percent" {
        percent_config / set_percent_config: PercentConfig = "percent_config";
    }
}

price_variant! {
    EventOutputPrice = "event_output" {
        event_output_config / set_event_output_config: EventOutputConfig = "event_output_config";
    }
}

price_variant! {
    CumulativeGroupedBulkPrice = "cumulative_grouped_bulk" {
        cumulative_grouped_bulk_config / set_cumulative_grouped_bulk_config: CumulativeGroupedBulkConfig = "cumulative_grouped_bulk_config";
    }
}

variant_union! {
    /// A price as returned by the API, selected by `model_type`.
    pub enum Price ["model_type"] {
        Unit(UnitPrice),
        Package(PackagePrice),
        Matrix(MatrixPrice),
        Tiered(TieredPrice),
        Bulk(BulkPrice),
        BulkWithFilters(BulkWithFiltersPrice),
        ThresholdTotalAmount(ThresholdTotalAmountPrice),
        GroupedAllocation(GroupedAllocationPrice),
        GroupedTiered(GroupedTieredPrice),
        Minimum(MinimumPrice),
        Percent(PercentPrice),
        EventOutput(EventOutputPrice),
        CumulativeGroupedBulk(CumulativeGroupedBulkPrice),
    }
}

model! {
    pub struct PricePage {
        required data / set_data: Vec<Price> = "data";
        required pagination_metadata / set_pagination_metadata: PaginationMetadata = "pagination_metadata";
    }
}
