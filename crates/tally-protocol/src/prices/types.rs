use tally_model::model;

model! {
    pub struct UnitConfig {
        /// Rate per unit of usage.
        required unit_amount / set_unit_amount: String = "unit_amount";
    }
}

model! {
    pub struct PackageConfig {
        required package_amount / set_package_amount: String = "package_amount";
        /// Units per package; usage is rounded up to whole packages.
        required package_size / set_package_size: i64 = "package_size";
    }
}

model! {
    pub struct MatrixValue {
        /// One entry per dimension, `null` matching any value.
        required dimension_values / set_dimension_values: Vec<Option<String>> = "dimension_values";
        required unit_amount / set_unit_amount: String = "unit_amount";
    }
}

model! {
    pub struct MatrixConfig {
        required default_unit_amount / set_default_unit_amount: String = "default_unit_amount";
        required dimensions / set_dimensions: Vec<Option<String>> = "dimensions";
        required matrix_values / set_matrix_values: Vec<MatrixValue> = "matrix_values";
    }
}

model! {
    pub struct Tier {
        required first_unit / set_first_unit: f64 = "first_unit";
        /// `null` for the open-ended last tier.
        nullable last_unit / set_last_unit: f64 = "last_unit";
        required unit_amount / set_unit_amount: String = "unit_amount";
    }
}

model! {
    pub struct TieredConfig {
        required tiers / set_tiers: Vec<Tier> = "tiers";
    }
}

model! {
    pub struct BulkTier {
        required unit_amount / set_unit_amount: String = "unit_amount";
        nullable maximum_units / set_maximum_units: f64 = "maximum_units";
    }
}

model! {
    /// All usage is billed at the rate of the tier the total falls into.
    pub struct BulkConfig {
        required tiers / set_tiers: Vec<BulkTier> = "tiers";
    }
}

model! {
    pub struct BulkFilter {
        required property_key / set_property_key: String = "property_key";
        required property_value / set_property_value: String = "property_value";
    }
}

model! {
    pub struct BulkFilterTier {
        required unit_amount / set_unit_amount: String = "unit_amount";
        nullable tier_lower_bound / set_tier_lower_bound: String = "tier_lower_bound";
    }
}

model! {
    pub struct BulkWithFiltersConfig {
        required filters / set_filters: Vec<BulkFilter> = "filters";
        required tiers / set_tiers: Vec<BulkFilterTier> = "tiers";
    }
}

model! {
    pub struct ConsumptionTableEntry {
        required threshold / set_threshold: String = "threshold";
        required total_amount / set_total_amount: String = "total_amount";
    }
}

model! {
    pub struct ThresholdTotalAmountConfig {
        required consumption_table / set_consumption_table: Vec<ConsumptionTableEntry> = "consumption_table";
        nullable prorate / set_prorate: bool = "prorate";
    }
}

model! {
    pub struct GroupedAllocationConfig {
        /// Usage allowance per group before overage applies.
        required allocation / set_allocation: String = "allocation";
        required grouping_key / set_grouping_key: String = "grouping_key";
        required overage_unit_rate / set_overage_unit_rate: String = "overage_unit_rate";
    }
}

model! {
    pub struct GroupedTier {
        required tier_lower_bound / set_tier_lower_bound: String = "tier_lower_bound";
        required unit_amount / set_unit_amount: String = "unit_amount";
    }
}

model! {
    pub struct GroupedTieredConfig {
        required grouping_key / set_grouping_key: String = "grouping_key";
        required tiers / set_tiers: Vec<GroupedTier> = "tiers";
    }
}

model! {
    pub struct MinimumConfig {
        required minimum_amount / set_minimum_amount: String = "minimum_amount";
        optional prorated / set_prorated: bool = "prorated";
    }
}

model! {
    pub struct PercentConfig {
        /// Fraction of the subtotal, e.g. `0.1` for ten percent.
        required percent / set_percent: f64 = "percent";
    }
}

model! {
    pub struct EventOutputConfig {
        required unit_rating_key / set_unit_rating_key: String = "unit_rating_key";
        nullable grouping_key / set_grouping_key: String = "grouping_key";
        nullable default_unit_rate / set_default_unit_rate: String = "default_unit_rate";
    }
}

model! {
    pub struct CumulativeGroupedBulkDimension {
        required grouping_key / set_grouping_key: String = "grouping_key";
        required tier_lower_bound / set_tier_lower_bound: String = "tier_lower_bound";
        required unit_amount / set_unit_amount: String = "unit_amount";
    }
}

model! {
    pub struct CumulativeGroupedBulkConfig {
        required dimension_values / set_dimension_values: Vec<CumulativeGroupedBulkDimension> = "dimension_values";
        required group / set_group: String = "group";
    }
}
