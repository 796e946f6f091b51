pub mod request;
pub mod response;
pub mod types;

pub use request::{
    NewBulkPrice, NewBulkWithFiltersPrice, NewGroupedAllocationPrice, NewMinimumPrice,
    NewPackagePrice, NewPercentPrice, NewPrice, NewTieredPrice, NewUnitPrice, PriceCreateParams,
    PriceListParams, PriceUpdateParams, PriceUpdateRequest,
};
pub use response::{
    BulkPrice, BulkWithFiltersPrice, CumulativeGroupedBulkPrice, EventOutputPrice,
    GroupedAllocationPrice, GroupedTieredPrice, MatrixPrice, MinimumPrice, PackagePrice,
    PercentPrice, Price, PricePage, ThresholdTotalAmountPrice, TieredPrice, UnitPrice,
};
pub use types::*;
