use serde_json::{Value, json};
use tally_model::{Field, Union, Validate, ViolationKind, from_slice, to_vec};
use tally_protocol::prices::{NewPrice, Price, PriceListParams};

struct Case {
    tag: &'static str,
    config_key: &'static str,
    config: Value,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            tag: "unit",
            config_key: "unit_config",
            config: json!({"unit_amount": "0.25"}),
        },
        Case {
            tag: "package",
            config_key: "package_config",
            config: json!({"package_amount": "10.00", "package_size": 100}),
        },
        Case {
            tag: "matrix",
            config_key: "matrix_config",
            config: json!({
                "default_unit_amount": "0.10",
                "dimensions": ["region", null],
                "matrix_values": [
                    {"dimension_values": ["us", null], "unit_amount": "0.08"},
                    {"dimension_values": ["eu", "gpu"], "unit_amount": "0.12"}
                ]
            }),
        },
        Case {
            tag: "tiered",
            config_key: "tiered_config",
            config: json!({
                "tiers": [
                    {"first_unit": 0, "last_unit": 1000, "unit_amount": "0.05"},
                    {"first_unit": 1000, "last_unit": null, "unit_amount": "0.03"}
                ]
            }),
        },
        Case {
            tag: "bulk",
            config_key: "bulk_config",
            config: json!({
                "tiers": [
                    {"unit_amount": "0.04", "maximum_units": 500},
                    {"unit_amount": "0.02", "maximum_units": null}
                ]
            }),
        },
        Case {
            tag: "bulk_with_filters",
            config_key: "bulk_with_filters_config",
            config: json!({
                "filters": [{"property_key": "region", "property_value": "us"}],
                "tiers": [
                    {"unit_amount": "0.03", "tier_lower_bound": null},
                    {"unit_amount": "0.01", "tier_lower_bound": "10000"}
                ]
            }),
        },
        Case {
            tag: "threshold_total_amount",
            config_key: "threshold_total_amount_config",
            config: json!({
                "consumption_table": [
                    {"threshold": "100", "total_amount": "9.00"},
                    {"threshold": "1000", "total_amount": "80.00"}
                ],
                "prorate": null
            }),
        },
        Case {
            tag: "grouped_allocation",
            config_key: "grouped_allocation_config",
            config: json!({
                "allocation": "100",
                "grouping_key": "workspace_id",
                "overage_unit_rate": "0.02"
            }),
        },
        Case {
            tag: "grouped_tiered",
            config_key: "grouped_tiered_config",
            config: json!({
                "grouping_key": "project",
                "tiers": [
                    {"tier_lower_bound": "0", "unit_amount": "0.10"},
                    {"tier_lower_bound": "100", "unit_amount": "0.07"}
                ]
            }),
        },
        Case {
            tag: "minimum",
            config_key: "minimum_config",
            config: json!({"minimum_amount": "25.00", "prorated": true}),
        },
        Case {
            tag: "percent",
            config_key: "percent_config",
            config: json!({"percent": 2.5}),
        },
        Case {
            tag: "event_output",
            config_key: "event_output_config",
            config: json!({
                "unit_rating_key": "rate",
                "grouping_key": null,
                "default_unit_rate": "0.01"
            }),
        },
        Case {
            tag: "cumulative_grouped_bulk",
            config_key: "cumulative_grouped_bulk_config",
            config: json!({
                "dimension_values": [
                    {"grouping_key": "tier", "tier_lower_bound": "0", "unit_amount": "0.05"}
                ],
                "group": "seats"
            }),
        },
    ]
}

fn case(tag: &str) -> Case {
    cases()
        .into_iter()
        .find(|case| case.tag == tag)
        .unwrap_or_else(|| panic!("no fixture for {tag}"))
}

fn price_json(case: &Case) -> Value {
    let mut price = json!({
        "id": format!("price_{}", case.tag),
        "name": format!("{} price", case.tag),
        "model_type": case.tag,
        "cadence": "monthly",
        "currency": "USD",
        "created_at": "2024-01-01T00:00:00Z",
        "item": {"id": "item_1", "name": "API calls"},
        "billable_metric": {"id": "bm_1"},
        "billing_cycle_configuration": {"duration": 1, "duration_unit": "month"},
        "conversion_rate": 1.5,
        "external_price_id": format!("ext_{}", case.tag),
        "fixed_price_quantity": null,
        "maximum_amount": null,
        "minimum_amount": "5.00",
        "metadata": {"team": "growth"},
        "plan_phase_order": 0,
        "price_type": "usage_price",
        "replaces_price_id": null
    });
    price[case.config_key] = case.config.clone();
    price
}

fn new_price_json(case: &Case) -> Value {
    let mut price = json!({
        "model_type": case.tag,
        "cadence": "annual",
        "currency": "EUR",
        "item_id": "item_1",
        "name": format!("{} price", case.tag),
        "billable_metric_id": null,
        "billed_in_advance": true,
        "billing_cycle_configuration": {"duration": 12, "duration_unit": "month"},
        "conversion_rate": null,
        "external_price_id": format!("ext_{}", case.tag),
        "fixed_price_quantity": 2,
        "invoice_grouping_key": null,
        "metadata": {"owner": "billing", "obsolete": null}
    });
    price[case.config_key] = case.config.clone();
    price
}

fn price(tag: &str) -> anyhow::Result<Price> {
    Ok(serde_json::from_value(price_json(&case(tag)))?)
}

#[test]
fn every_price_variant_round_trips_a_full_payload() -> anyhow::Result<()> {
    let candidates = Price::candidates();
    assert_eq!(candidates.len(), cases().len());

    for candidate in candidates {
        let tag = candidate.tag("model_type").unwrap();
        let input = price_json(&case(tag));

        let price: Price = serde_json::from_value(input.clone())?;
        assert_eq!(price.variant_name(), candidate.name, "{tag}");
        assert_eq!(serde_json::to_value(&price)?, input, "{tag}");

        let again: Price = from_slice(&to_vec(&price)?)?;
        assert_eq!(again, price, "{tag}");
        if let Err(errors) = price.validate() {
            panic!("{tag}: {errors}");
        }
    }
    Ok(())
}

#[test]
fn every_new_price_variant_round_trips_a_full_payload() -> anyhow::Result<()> {
    let candidates = NewPrice::candidates();
    assert_eq!(candidates.len(), 8);

    for candidate in candidates {
        let tag = candidate.tag("model_type").unwrap();
        let input = new_price_json(&case(tag));

        let price: NewPrice = serde_json::from_value(input.clone())?;
        assert_eq!(price.variant_name(), candidate.name, "{tag}");
        assert_eq!(price.discriminator_value(), Some(tag));
        assert_eq!(serde_json::to_value(&price)?, input, "{tag}");

        let again: NewPrice = from_slice(&to_vec(&price)?)?;
        assert_eq!(again, price, "{tag}");
        if let Err(errors) = price.validate() {
            panic!("{tag}: {errors}");
        }
    }
    Ok(())
}

#[test]
fn matrix_dimensions_keep_null_entries() -> anyhow::Result<()> {
    let Price::Matrix(matrix) = price("matrix")? else {
        panic!("matrix fixture resolved elsewhere");
    };
    let config = matrix.matrix_config()?;
    assert_eq!(config.default_unit_amount()?, "0.10");
    assert_eq!(config.dimensions()?, vec![Some("region".to_string()), None]);

    let values = config.matrix_values()?;
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].dimension_values()?, vec![Some("us".to_string()), None]);
    assert_eq!(values[1].unit_amount()?, "0.12");
    Ok(())
}

#[test]
fn open_ended_tier_bounds_read_as_null() -> anyhow::Result<()> {
    let Price::Tiered(tiered) = price("tiered")? else {
        panic!("tiered fixture resolved elsewhere");
    };
    let tiers = tiered.tiered_config()?.tiers()?;
    assert_eq!(tiers[0].first_unit()?, 0.0);
    assert_eq!(tiers[0].last_unit()?, Field::Value(1000.0));
    assert_eq!(tiers[1].last_unit()?, Field::Null);

    let Price::Bulk(bulk) = price("bulk")? else {
        panic!("bulk fixture resolved elsewhere");
    };
    let tiers = bulk.bulk_config()?.tiers()?;
    assert_eq!(tiers[0].maximum_units()?, Field::Value(500.0));
    assert_eq!(tiers[1].maximum_units()?, Field::Null);

    let Price::BulkWithFilters(filtered) = price("bulk_with_filters")? else {
        panic!("bulk_with_filters fixture resolved elsewhere");
    };
    let config = filtered.bulk_with_filters_config()?;
    assert_eq!(config.filters()?[0].property_key()?, "region");
    assert_eq!(config.filters()?[0].property_value()?, "us");
    let tiers = config.tiers()?;
    assert_eq!(tiers[0].tier_lower_bound()?, Field::Null);
    assert_eq!(tiers[1].tier_lower_bound()?, Field::Value("10000".to_string()));
    Ok(())
}

#[test]
fn grouped_and_threshold_configs_read_back() -> anyhow::Result<()> {
    let Price::ThresholdTotalAmount(threshold) = price("threshold_total_amount")? else {
        panic!("threshold fixture resolved elsewhere");
    };
    let config = threshold.threshold_total_amount_config()?;
    let table = config.consumption_table()?;
    assert_eq!(table.len(), 2);
    assert_eq!(table[1].threshold()?, "1000");
    assert_eq!(table[1].total_amount()?, "80.00");
    assert_eq!(config.prorate()?, Field::Null);

    let Price::GroupedAllocation(allocation) = price("grouped_allocation")? else {
        panic!("grouped_allocation fixture resolved elsewhere");
    };
    let config = allocation.grouped_allocation_config()?;
    assert_eq!(config.allocation()?, "100");
    assert_eq!(config.grouping_key()?, "workspace_id");
    assert_eq!(config.overage_unit_rate()?, "0.02");

    let Price::GroupedTiered(grouped) = price("grouped_tiered")? else {
        panic!("grouped_tiered fixture resolved elsewhere");
    };
    let config = grouped.grouped_tiered_config()?;
    assert_eq!(config.grouping_key()?, "project");
    assert_eq!(config.tiers()?[1].tier_lower_bound()?, "100");
    assert_eq!(config.tiers()?[1].unit_amount()?, "0.07");

    let Price::CumulativeGroupedBulk(cumulative) = price("cumulative_grouped_bulk")? else {
        panic!("cumulative_grouped_bulk fixture resolved elsewhere");
    };
    let config = cumulative.cumulative_grouped_bulk_config()?;
    assert_eq!(config.group()?, "seats");
    let dimensions = config.dimension_values()?;
    assert_eq!(dimensions[0].grouping_key()?, "tier");
    assert_eq!(dimensions[0].tier_lower_bound()?, "0");
    assert_eq!(dimensions[0].unit_amount()?, "0.05");
    Ok(())
}

#[test]
fn scalar_configs_read_back() -> anyhow::Result<()> {
    let Price::Package(package) = price("package")? else {
        panic!("package fixture resolved elsewhere");
    };
    let config = package.package_config()?;
    assert_eq!(config.package_amount()?, "10.00");
    assert_eq!(config.package_size()?, 100);

    let Price::Percent(percent) = price("percent")? else {
        panic!("percent fixture resolved elsewhere");
    };
    assert_eq!(percent.percent_config()?.percent()?, 2.5);

    let Price::EventOutput(output) = price("event_output")? else {
        panic!("event_output fixture resolved elsewhere");
    };
    let config = output.event_output_config()?;
    assert_eq!(config.unit_rating_key()?, "rate");
    assert_eq!(config.grouping_key()?, Field::Null);
    assert_eq!(config.default_unit_rate()?, Field::Value("0.01".to_string()));
    Ok(())
}

#[test]
fn misshaped_config_is_reported_inside_its_variant() {
    let mut input = price_json(&case("tiered"));
    input["tiered_config"]["tiers"][1]["first_unit"] = json!("1000");
    let price: Price = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(serde_json::to_value(&price).unwrap(), input);

    let errors = price.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.violations()[0].path,
        "$.tiered_config.tiers[1].first_unit"
    );
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::InvalidFieldType {
            expected: "number",
            found: "string"
        }
    );
}

#[test]
fn list_params_keep_cursor_null_and_drop_unset_limit() -> anyhow::Result<()> {
    let mut params = PriceListParams::new();
    params.set_cursor(None).set_limit(Some(20));
    assert_eq!(serde_json::to_value(&params)?, json!({"cursor": null, "limit": 20}));
    params.set_limit(None);
    assert_eq!(serde_json::to_value(&params)?, json!({"cursor": null}));

    let input = json!({"cursor": "c_2", "limit": 50});
    let parsed: PriceListParams = serde_json::from_value(input.clone())?;
    assert_eq!(parsed.cursor()?, Field::Value("c_2".to_string()));
    assert_eq!(parsed.limit()?, Some(50));
    assert!(parsed.validate().is_ok());
    assert_eq!(serde_json::to_value(&parsed)?, input);

    let parsed: PriceListParams = serde_json::from_value(json!({"limit": "ten"}))?;
    let errors = parsed.validate().unwrap_err();
    assert_eq!(errors.violations()[0].path, "$.limit");
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::InvalidFieldType {
            expected: "integer",
            found: "string"
        }
    );
    Ok(())
}
