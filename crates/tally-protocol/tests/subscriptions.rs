use serde_json::{Value, json};
use tally_model::{Error, Union, Validate, ViolationKind, WireError, from_str};
use tally_protocol::prices::NewPrice;
use tally_protocol::subscriptions::{
    PriceIntervalAdd, PriceIntervalById, SubscriptionPriceIntervalsParams,
    SubscriptionPriceIntervalsRequest,
};
use time::macros::datetime;

fn interval(value: Value) -> PriceIntervalAdd {
    serde_json::from_value(value).unwrap()
}

#[test]
fn interval_shape_is_inferred_from_its_price_reference() {
    let by_id = interval(json!({"start_date": "2024-01-01T00:00:00Z", "price_id": "price_1"}));
    let by_external = interval(json!({
        "start_date": "2024-01-01T00:00:00Z",
        "external_price_id": "ext_1",
        "end_date": null
    }));
    let inline = interval(json!({
        "start_date": "2024-01-01T00:00:00Z",
        "price": {
            "model_type": "percent",
            "cadence": "monthly",
            "currency": "USD",
            "item_id": "item_1",
            "name": "Platform fee",
            "percent_config": {"percent": 0.05}
        }
    }));

    assert_eq!(PriceIntervalAdd::DISCRIMINATOR, None);
    assert_eq!(by_id.variant_name(), "ById");
    assert_eq!(by_external.variant_name(), "ByExternalId");
    assert_eq!(inline.variant_name(), "Inline");

    let PriceIntervalAdd::Inline(inline) = inline else {
        unreachable!()
    };
    let price = inline.price().unwrap();
    assert!(matches!(price, NewPrice::Percent(_)));
    assert!(price.validate().is_ok());
}

#[test]
fn interval_without_price_reference_does_not_resolve() {
    let err = from_str::<PriceIntervalAdd>(r#"{"start_date":"2024-01-01T00:00:00Z"}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Wire(WireError::NoMatchingVariant {
            union: "PriceIntervalAdd",
            discriminator: None
        })
    ));
}

#[test]
fn unresolvable_inline_price_is_reported_at_its_path() {
    let params: SubscriptionPriceIntervalsParams = serde_json::from_value(json!({
        "add": [
            {"start_date": "2024-01-01T00:00:00Z", "price_id": "price_1"},
            {"start_date": "2024-01-01T00:00:00Z", "price": {"model_type": "stairstep"}}
        ],
        "allow_invoice_credit_or_void": null
    }))
    .unwrap();

    let errors = params.validate().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.violations()[0].path, "$.add[1].price");
    assert_eq!(
        errors.violations()[0].kind,
        ViolationKind::NoMatchingVariant {
            union: "NewPrice",
            discriminator: Some("stairstep".to_string())
        }
    );
}

#[test]
fn params_built_in_code_round_trip() {
    let mut by_id = PriceIntervalById::new();
    by_id
        .set_start_date(datetime!(2024-02-01 00:00 UTC))
        .set_price_id("price_1")
        .set_end_date(None);

    let mut params = SubscriptionPriceIntervalsParams::new();
    params
        .set_add(Some(vec![PriceIntervalAdd::from(by_id)]))
        .set_allow_invoice_credit_or_void(Some(false));
    let request = SubscriptionPriceIntervalsRequest {
        subscription_id: "sub_1".to_string(),
        body: params,
    };

    let wire = serde_json::to_value(&request.body).unwrap();
    assert_eq!(
        wire,
        json!({
            "add": [{"start_date": "2024-02-01T00:00:00Z", "price_id": "price_1", "end_date": null}],
            "allow_invoice_credit_or_void": false
        })
    );
    let back: SubscriptionPriceIntervalsParams = serde_json::from_value(wire).unwrap();
    assert_eq!(back, request.body);
    assert!(back.validate().is_ok());
}
