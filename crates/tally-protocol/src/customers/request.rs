use tally_model::model;

use crate::customers::types::AddressInput;
use crate::shared::{MetadataPatch, PaymentProvider};

model! {
    pub struct CustomerCreateParams {
        required email / set_email: String = "email";
        required name / set_name: String = "name";
        nullable additional_emails / set_additional_emails: Vec<String> = "additional_emails";
        nullable auto_collection / set_auto_collection: bool = "auto_collection";
        nullable billing_address / set_billing_address: AddressInput = "billing_address";
        nullable currency / set_currency: String = "currency";
        nullable email_delivery / set_email_delivery: bool = "email_delivery";
        nullable external_customer_id / set_external_customer_id: String = "external_customer_id";
        nullable metadata / set_metadata: MetadataPatch = "metadata";
        nullable payment_provider / set_payment_provider: PaymentProvider = "payment_provider";
        nullable payment_provider_id / set_payment_provider_id: String = "payment_provider_id";
        nullable shipping_address / set_shipping_address: AddressInput = "shipping_address";
        /// IANA zone name. Cannot be cleared, only omitted.
        optional timezone / set_timezone: String = "timezone";
    }
}
