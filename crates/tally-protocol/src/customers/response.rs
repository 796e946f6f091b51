use time::OffsetDateTime;

use tally_model::model;

use crate::customers::types::Address;
use crate::shared::{Metadata, PaginationMetadata, PaymentProvider};

model! {
    pub struct Customer {
        required id / set_id: String = "id";
        required additional_emails / set_additional_emails: Vec<String> = "additional_emails";
        required auto_collection / set_auto_collection: bool = "auto_collection";
        /// Decimal string, negative when the customer holds credit.
        required balance / set_balance: String = "balance";
        nullable billing_address / set_billing_address: Address = "billing_address";
        required created_at / set_created_at: OffsetDateTime = "created_at";
        nullable currency / set_currency: String = "currency";
        required email / set_email: String = "email";
        required email_delivery / set_email_delivery: bool = "email_delivery";
        nullable external_customer_id / set_external_customer_id: String = "external_customer_id";
        required metadata / set_metadata: Metadata = "metadata";
        required name / set_name: String = "name";
        nullable payment_provider / set_payment_provider: PaymentProvider = "payment_provider";
        nullable payment_provider_id / set_payment_provider_id: String = "payment_provider_id";
        nullable portal_url / set_portal_url: String = "portal_url";
        nullable shipping_address / set_shipping_address: Address = "shipping_address";
        required timezone / set_timezone: String = "timezone";
    }
}

model! {
    pub struct CustomerPage {
        required data / set_data: Vec<Customer> = "data";
        required pagination_metadata / set_pagination_metadata: PaginationMetadata = "pagination_metadata";
    }
}
