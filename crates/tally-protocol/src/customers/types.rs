use tally_model::model;

model! {
    pub struct Address {
        nullable city / set_city: String = "city";
        /// ISO 3166-1 alpha-2 code.
        nullable country / set_country: String = "country";
        nullable line1 / set_line1: String = "line1";
        nullable line2 / set_line2: String = "line2";
        nullable postal_code / set_postal_code: String = "postal_code";
        nullable state / set_state: String = "state";
    }
}

model! {
    pub struct AddressInput {
        nullable city / set_city: String = "city";
        nullable country / set_country: String = "country";
        nullable line1 / set_line1: String = "line1";
        nullable line2 / set_line2: String = "line2";
        nullable postal_code / set_postal_code: String = "postal_code";
        nullable state / set_state: String = "state";
    }
}
