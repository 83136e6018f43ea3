use serde::{Deserialize, Serialize};

use super::read;
use crate::adapter::FieldSource;
use crate::config::ValidationConfig;
use crate::numeric::{validate_positive_number, validate_positive_whole};
use crate::pincode::validate_pincode;
use crate::string::validate_required;
use crate::{into_result, record, FieldErrors, Validate};

/// Admin form for creating a parking lot.
///
/// Numeric fields stay strings here; they are parsed during validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddLotForm {
    pub name: String,
    pub address: String,
    pub pincode: String,
    pub price_per_hour: String,
    pub max_spots: String,
}

impl AddLotForm {
    pub const FIELDS: &'static [&'static str] =
        &["name", "address", "pincode", "price_per_hour", "max_spots"];

    pub fn from_source(source: &impl FieldSource) -> Self {
        Self {
            name: read(source, "name"),
            address: read(source, "address"),
            pincode: read(source, "pincode"),
            price_per_hour: read(source, "price_per_hour"),
            max_spots: read(source, "max_spots"),
        }
    }
}

impl Validate for AddLotForm {
    fn validate_with(&self, _config: &ValidationConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate_required(&self.name, "Lot name is required");
        record(&mut errors, "name", name);
        let address = validate_required(&self.address, "Address is required");
        record(&mut errors, "address", address);
        record(&mut errors, "pincode", validate_pincode(&self.pincode));

        let price = validate_positive_number(&self.price_per_hour, "Price per hour");
        record(&mut errors, "price_per_hour", price.map(|_| ()));
        let spots = validate_positive_whole(&self.max_spots, "Maximum spots");
        record(&mut errors, "max_spots", spots.map(|_| ()));

        into_result("add_lot", errors)
    }
}
