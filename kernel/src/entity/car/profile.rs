use destructure::Destructure;
use serde::{Deserialize, Serialize};
use vodca::References;

/// Display attributes of a listing. Nothing in here participates in
/// availability or pricing decisions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure)]
pub struct CarProfile {
    brand: String,
    model: String,
    year: i32,
    category: String,
    seating_capacity: i32,
    fuel_type: String,
    transmission: String,
    image_url: String,
    description: String,
}

impl CarProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        brand: String,
        model: String,
        year: i32,
        category: String,
        seating_capacity: i32,
        fuel_type: String,
        transmission: String,
        image_url: String,
        description: String,
    ) -> Self {
        Self {
            brand,
            model,
            year,
            category,
            seating_capacity,
            fuel_type,
            transmission,
            image_url,
            description,
        }
    }
}
