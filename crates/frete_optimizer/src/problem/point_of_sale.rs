use crate::problem::location::Location;

/// A demand location: somewhere goods must be delivered, and how much per
/// month. Read-only input to the assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOfSale {
    external_id: String,
    location: Location,
    demand_kg: f64,
}

impl PointOfSale {
    pub fn new(external_id: String, location: Location, demand_kg: f64) -> Self {
        Self {
            external_id,
            location,
            demand_kg,
        }
    }

    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn demand_kg(&self) -> f64 {
        self.demand_kg
    }
}
