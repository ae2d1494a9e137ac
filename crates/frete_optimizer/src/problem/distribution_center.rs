use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::location::Location;

/// Warehouse size classes with their standard monthly cost.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterSize {
    Small,
    Medium,
    Large,
}

impl CenterSize {
    pub fn monthly_cost(&self) -> f64 {
        match self {
            CenterSize::Small => 20_000.0,
            CenterSize::Medium => 30_000.0,
            CenterSize::Large => 50_000.0,
        }
    }
}

/// A supply source location. The monthly cost only enters the run summary.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionCenter {
    name: String,
    location: Location,
    monthly_cost: f64,
}

impl DistributionCenter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn monthly_cost(&self) -> f64 {
        self.monthly_cost
    }
}

#[derive(Default)]
pub struct DistributionCenterBuilder {
    name: Option<String>,
    location: Option<Location>,
    size: Option<CenterSize>,
    monthly_cost: Option<f64>,
}

impl DistributionCenterBuilder {
    pub fn set_name(&mut self, name: String) -> &mut DistributionCenterBuilder {
        self.name = Some(name);
        self
    }

    pub fn set_location(&mut self, location: Location) -> &mut DistributionCenterBuilder {
        self.location = Some(location);
        self
    }

    /// An explicit monthly cost wins over the size class default.
    pub fn set_size(&mut self, size: CenterSize) -> &mut DistributionCenterBuilder {
        self.size = Some(size);
        self
    }

    pub fn set_monthly_cost(&mut self, monthly_cost: f64) -> &mut DistributionCenterBuilder {
        self.monthly_cost = Some(monthly_cost);
        self
    }

    pub fn build(self) -> DistributionCenter {
        let monthly_cost = self
            .monthly_cost
            .or(self.size.map(|size| size.monthly_cost()))
            .unwrap_or(0.0);

        DistributionCenter {
            name: self.name.expect("Distribution center name is required"),
            location: self
                .location
                .expect("Distribution center location is required"),
            monthly_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_sets_monthly_cost() {
        let mut builder = DistributionCenterBuilder::default();
        builder.set_name("CD Goiânia".to_owned());
        builder.set_location(Location::try_from_lat_lon(-16.68, -49.25).unwrap());
        builder.set_size(CenterSize::Medium);
        let center = builder.build();

        assert_eq!(center.monthly_cost(), 30_000.0);
    }

    #[test]
    fn test_explicit_monthly_cost_wins_over_size() {
        let mut builder = DistributionCenterBuilder::default();
        builder.set_name("CD Brasília".to_owned());
        builder.set_location(Location::try_from_lat_lon(-15.79, -47.88).unwrap());
        builder.set_size(CenterSize::Large);
        builder.set_monthly_cost(42_000.0);
        let center = builder.build();

        assert_eq!(center.monthly_cost(), 42_000.0);
    }
}
