/// A named vehicle class: what it costs to move one kilometre and how much
/// it carries per delivery. The capacity figure is advisory at assignment
/// time; the fixed monthly cost only enters the run summary, never the
/// per-point selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportModel {
    name: String,
    cost_per_km: f64,
    capacity_kg: f64,
    fixed_cost_per_month: f64,
    deliveries_per_month: u32,
}

impl TransportModel {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    pub fn capacity_kg(&self) -> f64 {
        self.capacity_kg
    }

    pub fn fixed_cost_per_month(&self) -> f64 {
        self.fixed_cost_per_month
    }

    pub fn deliveries_per_month(&self) -> u32 {
        self.deliveries_per_month
    }

    /// The default catalog of Brazilian road freight classes, from the
    /// smallest van up to a full semi-trailer.
    pub fn default_catalog() -> Vec<TransportModel> {
        vec![
            TransportModel {
                name: "Van".to_owned(),
                cost_per_km: 1.0,
                capacity_kg: 1_200.0,
                fixed_cost_per_month: 7_000.0,
                deliveries_per_month: 176,
            },
            TransportModel {
                name: "03/04".to_owned(),
                cost_per_km: 2.0,
                capacity_kg: 3_000.0,
                fixed_cost_per_month: 11_000.0,
                deliveries_per_month: 176,
            },
            TransportModel {
                name: "Toco".to_owned(),
                cost_per_km: 2.5,
                capacity_kg: 7_000.0,
                fixed_cost_per_month: 13_000.0,
                deliveries_per_month: 176,
            },
            TransportModel {
                name: "Truck".to_owned(),
                cost_per_km: 3.0,
                capacity_kg: 12_000.0,
                fixed_cost_per_month: 15_000.0,
                deliveries_per_month: 176,
            },
            TransportModel {
                name: "Carreta".to_owned(),
                cost_per_km: 4.0,
                capacity_kg: 30_000.0,
                fixed_cost_per_month: 20_000.0,
                deliveries_per_month: 176,
            },
        ]
    }
}

#[derive(Default)]
pub struct TransportModelBuilder {
    name: Option<String>,
    cost_per_km: Option<f64>,
    capacity_kg: Option<f64>,
    fixed_cost_per_month: Option<f64>,
    deliveries_per_month: Option<u32>,
}

impl TransportModelBuilder {
    pub fn set_name(&mut self, name: String) -> &mut TransportModelBuilder {
        self.name = Some(name);
        self
    }

    pub fn set_cost_per_km(&mut self, cost_per_km: f64) -> &mut TransportModelBuilder {
        self.cost_per_km = Some(cost_per_km);
        self
    }

    pub fn set_capacity_kg(&mut self, capacity_kg: f64) -> &mut TransportModelBuilder {
        self.capacity_kg = Some(capacity_kg);
        self
    }

    pub fn set_fixed_cost_per_month(
        &mut self,
        fixed_cost_per_month: f64,
    ) -> &mut TransportModelBuilder {
        self.fixed_cost_per_month = Some(fixed_cost_per_month);
        self
    }

    pub fn set_deliveries_per_month(
        &mut self,
        deliveries_per_month: u32,
    ) -> &mut TransportModelBuilder {
        self.deliveries_per_month = Some(deliveries_per_month);
        self
    }

    pub fn build(self) -> TransportModel {
        TransportModel {
            name: self.name.expect("Transport model name is required"),
            cost_per_km: self.cost_per_km.expect("Cost per km is required"),
            capacity_kg: self.capacity_kg.expect("Capacity is required"),
            fixed_cost_per_month: self.fixed_cost_per_month.unwrap_or(0.0),
            deliveries_per_month: self.deliveries_per_month.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_ordered_by_capacity() {
        let catalog = TransportModel::default_catalog();

        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].name(), "Van");
        assert_eq!(catalog[4].name(), "Carreta");
        assert!(
            catalog
                .windows(2)
                .all(|pair| pair[0].capacity_kg() < pair[1].capacity_kg())
        );
        assert!(
            catalog
                .windows(2)
                .all(|pair| pair[0].cost_per_km() < pair[1].cost_per_km())
        );
    }

    #[test]
    fn test_builder_defaults_fixed_cost_to_zero() {
        let mut builder = TransportModelBuilder::default();
        builder.set_name("Kombi".to_owned());
        builder.set_cost_per_km(0.8);
        builder.set_capacity_kg(600.0);
        let model = builder.build();

        assert_eq!(model.fixed_cost_per_month(), 0.0);
        assert_eq!(model.deliveries_per_month(), 0);
    }
}
