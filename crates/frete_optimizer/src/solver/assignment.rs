use serde::Serialize;

/// One solved pairing: where a point of sale is served from, with what, and
/// at what cost. `total_cost` is always `distance_km * cost_per_km`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Assignment {
    pub point_of_sale: String,
    pub distribution_center: String,
    pub transport_model: String,
    pub distance_km: f64,
    pub cost_per_km: f64,
    pub total_cost: f64,
}
