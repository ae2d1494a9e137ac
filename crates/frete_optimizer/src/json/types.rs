use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::ProblemError,
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        distance_method::DistanceMethod,
        distribution_center::{CenterSize, DistributionCenter, DistributionCenterBuilder},
        location::Location,
        point_of_sale::PointOfSale,
        transport_model::{TransportModel, TransportModelBuilder},
    },
    solver::{
        assignment::Assignment,
        solution::{Solution, SolutionSummary},
    },
};

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "AssignmentProblem")]
pub struct JsonProblem {
    pub id: Option<String>,
    pub distance_method: Option<DistanceMethod>,
    pub distribution_centers: Vec<JsonDistributionCenter>,
    /// Omitted means the default catalog.
    pub transport_models: Option<Vec<JsonTransportModel>>,
    pub points_of_sale: Vec<JsonPointOfSale>,
}

impl JsonProblem {
    #[instrument(skip_all)]
    pub fn build_problem(self) -> Result<AssignmentProblem, ProblemError> {
        let centers = self
            .distribution_centers
            .into_iter()
            .map(JsonDistributionCenter::build_center)
            .collect::<Result<Vec<_>, _>>()?;

        let models = match self.transport_models {
            Some(models) => models
                .into_iter()
                .map(JsonTransportModel::build_model)
                .collect(),
            None => TransportModel::default_catalog(),
        };

        let points = self
            .points_of_sale
            .into_iter()
            .map(JsonPointOfSale::build_point)
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = AssignmentProblemBuilder::default();
        builder.set_distance_method(self.distance_method.unwrap_or_default());
        builder.set_centers(centers);
        builder.set_models(models);
        builder.set_points(points);

        builder.build()
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TransportModel")]
pub struct JsonTransportModel {
    pub name: String,
    pub cost_per_km: f64,
    pub capacity_kg: f64,
    pub fixed_cost_per_month: Option<f64>,
    pub deliveries_per_month: Option<u32>,
}

impl JsonTransportModel {
    pub fn build_model(self) -> TransportModel {
        let mut builder = TransportModelBuilder::default();
        builder.set_name(self.name);
        builder.set_cost_per_km(self.cost_per_km);
        builder.set_capacity_kg(self.capacity_kg);
        if let Some(fixed_cost_per_month) = self.fixed_cost_per_month {
            builder.set_fixed_cost_per_month(fixed_cost_per_month);
        }
        if let Some(deliveries_per_month) = self.deliveries_per_month {
            builder.set_deliveries_per_month(deliveries_per_month);
        }

        builder.build()
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "DistributionCenter")]
pub struct JsonDistributionCenter {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size: Option<CenterSize>,
    /// Wins over the size class default when both are given.
    pub monthly_cost: Option<f64>,
}

impl JsonDistributionCenter {
    pub fn build_center(self) -> Result<DistributionCenter, ProblemError> {
        let mut builder = DistributionCenterBuilder::default();
        builder.set_name(self.name);
        builder.set_location(Location::try_from_lat_lon(self.latitude, self.longitude)?);
        if let Some(size) = self.size {
            builder.set_size(size);
        }
        if let Some(monthly_cost) = self.monthly_cost {
            builder.set_monthly_cost(monthly_cost);
        }

        Ok(builder.build())
    }
}

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "PointOfSale")]
pub struct JsonPointOfSale {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub demand_kg: f64,
}

impl JsonPointOfSale {
    pub fn build_point(self) -> Result<PointOfSale, ProblemError> {
        let location = Location::try_from_lat_lon(self.latitude, self.longitude)?;

        Ok(PointOfSale::new(self.id, location, self.demand_kg))
    }
}

#[derive(Serialize)]
#[serde(rename = "Solution")]
pub struct JsonSolution {
    pub assignments: Vec<Assignment>,
    pub summary: SolutionSummary,
}

impl From<&Solution> for JsonSolution {
    fn from(solution: &Solution) -> Self {
        JsonSolution {
            assignments: solution.assignments().to_vec(),
            summary: solution.summary().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_document_builds() {
        let document = r#"{
            "id": "central-brazil",
            "distribution_centers": [
                { "name": "CD Brasília", "latitude": -15.79, "longitude": -47.88, "size": "Medium" }
            ],
            "transport_models": [
                { "name": "Van", "cost_per_km": 1.0, "capacity_kg": 1200.0 }
            ],
            "points_of_sale": [
                { "id": "pos-1", "latitude": -16.0, "longitude": -48.0, "demand_kg": 350.0 }
            ]
        }"#;

        let json: JsonProblem = serde_json::from_str(document).unwrap();
        let problem = json.build_problem().unwrap();

        assert_eq!(problem.centers().len(), 1);
        assert_eq!(problem.centers()[0].monthly_cost(), 30_000.0);
        assert_eq!(problem.models().len(), 1);
        assert_eq!(problem.points()[0].external_id(), "pos-1");
        assert_eq!(problem.distance_method(), DistanceMethod::Haversine);
    }

    #[test]
    fn test_missing_models_fall_back_to_the_catalog() {
        let document = r#"{
            "distribution_centers": [
                { "name": "CD", "latitude": 0.0, "longitude": 0.0 }
            ],
            "points_of_sale": []
        }"#;

        let json: JsonProblem = serde_json::from_str(document).unwrap();
        let problem = json.build_problem().unwrap();

        assert_eq!(problem.models().len(), 5);
        assert_eq!(problem.models()[0].name(), "Van");
    }

    #[test]
    fn test_invalid_coordinate_fails_before_solving() {
        let document = r#"{
            "distribution_centers": [
                { "name": "CD", "latitude": 95.0, "longitude": 0.0 }
            ],
            "points_of_sale": []
        }"#;

        let json: JsonProblem = serde_json::from_str(document).unwrap();

        assert_eq!(
            json.build_problem().err(),
            Some(ProblemError::InvalidCoordinate {
                lat: 95.0,
                lon: 0.0
            })
        );
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let document = r#"{ "name": "CD", "latitude": 0.0, "longitude": 0.0, "color": "red" }"#;

        assert!(serde_json::from_str::<JsonDistributionCenter>(document).is_err());
    }
}
