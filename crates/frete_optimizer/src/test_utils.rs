use crate::problem::{
    assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
    distribution_center::{DistributionCenter, DistributionCenterBuilder},
    location::Location,
    point_of_sale::PointOfSale,
    transport_model::{TransportModel, TransportModelBuilder},
};

pub fn create_center(name: &str, lat: f64, lon: f64) -> DistributionCenter {
    let mut builder = DistributionCenterBuilder::default();
    builder.set_name(name.to_owned());
    builder.set_location(Location::try_from_lat_lon(lat, lon).unwrap());
    builder.build()
}

pub fn create_cartesian_center(name: &str, x: f64, y: f64) -> DistributionCenter {
    let mut builder = DistributionCenterBuilder::default();
    builder.set_name(name.to_owned());
    builder.set_location(Location::from_cartesian(x, y));
    builder.build()
}

pub fn create_model(name: &str, cost_per_km: f64, capacity_kg: f64) -> TransportModel {
    let mut builder = TransportModelBuilder::default();
    builder.set_name(name.to_owned());
    builder.set_cost_per_km(cost_per_km);
    builder.set_capacity_kg(capacity_kg);
    builder.build()
}

pub fn create_point(id: &str, lat: f64, lon: f64, demand_kg: f64) -> PointOfSale {
    PointOfSale::new(
        id.to_owned(),
        Location::try_from_lat_lon(lat, lon).unwrap(),
        demand_kg,
    )
}

pub fn create_cartesian_point(id: &str, x: f64, y: f64, demand_kg: f64) -> PointOfSale {
    PointOfSale::new(id.to_owned(), Location::from_cartesian(x, y), demand_kg)
}

pub fn create_test_problem(
    centers: Vec<DistributionCenter>,
    models: Vec<TransportModel>,
    points: Vec<PointOfSale>,
) -> AssignmentProblem {
    let mut builder = AssignmentProblemBuilder::default();

    builder.set_centers(centers);
    builder.set_models(models);
    builder.set_points(points);

    builder.build().unwrap()
}

/// Two central-Brazil centers plus the default model catalog.
pub fn create_catalog_problem(points: Vec<PointOfSale>) -> AssignmentProblem {
    create_test_problem(
        vec![
            create_center("CD Brasília", -15.79, -47.88),
            create_center("CD Goiânia", -16.68, -49.25),
        ],
        TransportModel::default_catalog(),
        points,
    )
}
