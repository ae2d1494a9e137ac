use frete_optimizer::{
    json::types::{JsonProblem, JsonSolution},
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        distribution_center::{DistributionCenter, DistributionCenterBuilder},
        location::Location,
        point_of_sale::PointOfSale,
        transport_model::{TransportModel, TransportModelBuilder},
    },
    solver::solver::Solver,
};

fn center(name: &str, lat: f64, lon: f64) -> DistributionCenter {
    let mut builder = DistributionCenterBuilder::default();
    builder.set_name(name.to_owned());
    builder.set_location(Location::try_from_lat_lon(lat, lon).unwrap());
    builder.build()
}

fn model(name: &str, cost_per_km: f64, capacity_kg: f64) -> TransportModel {
    let mut builder = TransportModelBuilder::default();
    builder.set_name(name.to_owned());
    builder.set_cost_per_km(cost_per_km);
    builder.set_capacity_kg(capacity_kg);
    builder.build()
}

fn point(id: &str, lat: f64, lon: f64, demand_kg: f64) -> PointOfSale {
    PointOfSale::new(
        id.to_owned(),
        Location::try_from_lat_lon(lat, lon).unwrap(),
        demand_kg,
    )
}

fn problem(
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

#[test]
fn test_single_van_from_the_equator() {
    let problem = problem(
        vec![center("CD", 0.0, 0.0)],
        vec![model("Van", 2.0, 1_200.0)],
        vec![
            point("pos-1", 0.0, 1.0, 10.0),
            point("pos-2", 0.0, 2.0, 20.0),
        ],
    );

    let solution = Solver::new(&problem).solve().unwrap();
    let assignments = solution.assignments();

    assert_eq!(assignments.len(), 2);
    for assignment in assignments {
        assert_eq!(assignment.distribution_center, "CD");
        assert_eq!(assignment.transport_model, "Van");
        assert_eq!(assignment.cost_per_km, 2.0);
        assert_eq!(
            assignment.total_cost,
            assignment.distance_km * assignment.cost_per_km
        );
    }

    // One degree of longitude at the equator is roughly 111 km.
    assert!((assignments[0].distance_km - 111.2).abs() < 0.5);
    assert!((assignments[1].distance_km - 222.4).abs() < 1.0);
    assert!((assignments[0].total_cost - 222.4).abs() < 1.0);
    assert!((assignments[1].total_cost - 444.8).abs() < 2.0);
}

#[test]
fn test_cheaper_rate_beats_shorter_distance_when_it_wins_on_cost() {
    // The far center is twice as far away, but pairing it with the cheap
    // model still loses: the choice is over center and model together.
    let problem = problem(
        vec![center("near", 0.0, 1.0), center("far", 0.0, 2.0)],
        vec![model("cheap", 1.0, 30_000.0), model("dear", 3.0, 30_000.0)],
        vec![point("pos-1", 0.0, 0.0, 100.0)],
    );

    let solution = Solver::new(&problem).solve().unwrap();
    let assignment = &solution.assignments()[0];

    assert_eq!(assignment.distribution_center, "near");
    assert_eq!(assignment.transport_model, "cheap");
}

#[test]
fn test_capacity_differences_alone_never_change_the_result() {
    let points = vec![
        point("pos-1", -12.0, -46.0, 4_000.0),
        point("pos-2", -18.0, -52.0, 50.0),
    ];

    let small_first = problem(
        vec![center("CD", -15.0, -48.0)],
        vec![model("a", 2.0, 1_200.0), model("b", 2.0, 30_000.0)],
        points.clone(),
    );
    let large_first = problem(
        vec![center("CD", -15.0, -48.0)],
        vec![model("b", 2.0, 30_000.0), model("a", 2.0, 1_200.0)],
        points,
    );

    let small_solution = Solver::new(&small_first).solve().unwrap();
    let large_solution = Solver::new(&large_first).solve().unwrap();

    for (left, right) in small_solution
        .assignments()
        .iter()
        .zip(large_solution.assignments())
    {
        assert_eq!(left.distance_km, right.distance_km);
        assert_eq!(left.total_cost, right.total_cost);
        assert_eq!(left.distribution_center, right.distribution_center);
    }
}

#[test]
fn test_json_document_end_to_end() {
    let document = r#"{
        "id": "demo",
        "distribution_centers": [
            { "name": "CD Brasília", "latitude": -15.79, "longitude": -47.88, "size": "Medium" },
            { "name": "CD Goiânia", "latitude": -16.68, "longitude": -49.25, "size": "Small" }
        ],
        "points_of_sale": [
            { "id": "pos-1", "latitude": -15.9, "longitude": -48.0, "demand_kg": 350.0 },
            { "id": "pos-2", "latitude": -16.6, "longitude": -49.2, "demand_kg": 1800.0 }
        ]
    }"#;

    let json: JsonProblem = serde_json::from_str(document).unwrap();
    let problem = json.build_problem().unwrap();
    let solution = Solver::new(&problem).solve().unwrap();

    assert_eq!(solution.assignments().len(), 2);
    assert_eq!(solution.assignments()[0].distribution_center, "CD Brasília");
    assert_eq!(solution.assignments()[1].distribution_center, "CD Goiânia");
    // Storage cost covers both configured centers.
    assert_eq!(solution.summary().storage_cost, 50_000.0);

    let rendered = serde_json::to_string(&JsonSolution::from(&solution)).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed["assignments"].as_array().unwrap().len(), 2);
    assert!(parsed["summary"]["total_cost"].as_f64().unwrap() > 0.0);
}
