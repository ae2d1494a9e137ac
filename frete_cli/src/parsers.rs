use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use frete_optimizer::{
    json::types::JsonDistributionCenter,
    problem::{
        assignment_problem::{AssignmentProblem, AssignmentProblemBuilder},
        distribution_center::DistributionCenter,
        location::Location,
        point_of_sale::PointOfSale,
        transport_model::TransportModel,
    },
};
use serde::Deserialize;

/// One row of the upload format. The id column is optional; absent ids
/// fall back to the 1-based row number.
#[derive(Deserialize)]
struct PointOfSaleRow {
    id: Option<String>,
    latitude: f64,
    longitude: f64,
    demand_kg: f64,
}

pub fn points_from_csv(path: &Path) -> anyhow::Result<Vec<PointOfSale>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut points = Vec::new();
    for (index, row) in reader.deserialize().enumerate() {
        let row_number = index + 1;
        let row: PointOfSaleRow =
            row.with_context(|| format!("row {row_number} of {}", path.display()))?;

        if row.demand_kg < 0.0 {
            anyhow::bail!(
                "row {row_number} of {}: negative demand {}",
                path.display(),
                row.demand_kg
            );
        }

        let location = Location::try_from_lat_lon(row.latitude, row.longitude)
            .with_context(|| format!("row {row_number} of {}", path.display()))?;
        let id = row.id.unwrap_or_else(|| row_number.to_string());

        points.push(PointOfSale::new(id, location, row.demand_kg));
    }

    Ok(points)
}

pub fn centers_from_json(path: &Path) -> anyhow::Result<Vec<DistributionCenter>> {
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let content: Vec<JsonDistributionCenter> = serde_json::from_reader(BufReader::new(f))?;

    content
        .into_iter()
        .map(|center| center.build_center().map_err(Into::into))
        .collect()
}

pub fn problem_from_csv(points: &Path, centers: &Path) -> anyhow::Result<AssignmentProblem> {
    let points = points_from_csv(points)?;
    let centers = centers_from_json(centers)?;

    let mut builder = AssignmentProblemBuilder::default();
    builder.set_centers(centers);
    builder.set_models(TransportModel::default_catalog());
    builder.set_points(points);

    Ok(builder.build()?)
}
