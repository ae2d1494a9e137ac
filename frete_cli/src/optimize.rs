use std::{fs::File, io::BufReader, path::PathBuf};

use clap::Args;
use comfy_table::Table;
use frete_optimizer::{
    json::types::{JsonProblem, JsonSolution},
    solver::{solution::Solution, solver::Solver},
};
use tracing::info;

use crate::parsers;

#[derive(Args)]
pub struct OptimizeArgs {
    /// JSON problem document: registries plus points of sale
    #[arg(short = 'i', long, conflicts_with_all = ["points", "centers"])]
    input: Option<PathBuf>,

    /// CSV of points of sale (latitude, longitude, demand_kg)
    #[arg(long, requires = "centers")]
    points: Option<PathBuf>,

    /// JSON list of distribution centers, paired with --points; the
    /// transport models default to the catalog
    #[arg(long)]
    centers: Option<PathBuf>,

    /// Write the solution as JSON
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,

    /// Skip the rendered assignment table
    #[arg(long)]
    no_table: bool,
}

pub fn run(args: OptimizeArgs) -> anyhow::Result<()> {
    let problem = match (&args.input, &args.points, &args.centers) {
        (Some(input), _, _) => {
            let f = File::open(input)?;
            let content: JsonProblem = serde_json::from_reader(BufReader::new(f))?;
            content.build_problem()?
        }
        (None, Some(points), Some(centers)) => parsers::problem_from_csv(points, centers)?,
        _ => anyhow::bail!("either --input or --points together with --centers is required"),
    };

    let solver = Solver::new(&problem);
    let solution = solver.solve()?;

    let summary = solution.summary();
    info!(
        "Finished: assignments = {}, transport = {:.2}, fixed fleet = {:.2}, storage = {:.2}, total = {:.2}",
        solution.assignments().len(),
        summary.transport_cost,
        summary.fixed_fleet_cost,
        summary.storage_cost,
        summary.total_cost,
    );

    if !args.no_table {
        println!("{}", render_table(&solution));
    }

    if let Some(out) = &args.out {
        let rendered = serde_json::to_string_pretty(&JsonSolution::from(&solution))?;
        std::fs::write(out, rendered)?;
        info!("Solution written to {}", out.display());
    }

    Ok(())
}

fn render_table(solution: &Solution) -> Table {
    let mut table = Table::new();
    table.set_header([
        "point of sale",
        "center",
        "model",
        "distance (km)",
        "cost/km",
        "total cost",
    ]);

    for assignment in solution.assignments() {
        table.add_row([
            assignment.point_of_sale.clone(),
            assignment.distribution_center.clone(),
            assignment.transport_model.clone(),
            format!("{:.2}", assignment.distance_km),
            format!("{:.2}", assignment.cost_per_km),
            format!("{:.2}", assignment.total_cost),
        ]);
    }

    table
}
