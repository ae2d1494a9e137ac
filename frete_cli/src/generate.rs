use std::path::PathBuf;

use clap::Subcommand;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::info;

// Sampling window: central Brazil, demand in kilograms.
const LAT_RANGE: (f64, f64) = (-20.0, -10.0);
const LON_RANGE: (f64, f64) = (-55.0, -45.0);
const DEMAND_RANGE: (f64, f64) = (100.0, 5_000.0);

#[derive(Subcommand)]
pub enum GenerateSubcommands {
    /// Random points of sale as CSV (latitude, longitude, demand_kg)
    SampleData {
        #[arg(long, short = 'n', default_value_t = 100)]
        points: usize,

        /// RNG seed, for reproducible datasets
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, short = 'o')]
        out: PathBuf,
    },
    /// JSON schema of the problem document
    JsonSchema {
        #[arg(long, short = 'o')]
        out: PathBuf,
    },
}

pub fn run(subcommand: GenerateSubcommands) -> Result<(), anyhow::Error> {
    match subcommand {
        GenerateSubcommands::SampleData { points, seed, out } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let mut writer = csv::Writer::from_path(&out)?;
            writer.write_record(["latitude", "longitude", "demand_kg"])?;
            for _ in 0..points {
                let latitude = rng.random_range(LAT_RANGE.0..LAT_RANGE.1);
                let longitude = rng.random_range(LON_RANGE.0..LON_RANGE.1);
                let demand_kg = rng.random_range(DEMAND_RANGE.0..DEMAND_RANGE.1);
                writer.write_record([
                    format!("{latitude:.6}"),
                    format!("{longitude:.6}"),
                    format!("{demand_kg:.1}"),
                ])?;
            }
            writer.flush()?;

            info!("Wrote {} points of sale to {}", points, out.display());
        }
        GenerateSubcommands::JsonSchema { out } => {
            let schema = frete_optimizer::json::schema::generate_json_schema()?;

            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(out, schema)?;
        }
    }

    Ok(())
}
