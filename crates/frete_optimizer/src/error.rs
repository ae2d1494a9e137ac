use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError {
    #[error("coordinate ({lat}, {lon}) is outside the valid latitude/longitude range")]
    InvalidCoordinate { lat: f64, lon: f64 },
    #[error("no {registry} configured")]
    EmptyRegistry { registry: &'static str },
    #[error("no points of sale supplied")]
    EmptyDemand,
    #[error("duplicate {registry} name: {name}")]
    DuplicateName {
        registry: &'static str,
        name: String,
    },
}
