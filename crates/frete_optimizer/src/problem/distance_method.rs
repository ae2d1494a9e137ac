use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The one distance metric used for every pair in a run. Relative
/// comparisons drive the assignment choice, so mixing metrics within a run
/// is never allowed.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMethod {
    #[default]
    Haversine,
    Euclidean,
}
