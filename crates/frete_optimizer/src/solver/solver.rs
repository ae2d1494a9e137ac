use tracing::debug;

use crate::{
    error::ProblemError,
    problem::assignment_problem::AssignmentProblem,
    solver::{assignment::Assignment, solution::Solution},
};

struct Candidate {
    center: usize,
    model: usize,
    distance_km: f64,
    total_cost: f64,
}

/// Assigns every point of sale to its cheapest (center, model) pair.
///
/// Each point is decided independently: centers are scanned in registry
/// order, models within each center, and a strict comparison keeps the
/// first minimum, so equal-cost pairs always resolve to the earliest
/// listed one. Capacity is carried through but never filtered on.
pub struct Solver<'a> {
    problem: &'a AssignmentProblem,
}

impl<'a> Solver<'a> {
    pub fn new(problem: &'a AssignmentProblem) -> Self {
        Solver { problem }
    }

    pub fn solve(&self) -> Result<Solution, ProblemError> {
        let centers = self.problem.centers();
        let models = self.problem.models();
        let points = self.problem.points();

        if centers.is_empty() {
            return Err(ProblemError::EmptyRegistry {
                registry: "distribution centers",
            });
        }

        if models.is_empty() {
            return Err(ProblemError::EmptyRegistry {
                registry: "transport models",
            });
        }

        if points.is_empty() {
            return Err(ProblemError::EmptyDemand);
        }

        debug!(
            points = points.len(),
            centers = centers.len(),
            models = models.len(),
            "assigning demand"
        );

        let mut assignments = Vec::with_capacity(points.len());

        for (point_index, point) in points.iter().enumerate() {
            let mut best: Option<Candidate> = None;

            for center_index in 0..centers.len() {
                let distance_km = self.problem.distance_km(center_index, point_index);

                for (model_index, model) in models.iter().enumerate() {
                    let total_cost = distance_km * model.cost_per_km();

                    if best
                        .as_ref()
                        .is_none_or(|candidate| total_cost < candidate.total_cost)
                    {
                        best = Some(Candidate {
                            center: center_index,
                            model: model_index,
                            distance_km,
                            total_cost,
                        });
                    }
                }
            }

            // Non-empty registries guarantee at least one candidate.
            let candidate = best.expect("candidate for point of sale");
            let model = &models[candidate.model];

            assignments.push(Assignment {
                point_of_sale: point.external_id().to_owned(),
                distribution_center: centers[candidate.center].name().to_owned(),
                transport_model: model.name().to_owned(),
                distance_km: candidate.distance_km,
                cost_per_km: model.cost_per_km(),
                total_cost: candidate.total_cost,
            });
        }

        Ok(Solution::new(assignments, self.problem))
    }
}
