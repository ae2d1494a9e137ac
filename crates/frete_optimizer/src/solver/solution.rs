use std::collections::BTreeMap;

use serde::Serialize;

use crate::{problem::assignment_problem::AssignmentProblem, solver::assignment::Assignment};

/// Cost totals over a whole run. Variable transport cost comes from the
/// assignments; fixed fleet cost counts each distinct model used once;
/// storage cost covers every configured center, used or not.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SolutionSummary {
    pub transport_cost: f64,
    pub fixed_fleet_cost: f64,
    pub storage_cost: f64,
    pub total_cost: f64,
    pub assignments_per_model: BTreeMap<String, usize>,
    pub assignments_per_center: BTreeMap<String, usize>,
}

impl SolutionSummary {
    pub(crate) fn compute(assignments: &[Assignment], problem: &AssignmentProblem) -> Self {
        let mut assignments_per_model: BTreeMap<String, usize> = BTreeMap::new();
        let mut assignments_per_center: BTreeMap<String, usize> = BTreeMap::new();

        for assignment in assignments {
            *assignments_per_model
                .entry(assignment.transport_model.clone())
                .or_default() += 1;
            *assignments_per_center
                .entry(assignment.distribution_center.clone())
                .or_default() += 1;
        }

        let transport_cost = assignments
            .iter()
            .map(|assignment| assignment.total_cost)
            .sum::<f64>();

        let fixed_fleet_cost = problem
            .models()
            .iter()
            .filter(|model| assignments_per_model.contains_key(model.name()))
            .map(|model| model.fixed_cost_per_month())
            .sum::<f64>();

        let storage_cost = problem
            .centers()
            .iter()
            .map(|center| center.monthly_cost())
            .sum::<f64>();

        SolutionSummary {
            transport_cost,
            fixed_fleet_cost,
            storage_cost,
            total_cost: transport_cost + fixed_fleet_cost + storage_cost,
            assignments_per_model,
            assignments_per_center,
        }
    }
}

/// The output of one run: one assignment per point of sale, in the order
/// the points were supplied, plus the cost totals.
pub struct Solution {
    assignments: Vec<Assignment>,
    summary: SolutionSummary,
}

impl Solution {
    pub(crate) fn new(assignments: Vec<Assignment>, problem: &AssignmentProblem) -> Self {
        let summary = SolutionSummary::compute(&assignments, problem);

        Solution {
            assignments,
            summary,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn summary(&self) -> &SolutionSummary {
        &self.summary
    }

    pub fn into_assignments(self) -> Vec<Assignment> {
        self.assignments
    }
}
