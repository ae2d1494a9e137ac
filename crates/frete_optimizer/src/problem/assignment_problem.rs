use std::collections::HashSet;

use crate::{
    error::ProblemError,
    problem::{
        distance_method::DistanceMethod,
        distance_table::{Distance, DistanceTable},
        distribution_center::DistributionCenter,
        point_of_sale::PointOfSale,
        transport_model::TransportModel,
    },
};

/// One immutable run input: the two registries, the demand, and the
/// precomputed center-to-point distances. Every run builds its own problem;
/// nothing here is shared or mutated afterwards.
pub struct AssignmentProblem {
    centers: Vec<DistributionCenter>,
    models: Vec<TransportModel>,
    points: Vec<PointOfSale>,
    distance_method: DistanceMethod,
    distances: DistanceTable,
}

impl AssignmentProblem {
    pub fn centers(&self) -> &[DistributionCenter] {
        &self.centers
    }

    pub fn models(&self) -> &[TransportModel] {
        &self.models
    }

    pub fn points(&self) -> &[PointOfSale] {
        &self.points
    }

    pub fn distance_method(&self) -> DistanceMethod {
        self.distance_method
    }

    #[inline(always)]
    pub fn distance_km(&self, center: usize, point: usize) -> Distance {
        self.distances.distance_km(center, point)
    }
}

fn ensure_unique_names<'a>(
    registry: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ProblemError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ProblemError::DuplicateName {
                registry,
                name: name.to_owned(),
            });
        }
    }

    Ok(())
}

#[derive(Default)]
pub struct AssignmentProblemBuilder {
    centers: Option<Vec<DistributionCenter>>,
    models: Option<Vec<TransportModel>>,
    points: Option<Vec<PointOfSale>>,
    distance_method: Option<DistanceMethod>,
}

impl AssignmentProblemBuilder {
    pub fn set_distance_method(
        &mut self,
        distance_method: DistanceMethod,
    ) -> &mut AssignmentProblemBuilder {
        self.distance_method = Some(distance_method);
        self
    }

    pub fn set_centers(
        &mut self,
        centers: Vec<DistributionCenter>,
    ) -> &mut AssignmentProblemBuilder {
        self.centers = Some(centers);
        self
    }

    pub fn add_center(&mut self, center: DistributionCenter) -> &mut AssignmentProblemBuilder {
        self.centers.get_or_insert_default().push(center);
        self
    }

    pub fn set_models(&mut self, models: Vec<TransportModel>) -> &mut AssignmentProblemBuilder {
        self.models = Some(models);
        self
    }

    pub fn add_model(&mut self, model: TransportModel) -> &mut AssignmentProblemBuilder {
        self.models.get_or_insert_default().push(model);
        self
    }

    pub fn set_points(&mut self, points: Vec<PointOfSale>) -> &mut AssignmentProblemBuilder {
        self.points = Some(points);
        self
    }

    pub fn build(self) -> Result<AssignmentProblem, ProblemError> {
        let centers = self.centers.unwrap_or_default();
        let models = self.models.unwrap_or_default();
        let points = self.points.unwrap_or_default();

        ensure_unique_names(
            "distribution center",
            centers.iter().map(|center| center.name()),
        )?;
        ensure_unique_names("transport model", models.iter().map(|model| model.name()))?;

        let distance_method = self.distance_method.unwrap_or_default();
        let distances = DistanceTable::new(&centers, &points, distance_method);

        Ok(AssignmentProblem {
            centers,
            models,
            points,
            distance_method,
            distances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_duplicate_center_name_is_rejected() {
        let mut builder = AssignmentProblemBuilder::default();
        builder.add_center(test_utils::create_center("CD 1", -15.0, -48.0));
        builder.add_center(test_utils::create_center("CD 1", -18.0, -44.0));
        builder.add_model(test_utils::create_model("Van", 1.0, 1_200.0));

        assert_eq!(
            builder.build().err(),
            Some(ProblemError::DuplicateName {
                registry: "distribution center",
                name: "CD 1".to_owned(),
            })
        );
    }

    #[test]
    fn test_duplicate_model_name_is_rejected() {
        let mut builder = AssignmentProblemBuilder::default();
        builder.add_center(test_utils::create_center("CD 1", -15.0, -48.0));
        builder.add_model(test_utils::create_model("Van", 1.0, 1_200.0));
        builder.add_model(test_utils::create_model("Van", 2.0, 3_000.0));

        assert_eq!(
            builder.build().err(),
            Some(ProblemError::DuplicateName {
                registry: "transport model",
                name: "Van".to_owned(),
            })
        );
    }

    #[test]
    fn test_distance_method_defaults_to_haversine() {
        let problem = AssignmentProblemBuilder::default().build().unwrap();

        assert_eq!(problem.distance_method(), DistanceMethod::Haversine);
    }
}
