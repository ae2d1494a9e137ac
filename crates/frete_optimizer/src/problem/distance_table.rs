use crate::problem::{
    distance_method::DistanceMethod, distribution_center::DistributionCenter, location::Location,
    point_of_sale::PointOfSale,
};

pub type Distance = f64;

pub fn distance(from: &Location, to: &Location, method: DistanceMethod) -> Distance {
    match method {
        DistanceMethod::Haversine => from.haversine_distance_km(to),
        DistanceMethod::Euclidean => from.euclidean_distance(to),
    }
}

/// Distances from every distribution center to every point of sale, stored
/// flat. To find the entry for a pair, use the formula:
/// `index = center * num_points + point`.
pub struct DistanceTable {
    distances: Vec<Distance>,
    num_points: usize,
}

impl DistanceTable {
    pub fn new(
        centers: &[DistributionCenter],
        points: &[PointOfSale],
        method: DistanceMethod,
    ) -> Self {
        let num_points = points.len();
        let mut distances: Vec<Distance> = vec![0.0; centers.len() * num_points];

        for (i, center) in centers.iter().enumerate() {
            for (j, point) in points.iter().enumerate() {
                distances[i * num_points + j] =
                    distance(center.location(), point.location(), method);
            }
        }

        DistanceTable {
            distances,
            num_points,
        }
    }

    #[inline(always)]
    pub fn distance_km(&self, center: usize, point: usize) -> Distance {
        self.distances[center * self.num_points + point]
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
