pub mod assignment_problem;
pub mod distance_method;
pub mod distance_table;
pub mod distribution_center;
pub mod location;
pub mod point_of_sale;
pub mod transport_model;
