mod make_shape;
mod points_from_coordinates;

pub use make_shape::MakeShape;
pub use points_from_coordinates::PointsFromCoordinates;
