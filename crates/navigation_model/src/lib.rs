pub mod error;
pub mod nav_coord;
pub mod nav_polyline;
pub mod polyline;
