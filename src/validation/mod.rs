pub mod extract;
pub mod params;
