pub mod fare;
pub mod station;
pub mod trip;
