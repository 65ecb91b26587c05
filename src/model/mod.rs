pub mod day_type;
pub mod demand;
pub mod economics;
pub mod sampling;
