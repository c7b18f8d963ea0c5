pub mod observation;
pub mod results;
pub mod station;
