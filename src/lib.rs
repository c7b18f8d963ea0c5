mod aggregate;
mod climate;
mod error;
mod filtering;
mod source;
mod tabular;
mod types;

pub use error::ClimateQueryError;
pub use climate::*;

pub use aggregate::*;
pub use filtering::*;
pub use source::*;
pub use tabular::*;

pub use types::observation::Observation;
pub use types::results::*;
pub use types::station::Station;
