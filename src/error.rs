use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimateQueryError {
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },
}
