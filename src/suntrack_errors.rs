use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuntrackError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Invalid angle format: {0}")]
    InvalidAngle(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Error while reading the star catalog: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for SuntrackError {
    fn eq(&self, other: &Self) -> bool {
        use SuntrackError::*;
        match (self, other) {
            (ConfigurationError(a), ConfigurationError(b)) => a == b,
            (InvalidAngle(a), InvalidAngle(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,

            // not comparable: equal when the variant matches
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            _ => false,
        }
    }
}
