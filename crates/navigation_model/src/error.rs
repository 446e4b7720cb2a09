use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolylineError {
    #[error("Invalid character '{character}' at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("Unexpected end of polyline at index {index}")]
    UnexpectedEnd { index: usize },

    #[error("Value starting at index {index} does not fit in 64 bits")]
    Overflow { index: usize },

    #[error("Precision {0} is not supported (max {max})", max = crate::polyline::MAX_PRECISION)]
    InvalidPrecision(u32),

    #[error("Latitude {0} is out of range")]
    LatitudeOutOfRange(f64),

    #[error("Longitude {0} is out of range")]
    LongitudeOutOfRange(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavPolylineError {
    #[error("Record has no points")]
    MissingPoints,

    #[error("Failed to decode points: {0}")]
    Decode(#[from] PolylineError),
}
