use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid box '{0}'. Expected three comma-separated lengths (e.g., '3.0,3.0,3.0').")]
    InvalidBoxFormat(String),

    #[error("Invalid box length '{value}' in '{input}'.")]
    InvalidBoxLength { value: String, input: String },

    #[error("Box lengths must be positive, got '{0}'.")]
    NonPositiveBoxLength(String),
}

pub fn parse_box_lengths(input: &str) -> Result<[f64; 3], ParseError> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidBoxFormat(input.to_string()));
    }

    let mut lengths = [0.0f64; 3];
    for (part, slot) in parts.iter().zip(lengths.iter_mut()) {
        let value: f64 = part.parse().map_err(|_| ParseError::InvalidBoxLength {
            value: part.to_string(),
            input: input.to_string(),
        })?;
        if !(value > 0.0) {
            return Err(ParseError::NonPositiveBoxLength(input.to_string()));
        }
        *slot = value;
    }
    Ok(lengths)
}
