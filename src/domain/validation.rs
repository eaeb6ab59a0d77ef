use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidBase64 { field: &'static str },
    PageSizeZero,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidBase64 { field } => {
                write!(f, "{field} must be valid base64")
            }
            Self::PageSizeZero => write!(f, "page size must be greater than zero"),
        }
    }
}

impl std::error::Error for ValidationError {}
