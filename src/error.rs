#[derive(Debug, Clone, PartialEq)]
pub enum SelectError {
    LengthMismatch { items: usize, weights: usize },
    InvalidWeight { index: usize, value: f64 },
    SumOverflow,
    NoValidEntries,
    EmptySelector,
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::LengthMismatch { items, weights } => {
                write!(f, "got {items} items but {weights} weights")
            }
            SelectError::InvalidWeight { index, value } => {
                write!(f, "weight at index {index} is not usable: {value}")
            }
            SelectError::SumOverflow => write!(f, "sum of weights overflows f64"),
            SelectError::NoValidEntries => write!(f, "no entry has a positive weight"),
            SelectError::EmptySelector => {
                write!(f, "every positive-weight entry has already been drawn")
            }
        }
    }
}

impl std::error::Error for SelectError {}
