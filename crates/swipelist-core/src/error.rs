use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    RevealPercentage(f32),
    FlingBounds { min: f32, max: f32 },
    TouchSlop(f32),
    Offset { side: &'static str, value: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::RevealPercentage(value) => {
                write!(f, "reveal percentage {value} outside 0..=100")
            }
            ConfigError::FlingBounds { min, max } => {
                write!(f, "invalid fling velocity bounds {min}..{max}")
            }
            ConfigError::TouchSlop(value) => write!(f, "invalid touch slop {value}"),
            ConfigError::Offset { side, value } => write!(f, "invalid {side} offset {value}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub enum SwipeError {
    IndexOutOfRange { index: usize, len: usize },
    NotVisible { index: usize },
    /// The position is already waiting to be reported as dismissed.
    AlreadyDismissed { index: usize },
    SessionActive,
    InvalidConfig(ConfigError),
}

impl fmt::Display for SwipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwipeError::IndexOutOfRange { index, len } => {
                write!(f, "item {index} out of range (len {len})")
            }
            SwipeError::NotVisible { index } => write!(f, "item {index} has no visible surface"),
            SwipeError::AlreadyDismissed { index } => {
                write!(f, "item {index} is already being dismissed")
            }
            SwipeError::SessionActive => write!(f, "a swipe gesture is in progress"),
            SwipeError::InvalidConfig(err) => write!(f, "invalid swipe config: {err}"),
        }
    }
}

impl std::error::Error for SwipeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SwipeError::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for SwipeError {
    fn from(err: ConfigError) -> Self {
        SwipeError::InvalidConfig(err)
    }
}
