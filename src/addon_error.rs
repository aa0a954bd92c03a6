use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonErrorKind {
    Info,
    Config,
    Network,
    Timeout,
    Status,
    Decode,
}

impl Display for AddonErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Info => "info",
            Self::Config => "config",
            Self::Network => "network",
            Self::Timeout => "timeout",
            Self::Status => "status",
            Self::Decode => "decode",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone)]
pub struct AddonError {
    pub kind: AddonErrorKind,
    pub message: String,
}

impl AddonError {
    pub const fn new(kind: AddonErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for AddonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Addon {} error: {}", self.kind, self.message)
    }
}

impl Error for AddonError {}

#[macro_export]
macro_rules! create_addon_error {
    ($kind: expr, $($arg:tt)*) => {
        $crate::addon_error::AddonError::new($kind, format!($($arg)*))
    }
}

#[macro_export]
macro_rules! create_addon_error_result {
    ($kind: expr, $($arg:tt)*) => {
        Err($crate::addon_error::AddonError::new($kind, format!($($arg)*)))
    }
}

#[macro_export]
macro_rules! info_err {
    ($($arg:tt)*) => {
        $crate::addon_error::AddonError::new($crate::addon_error::AddonErrorKind::Info, format!($($arg)*))
    }
}

pub use create_addon_error;
pub use create_addon_error_result;
pub use info_err;

#[cfg(test)]
mod tests {
    use crate::addon_error::{AddonError, AddonErrorKind};

    #[test]
    fn test_error_display() {
        let err = create_addon_error!(AddonErrorKind::Status, "Request failed with status {}", 500);
        assert_eq!(err.to_string(), "Addon status error: Request failed with status 500");

        let result: Result<(), AddonError> = create_addon_error_result!(AddonErrorKind::Timeout, "took too long");
        assert_eq!(result.unwrap_err().kind, AddonErrorKind::Timeout);

        assert_eq!(info_err!("{}", "plain").kind, AddonErrorKind::Info);
    }
}
