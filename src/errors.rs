use std::fmt;

#[derive(Debug, Clone)]
pub enum BucketlistError {
    Config(String),
    Session(String),
    RemoteOperation(String),
    Serialization(String),
    NotFound(String),
    Validation(String),
    BackendNotFound(String),
}

impl BucketlistError {
    pub fn code(&self) -> &'static str {
        match self {
            BucketlistError::Config(_) => "E001",
            BucketlistError::Session(_) => "E002",
            BucketlistError::RemoteOperation(_) => "E003",
            BucketlistError::Serialization(_) => "E004",
            BucketlistError::NotFound(_) => "E005",
            BucketlistError::Validation(_) => "E006",
            BucketlistError::BackendNotFound(_) => "E007",
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            BucketlistError::Config(_) => "Configuration Error",
            BucketlistError::Session(_) => "Session Error",
            BucketlistError::RemoteOperation(_) => "Remote Operation Failed",
            BucketlistError::Serialization(_) => "Serialization Error",
            BucketlistError::NotFound(_) => "Object Not Found",
            BucketlistError::Validation(_) => "Validation Error",
            BucketlistError::BackendNotFound(_) => "Store Backend Not Found",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BucketlistError::Config(msg) => msg,
            BucketlistError::Session(msg) => msg,
            BucketlistError::RemoteOperation(msg) => msg,
            BucketlistError::Serialization(msg) => msg,
            BucketlistError::NotFound(msg) => msg,
            BucketlistError::Validation(msg) => msg,
            BucketlistError::BackendNotFound(msg) => msg,
        }
    }

    /// Colored output for CLI mode
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// Plain output for the TUI status bar and logs
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for BucketlistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for BucketlistError {}

// Convenience constructors
impl BucketlistError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        BucketlistError::Config(msg.into())
    }

    pub fn session<T: Into<String>>(msg: T) -> Self {
        BucketlistError::Session(msg.into())
    }

    pub fn remote_operation<T: Into<String>>(msg: T) -> Self {
        BucketlistError::RemoteOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        BucketlistError::Serialization(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BucketlistError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        BucketlistError::Validation(msg.into())
    }

    pub fn backend_not_found<T: Into<String>>(msg: T) -> Self {
        BucketlistError::BackendNotFound(msg.into())
    }
}

impl From<std::io::Error> for BucketlistError {
    fn from(err: std::io::Error) -> Self {
        BucketlistError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for BucketlistError {
    fn from(err: serde_json::Error) -> Self {
        BucketlistError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for BucketlistError {
    fn from(err: toml::de::Error) -> Self {
        BucketlistError::Config(err.to_string())
    }
}

impl From<reqwest::Error> for BucketlistError {
    fn from(err: reqwest::Error) -> Self {
        BucketlistError::RemoteOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BucketlistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(BucketlistError::config("x").code(), "E001");
        assert_eq!(BucketlistError::remote_operation("x").code(), "E003");
        assert_eq!(BucketlistError::not_found("x").code(), "E005");
    }

    #[test]
    fn test_format_simple_contains_type_and_message() {
        let err = BucketlistError::remote_operation("connection refused");
        let s = err.format_simple();
        assert!(s.contains("Remote Operation Failed"), "got: {}", s);
        assert!(s.contains("connection refused"), "got: {}", s);
    }

    #[test]
    fn test_display_matches_format_simple() {
        let err = BucketlistError::validation("empty label");
        assert_eq!(format!("{}", err), err.format_simple());
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err: BucketlistError = parse_err.into();
        assert!(matches!(err, BucketlistError::Serialization(_)));
    }
}
