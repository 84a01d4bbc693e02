use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Shape error: expected `{field}` to be {expected}, found {found}")]
    ShapeError {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Validation error: {field} = {value:?}: {reason}")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CleanError {
    pub fn shape(field: impl Into<String>, expected: &'static str, found: &serde_json::Value) -> Self {
        CleanError::ShapeError {
            field: field.into(),
            expected,
            found: json_kind(found),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CleanError::IoError(e) => match e.kind() {
                std::io::ErrorKind::NotFound => format!("File not found: {}", e),
                std::io::ErrorKind::PermissionDenied => format!("Permission denied: {}", e),
                _ => format!("File operation failed: {}", e),
            },
            CleanError::ParseError(e) => format!("Input is not valid JSON: {}", e),
            CleanError::ShapeError { .. } => format!("Input has an unexpected shape: {}", self),
            CleanError::ValidationError { .. } => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CleanError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Run the command from the directory that contains input.json"
            }
            CleanError::IoError(_) => "Check that input.json is readable and output.json is writable",
            CleanError::ParseError(_) => "Fix the JSON syntax in input.json",
            CleanError::ShapeError { .. } => {
                "input.json must be an object whose `results` field is an array of objects"
            }
            CleanError::ValidationError { .. } => "Check the built-in file and field names",
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

pub type Result<T> = std::result::Result<T, CleanError>;
