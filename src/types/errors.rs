use std::fmt;

// === SnapshotError ===

/// Why a shared-storage snapshot could not be read.
#[derive(Debug)]
pub enum SnapshotError {
    /// The shared container for the app group could not be located.
    ContainerUnavailable(String),
    /// The snapshot file does not exist inside the container.
    FileMissing(String),
    /// The snapshot file exists but could not be read.
    Io(String),
    /// The snapshot content does not match the expected schema.
    Decode(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::ContainerUnavailable(group) => {
                write!(f, "Shared container unavailable: {}", group)
            }
            SnapshotError::FileMissing(path) => write!(f, "Snapshot file missing: {}", path),
            SnapshotError::Io(msg) => write!(f, "Snapshot read failed: {}", msg),
            SnapshotError::Decode(msg) => write!(f, "Snapshot decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}

// === CodecError ===

/// Errors from the favicon attribute codec.
#[derive(Debug)]
pub enum CodecError {
    /// The image payload is not valid base64.
    InvalidImage(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidImage(msg) => write!(f, "Invalid favicon image data: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

// === ConfigError ===

/// Errors related to loading widget configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reading the config file failed.
    IoError(String),
    /// The config file is not valid JSON for `WidgetConfig`.
    ParseError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Widget config IO error: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Widget config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
