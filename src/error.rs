use thiserror::Error;

/// Errors that can occur while checking or emitting a primitive table
#[derive(Error, Debug)]
pub enum CodeGenError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid C identifier in {context}: '{name}'")]
  InvalidIdentifier { context: String, name: String },

  #[error("Reserved C keyword used in {context}: '{name}'")]
  ReservedKeyword { context: String, name: String },

  #[error("Duplicate primitive: '{0}'")]
  DuplicatePrimitive(String),

  #[error("Zero-width pin '{pin}' on primitive '{primitive}'")]
  ZeroWidthPin { primitive: String, pin: String },
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, CodeGenError>;
