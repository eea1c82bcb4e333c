use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed into its expected type.
    ///
    /// Check the documentation or `.env.example` file for the expected format
    /// of each configuration variable.
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
