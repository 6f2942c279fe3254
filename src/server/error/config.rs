use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds a value that failed URL parsing.
    #[error("Invalid URL in environment variable {var}: {source}")]
    InvalidUrl {
        /// Name of the offending environment variable.
        var: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
}
