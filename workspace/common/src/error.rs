use thiserror::Error;

/// Failures of a single request against the forecast backend.
///
/// Every variant is terminal for the current cycle: callers log it and keep
/// whatever the view showed before.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response (network down, CORS, aborted).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape the view expects.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Errors raised while converting raw payload values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Unrecognized date '{0}'")]
    Date(String),
}

/// Chart configuration problems detected before anything is drawn.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error(
        "Series length mismatch: {labels} labels, {model_1} model 1 values, {model_2} model 2 values"
    )]
    LengthMismatch {
        labels: usize,
        model_1: usize,
        model_2: usize,
    },
}

/// Problems the view layer reports instead of faulting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    /// A DOM element the view writes to is not on the page.
    #[error("Missing target element '#{0}'")]
    MissingTarget(String),

    /// The embedded chart configuration could not be read.
    #[error("Invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Chart(#[from] ChartError),

    /// The charting library rejected the figure.
    #[error("Chart rendering failed: {0}")]
    Render(String),
}

/// Type alias for request results
pub type FetchResult<T> = std::result::Result<T, FetchError>;
