use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CycleStepperError {
    #[error("Cycle index {index} is out of range for a list of {len} values")]
    #[diagnostic(
        code(cycle_stepper::invalid_cycle_index),
        help("Pass -1 for a list without a cycle, or an index between 0 and len - 1")
    )]
    InvalidCycleIndex { index: i64, len: usize },

    #[error("Terminal error while trying to {action}")]
    #[diagnostic(
        code(cycle_stepper::terminal_error),
        help("Run the command from an interactive terminal, or pass --headless")
    )]
    Terminal {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(cycle_stepper::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(cycle_stepper::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(cycle_stepper::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cycle_stepper::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl CycleStepperError {
    pub(crate) fn terminal(action: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| CycleStepperError::Terminal { action, source }
    }
}
