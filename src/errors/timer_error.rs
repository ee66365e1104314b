use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer '{0}' is already running")]
    AlreadyRunning(String),

    #[error("timer '{0}' is not running")]
    NotRunning(String),
}
