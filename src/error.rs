use thiserror::Error;

pub type LegendResult<T> = Result<T, LegendError>;

#[derive(Debug, Error)]
pub enum LegendError {
    #[error("invalid legend config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("legend background requested before layout ran")]
    BackgroundBeforeLayout,
}
