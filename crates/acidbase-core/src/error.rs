use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("barometric pressure {0} mmHg is outside the supported range 500-800")]
    BarometricPressureOutOfRange(u16),

    #[error("unknown lab field: {0}")]
    UnknownField(String),

    #[error("unknown pressure unit: {0}")]
    UnknownPressureUnit(String),

    #[error("unknown respiratory duration: {0}")]
    UnknownDuration(String),
}
