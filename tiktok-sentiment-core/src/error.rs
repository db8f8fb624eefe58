use {
    std::{io, path::PathBuf},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("input has no column named {0:?}")]
    MissingColumn(String),

    #[error("row {row} has {found} fields, but the header has {expected}")]
    MalformedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("classifier backend {0:?} is not available in this build")]
    UnsupportedBackend(String),

    #[error("inference failed: {0}")]
    Inference(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
