use thiserror::Error;

pub type FillResult<T> = Result<T, FillError>;

#[derive(Error, Debug)]
pub enum FillError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] umya_spreadsheet::XlsxError),

    #[error("template not found: {0}")]
    TemplateMissing(String),

    #[error("sheet not found: {0}")]
    SheetMissing(String),
}
