pub type SsResult<T> = Result<T, SsError>;

#[derive(Debug, thiserror::Error)]
pub enum SsError {
    #[error("[Create Directory Error] [{path}] {source}")]
    CreateDirError {
        path: String,
        source: std::io::Error,
    },

    #[error("[CSV Error] {0}")]
    CsvError(#[from] ::csv::Error),

    #[error("[HTTP Request Error] {0}")]
    HttpRequestError(#[from] ::reqwest::Error),

    #[error("[HTTP Status Error] [{request}] {status}")]
    HttpStatusError { status: String, request: String },

    #[error("[Invalid] {message}")]
    Invalid { code: &'static str, message: String },

    #[error("[Parse Config Error] {0}")]
    ParseConfigError(#[from] ::confy::ConfyError),

    #[error("[Parse Enum Error] {0}")]
    ParseEnumError(#[from] ::strum::ParseError),

    #[error("[Parse URL Error] {0}")]
    ParseUrlError(#[from] url::ParseError),

    #[error("[Save File Error] [{path}] {source}")]
    SaveFileError {
        path: String,
        source: std::io::Error,
    },

    #[error("[Serde JSON Error] {0}")]
    SerdeJsonError(#[from] ::serde_json::Error),

    #[error("[Workbook Error] {0}")]
    WorkbookError(#[from] ::rust_xlsxwriter::XlsxError),
}

impl SsError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::CreateDirError { .. } => "CREATE_DIR",
            Self::CsvError(_) => "CSV",
            Self::HttpRequestError(_) => "HTTP_REQUEST",
            Self::HttpStatusError { .. } => "HTTP_STATUS",
            Self::Invalid { code, .. } => *code,
            Self::ParseConfigError(_) => "PARSE_CONFIG",
            Self::ParseEnumError(_) => "PARSE_ENUM",
            Self::ParseUrlError(_) => "PARSE_URL",
            Self::SaveFileError { .. } => "SAVE_FILE",
            Self::SerdeJsonError(_) => "SERDE_JSON",
            Self::WorkbookError(_) => "WORKBOOK",
        }
    }
}
