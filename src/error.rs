use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SundialError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse sample table: {0}")]
    Csv(#[from] csv::Error),
    #[error("sample table has no date column")]
    MissingDateColumn,
    #[error("sample table has no matching 'A HH:MM:SS' / 'E HH:MM:SS' column pairs")]
    NoTimeColumns,
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid month-day '{0}': expected MM-DD")]
    InvalidMonthDay(String),
    #[error("solstice {month:02}-{day:02} does not exist in {year}")]
    InvalidSolstice { year: i32, month: u32, day: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SundialError>;
