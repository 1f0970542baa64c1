use thiserror::Error;

/// Error type for ranking ingestion, statistics and chart rendering
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("no data: {0}")]
    EmptyData(String),

    #[error("I/O error")]
    Io(#[source] std::io::Error),

    #[error("CSV error")]
    Csv(#[source] csv::Error),

    #[error("arithmetic overflow: {0}")]
    Overflow(String),

    #[error("format error: {0}")]
    Format(String),

    #[error("expected {expected} teams in {source_name}, found {found}")]
    TeamCount {
        source_name: String,
        expected: usize,
        found: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("visualization error: {0}")]
    Visualization(String),
}

/// Alias used by callers outside this module
pub type PowerRankError = Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Format(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

// Plottersエラーの変換
#[cfg(feature = "visualization")]
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("drawing failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_count_message() {
        let err = Error::TeamCount {
            source_name: "week01.csv".to_string(),
            expected: 32,
            found: 31,
        };
        assert_eq!(err.to_string(), "expected 32 teams in week01.csv, found 31");
    }

    #[test]
    fn test_io_conversion_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
