use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Default number of documents returned by a two-keyword query
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Characters stripped from the end of a token before it is tested as a keyword
pub const DEFAULT_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub result_limit: usize,          // Max documents per query
    pub punctuation: Vec<char>,       // Trailing punctuation set
    pub query_cache_size: usize,      // 0 disables the query cache
}

impl Default for Config {
    fn default() -> Self {
        Config {
            result_limit: DEFAULT_RESULT_LIMIT,
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
            query_cache_size: 128,
        }
    }
}

impl Config {
    /// Load a config from a JSON file. Fields left out keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::source_unavailable(&path.display().to_string()),
            _ => Error::from(e),
        })?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "result_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.punctuation, vec!['.', ',', '?', ':', ';', '!']);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "result_limit": 3 }}"#).unwrap();

        let config = Config::from_json_file(file.path()).unwrap();
        assert_eq!(config.result_limit, 3);
        assert_eq!(config.query_cache_size, 128);
        assert_eq!(config.punctuation.len(), 6);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "result_limit": 0 }}"#).unwrap();

        let err = Config::from_json_file(file.path()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json_file("/nonexistent/kwindex.json").unwrap_err();
        assert!(err.is_source_unavailable());
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::from_json_file(file.path()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Parse);
    }
}
