use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideJudgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, GuideJudgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts() {
        fn open_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        let err = open_missing().unwrap_err();
        assert!(matches!(err, GuideJudgeError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_config_error_message() {
        let err = GuideJudgeError::Config("bad theme".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad theme");
    }
}
