use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitaeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown skill level: {0}")]
    UnknownSkillLevel(String),

    #[error("No such entry: {0}")]
    UnknownEntry(String),

    #[error("A work experience entry must keep at least one bullet point")]
    LastBullet,

    #[error("Compression error: {0}")]
    CompressionError(String),
}

pub type Result<T> = std::result::Result<T, VitaeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = VitaeError::UnknownTemplate("fancy".to_string());
        assert_eq!(error.to_string(), "Unknown template: fancy");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = VitaeError::from(io_error);

        match error {
            VitaeError::Io(ref err) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_last_bullet_message() {
        let error = VitaeError::LastBullet;
        assert!(error.to_string().contains("at least one bullet"));
    }
}
