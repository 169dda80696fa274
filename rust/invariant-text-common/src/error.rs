use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::invalid_arg("till", "till <= data.len()");
        assert_eq!(e.to_string(), "invalid argument till: till <= data.len()");
        assert!(matches!(e.kind(), ErrorKind::InvalidArgument { name, .. } if name == "till"));

        let e: Error = ErrorKind::InvalidArgument {
            name: "from".into(),
            message: "from <= till".into(),
        }
        .into();
        assert_eq!(e.to_string(), "invalid argument from: from <= till");
        assert!(
            matches!(e.into_kind(), ErrorKind::InvalidArgument { message, .. } if message == "from <= till")
        );
    }
}
