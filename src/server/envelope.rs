use serde::Serialize;

/// Uniform response shape for every endpoint:
/// `{status: bool, message: string, data: T|null}`.
#[derive(Debug, Serialize)]
pub struct Envelope<T = ()> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl Envelope<()> {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> Envelope<T> {
    pub fn with_data(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
        }
    }
}
