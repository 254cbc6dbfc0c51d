use reqwest::StatusCode;

/// The value delivered for a successful request.
///
/// Some endpoints answer with an empty body where the status code is the answer, e.g. `204`
/// after deleting a listing. When the body is empty, or decodes to `null`, `false`, `0` or
/// `""`, the status code is delivered instead of a decoded body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// The decoded response body.
    Data(T),
    /// The status code of a response without a body.
    Status(StatusCode),
}

impl<T> Payload<T> {
    /// The decoded body, if there was one.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Status(_) => None,
        }
    }

    /// Converts into the decoded body, if there was one.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Data(data) => Some(data),
            Self::Status(_) => None,
        }
    }

    /// The status code, if the response had no body.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Data(_) => None,
            Self::Status(status) => Some(*status),
        }
    }
}
