// src/domain/resource.rs
//
// Resource envelope
//
// Every catalog fetch produces a short sequence of these values:
// one Loading, then at most one terminal value (Success or Error).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resource<T> {
    Loading,
    Success { data: T },
    Error { message: String, data: Option<T> },
}

impl<T> Resource<T> {
    pub fn success(data: T) -> Self {
        Resource::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Resource::Error {
            message: message.into(),
            data: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    /// Success and Error end a fetch; nothing may follow them.
    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Resource::Loading => None,
            Resource::Success { data } => Some(data),
            Resource::Error { data, .. } => data.as_ref(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Resource::Error { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        match self {
            Resource::Loading => None,
            Resource::Success { data } => Some(data),
            Resource::Error { data, .. } => data,
        }
    }

    pub fn map<U, F>(self, f: F) -> Resource<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Resource::Loading => Resource::Loading,
            Resource::Success { data } => Resource::Success { data: f(data) },
            Resource::Error { message, data } => Resource::Error {
                message,
                data: data.map(f),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_is_not_terminal() {
        let loading: Resource<u32> = Resource::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
        assert!(loading.data().is_none());
    }

    #[test]
    fn test_success_and_error_are_terminal() {
        assert!(Resource::success(3).is_terminal());
        assert!(Resource::<u32>::error("boom").is_terminal());
        assert_eq!(Resource::<u32>::error("boom").message(), Some("boom"));
    }

    #[test]
    fn test_map_keeps_message_and_transforms_data() {
        let err = Resource::Error {
            message: "stale".to_string(),
            data: Some(2),
        };
        let mapped = err.map(|n| n * 10);
        assert_eq!(mapped.data(), Some(&20));
        assert_eq!(mapped.message(), Some("stale"));
        assert_eq!(Resource::success("a").map(str::len).into_data(), Some(1));
    }

    #[test]
    fn test_serialized_shape_is_tagged() {
        let json = serde_json::to_value(Resource::success(7)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"], 7);
    }
}
