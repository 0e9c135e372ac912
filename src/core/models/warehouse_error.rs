use thiserror::Error;

#[derive(Debug, Error)]
pub enum WarehouseError {
    #[error("search query is empty")]
    EmptyQuery,

    #[error("request to {endpoint} failed")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not obtain access token: {0}")]
    Auth(String),
}

impl WarehouseError {
    pub fn from_request(endpoint: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            WarehouseError::Timeout(endpoint.to_string())
        } else {
            WarehouseError::Http {
                endpoint: endpoint.to_string(),
                source,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_code_and_body() {
        let error = WarehouseError::Status {
            endpoint: "searchIndexEndpoint".to_string(),
            status: 403,
            body: "PERMISSION_DENIED".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "searchIndexEndpoint returned HTTP 403: PERMISSION_DENIED"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error = WarehouseError::Decode {
            endpoint: "generateRetrievalUrl".to_string(),
            source,
        };

        assert!(std::error::Error::source(&error).is_some());
    }
}
