//! HTTP client for the CDB cloud API.
//!
//! One action is implemented: `DescribeBackups`. The client issues a single
//! token-authenticated JSON POST per call — no pagination, no retries — and
//! maps every transport- and API-level failure into a `RemoteCall` error
//! naming the failing action.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use crate::cloud::types::{BackupItem, DescribeBackupsEnvelope, DescribeBackupsRequest};
use crate::cloud::DescribeBackups;
use crate::config::ApiConfig;
use crate::utils::errors::{LookupError, Result};

/// Action name, used both as a request header and in error messages.
pub const DESCRIBE_BACKUPS_ACTION: &str = "DescribeBackups";

/// API version the request wire format corresponds to.
const API_VERSION: &str = "2017-03-20";

pub struct CdbClient {
    http: reqwest::Client,
    endpoint: String,
    region: String,
    token: String,
}

impl CdbClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LookupError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            region: config.region.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl DescribeBackups for CdbClient {
    async fn describe_backups(
        &self,
        request_id: Uuid,
        instance_id: &str,
        limit: i64,
    ) -> Result<Vec<BackupItem>> {
        let payload = DescribeBackupsRequest { instance_id, limit };

        debug!(%request_id, instance_id, limit, "sending {} request", DESCRIBE_BACKUPS_ACTION);

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-TC-Action", DESCRIBE_BACKUPS_ACTION)
            .header("X-TC-Version", API_VERSION)
            .header("X-TC-Region", &self.region)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| remote_call_error(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(remote_call_error(format!("HTTP status {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| remote_call_error(format!("failed to read response body: {}", e)))?;

        decode_envelope(&body)
    }
}

/// Decode the response envelope, surfacing API-level errors.
fn decode_envelope(body: &str) -> Result<Vec<BackupItem>> {
    let envelope: DescribeBackupsEnvelope = serde_json::from_str(body)
        .map_err(|e| remote_call_error(format!("invalid response body: {}", e)))?;

    if let Some(err) = envelope.response.error {
        return Err(remote_call_error(format!("{} ({})", err.message, err.code)));
    }

    Ok(envelope.response.items.unwrap_or_default())
}

fn remote_call_error(detail: String) -> LookupError {
    LookupError::RemoteCall(format!("api[{}] failed: {}", DESCRIBE_BACKUPS_ACTION, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope_with_items() -> Result<()> {
        let body = r#"{
            "Response": {
                "Items": [
                    {
                        "Date": "2026-08-01 03:00:00",
                        "FinishTime": "2026-08-01 03:05:12",
                        "Size": 1048576,
                        "BackupId": 101,
                        "Type": "logical",
                        "IntranetUrl": "https://intranet.example/b?id=101",
                        "InternetUrl": "https://internet.example/b?id=101",
                        "Creator": "system"
                    }
                ],
                "TotalCount": 1,
                "RequestId": "d3f6a2c4"
            }
        }"#;

        let items = decode_envelope(body)?;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].backup_id, Some(101));
        assert_eq!(items[0].backup_type.as_deref(), Some("logical"));
        assert_eq!(items[0].creator.as_deref(), Some("system"));
        Ok(())
    }

    #[test]
    fn test_decode_envelope_with_api_error() {
        let body = r#"{
            "Response": {
                "Error": {
                    "Code": "AuthFailure.TokenFailure",
                    "Message": "token has expired"
                },
                "RequestId": "d3f6a2c4"
            }
        }"#;

        let err = decode_envelope(body).unwrap_err();
        match err {
            LookupError::RemoteCall(msg) => {
                assert!(msg.contains("api[DescribeBackups]"));
                assert!(msg.contains("token has expired"));
                assert!(msg.contains("AuthFailure.TokenFailure"));
            }
            other => panic!("expected RemoteCall, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_envelope_empty_items() -> Result<()> {
        let body = r#"{"Response": {"TotalCount": 0, "RequestId": "d3f6a2c4"}}"#;
        let items = decode_envelope(body)?;
        assert!(items.is_empty());
        Ok(())
    }

    #[test]
    fn test_decode_envelope_garbage_body() {
        let err = decode_envelope("<html>504 Gateway Timeout</html>").unwrap_err();
        assert!(matches!(err, LookupError::RemoteCall(_)));
    }
}
