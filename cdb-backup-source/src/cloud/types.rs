//! Wire types for the CDB "DescribeBackups" operation.
//!
//! The cloud API uses PascalCase field names and a `Response` envelope that
//! carries either the result payload or an API-level error object. Every item
//! field is optional at this layer; presence is enforced when the item is
//! decoded into a [`crate::lookup::BackupRecord`].

use serde::{Deserialize, Serialize};

/// Request body sent to the DescribeBackups action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupsRequest<'a> {
    pub instance_id: &'a str,
    pub limit: i64,
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct DescribeBackupsEnvelope {
    #[serde(rename = "Response")]
    pub response: DescribeBackupsResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBackupsResponse {
    #[serde(default)]
    pub items: Option<Vec<BackupItem>>,

    #[serde(default)]
    pub total_count: Option<i64>,

    #[serde(default)]
    pub request_id: Option<String>,

    /// Present when the call failed at the API level (HTTP 200 with an
    /// error body).
    #[serde(default)]
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// One backup descriptor as reported by the service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BackupItem {
    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub finish_time: Option<String>,

    #[serde(default)]
    pub size: Option<i64>,

    #[serde(default)]
    pub backup_id: Option<i64>,

    /// Backup mode, e.g. "logical" or "physical"
    #[serde(rename = "Type", default)]
    pub backup_type: Option<String>,

    #[serde(default)]
    pub intranet_url: Option<String>,

    #[serde(default)]
    pub internet_url: Option<String>,

    #[serde(default)]
    pub creator: Option<String>,
}
