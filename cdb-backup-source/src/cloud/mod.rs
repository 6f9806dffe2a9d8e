//! Cloud API access for the CDB service.
//!
//! The lookup depends on the [`DescribeBackups`] trait only; [`CdbClient`] is
//! the HTTP implementation talking to the real cloud endpoint.

pub mod client;
pub mod types;

pub use client::CdbClient;
pub use types::{ApiError, BackupItem, DescribeBackupsRequest};

use async_trait::async_trait;
use uuid::Uuid;

use crate::utils::errors::Result;

/// Upstream dependency contract: one unary "describe backups by instance id"
/// operation. Returns backup descriptors in the order the service reports
/// them; at most `limit` items are requested.
#[async_trait]
pub trait DescribeBackups {
    async fn describe_backups(
        &self,
        request_id: Uuid,
        instance_id: &str,
        limit: i64,
    ) -> Result<Vec<BackupItem>>;
}
