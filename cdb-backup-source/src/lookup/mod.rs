//! Backup list lookup.
//!
//! The one operation this data source performs: validate the request, fetch
//! the backup descriptors for an instance in a single remote call, decode
//! them into flat records, derive the aggregate result-set identifier, and
//! optionally export the record list to a file.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

use crate::cloud::{BackupItem, DescribeBackups};
use crate::export;
use crate::utils::errors::{LookupError, Result};

/// Smallest accepted `max_number`.
pub const MIN_MAX_NUMBER: i64 = 1;
/// Largest accepted `max_number`.
pub const MAX_MAX_NUMBER: i64 = 10000;
/// Used when the caller does not specify `max_number`.
pub const DEFAULT_MAX_NUMBER: i64 = 10;

/// One backup event, flattened for the host configuration engine.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BackupRecord {
    pub time: String,
    pub finish_time: String,
    pub size: i64,
    pub backup_id: i64,
    pub backup_model: String,
    pub intranet_url: String,
    pub internet_url: String,
    pub creator: String,
}

/// Validated lookup input. Construction through [`LookupRequest::new`] is the
/// only path, so an out-of-range `max_number` or empty instance id never
/// reaches the remote call.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    instance_id: String,
    max_number: i64,
    result_output_file: Option<PathBuf>,
}

impl LookupRequest {
    pub fn new(
        instance_id: impl Into<String>,
        max_number: Option<i64>,
        result_output_file: Option<PathBuf>,
    ) -> Result<Self> {
        let instance_id = instance_id.into();
        if instance_id.trim().is_empty() {
            return Err(LookupError::InvalidRequest(
                "instance id must not be empty".to_string(),
            ));
        }

        let max_number = max_number.unwrap_or(DEFAULT_MAX_NUMBER);
        if !(MIN_MAX_NUMBER..=MAX_MAX_NUMBER).contains(&max_number) {
            return Err(LookupError::InvalidRequest(format!(
                "max_number {} out of range [{}, {}]",
                max_number, MIN_MAX_NUMBER, MAX_MAX_NUMBER
            )));
        }

        Ok(Self {
            instance_id,
            max_number,
            result_output_file,
        })
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    pub fn max_number(&self) -> i64 {
        self.max_number
    }

    pub fn result_output_file(&self) -> Option<&Path> {
        self.result_output_file.as_deref()
    }
}

/// Ordered record list plus the aggregate identifier derived from it.
/// Serializes with the attribute names the host engine expects.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResult {
    #[serde(rename = "list")]
    pub records: Vec<BackupRecord>,
    pub id: String,
}

/// Stateless lookup over any [`DescribeBackups`] implementation.
pub struct BackupListLookup<S: DescribeBackups> {
    service: S,
}

impl<S: DescribeBackups> BackupListLookup<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Run one lookup. The whole operation is re-executed on every call;
    /// nothing is cached between invocations.
    ///
    /// Fails with `RemoteCall` if the upstream call fails and with
    /// `MalformedRecord` if a descriptor is missing a required field. A
    /// failed file export is logged and does not fail the lookup.
    pub async fn lookup(&self, request_id: Uuid, request: &LookupRequest) -> Result<LookupResult> {
        info!(
            %request_id,
            instance_id = request.instance_id(),
            limit = request.max_number(),
            "looking up instance backups"
        );

        let items = self
            .service
            .describe_backups(request_id, request.instance_id(), request.max_number())
            .await?;

        let mut records = Vec::with_capacity(items.len());
        let mut ids = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            let record = BackupRecord::from_item(index, item)?;
            ids.push(record.backup_id.to_string());
            records.push(record);
        }

        let id = ids_hash(&ids);
        info!(%request_id, count = records.len(), id = %id, "lookup complete");

        if let Some(path) = request.result_output_file() {
            // Best-effort side channel, never fails the lookup
            if let Err(e) = export::write_records(path, &records) {
                error!(
                    %request_id,
                    path = %path.display(),
                    "failed to write result output file: {}",
                    e
                );
            }
        }

        Ok(LookupResult { records, id })
    }
}

impl BackupRecord {
    /// Decode one wire item. Every field is required; a missing one is a
    /// `MalformedRecord` error naming the wire field and the item's index.
    fn from_item(index: usize, item: BackupItem) -> Result<Self> {
        Ok(BackupRecord {
            time: require(item.date, "Date", index)?,
            finish_time: require(item.finish_time, "FinishTime", index)?,
            size: require(item.size, "Size", index)?,
            backup_id: require(item.backup_id, "BackupId", index)?,
            backup_model: require(item.backup_type, "Type", index)?,
            intranet_url: normalize_url(require(item.intranet_url, "IntranetUrl", index)?),
            internet_url: normalize_url(require(item.internet_url, "InternetUrl", index)?),
            creator: require(item.creator, "Creator", index)?,
        })
    }
}

fn require<T>(value: Option<T>, field: &'static str, index: usize) -> Result<T> {
    value.ok_or(LookupError::MalformedRecord { field, index })
}

/// Undo the upstream API's double-escaping of ampersands in URL query
/// strings: the decoded string still contains the six-character sequence
/// `&` where a literal `&` belongs. Applies to the URL fields only.
fn normalize_url(url: String) -> String {
    url.replace("\\u0026", "&")
}

/// Aggregate identifier for a result set: the backup ids in response order,
/// each in decimal string form, concatenated and hashed. Stable across runs
/// for identical backend state; the empty result set hashes the empty string.
pub fn ids_hash(ids: &[String]) -> String {
    blake3::hash(ids.concat().as_bytes()).to_string()
}
