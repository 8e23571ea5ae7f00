//! JSON export of interpreted catalogs.
//!
//! Output files are named after the run's entry time:
//! `<directory>/<prefix>-<entry time>.json`, formatted with
//! [`OutputConfig::timestamp_format`].

use crate::config::OutputConfig;
use crate::models::WineRecord;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn output_path(config: &OutputConfig, entry_time: DateTime<Utc>) -> PathBuf {
    let stamp = entry_time.format(&config.timestamp_format);
    config
        .directory
        .join(format!("{}-{}.json", config.file_prefix, stamp))
}

pub fn to_json(records: &[WineRecord], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    json.context("error marshalling to JSON")
}

/// Serialize `records` and write them to `path` (mode 0644 on Unix).
pub fn write_records(
    path: &Path,
    records: &[WineRecord],
    pretty: bool,
    create_directory: bool,
) -> Result<()> {
    let json = to_json(records, pretty)?;

    if create_directory {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(path, json)
        .with_context(|| format!("error writing to file: {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {}", path.display()))?;
    }

    info!(path = %path.display(), records = records.len(), "catalog written");
    Ok(())
}
