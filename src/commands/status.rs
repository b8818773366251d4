use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::cli::StatusArgs;
use crate::commands::inventory::INVENTORY_FILE_NAME;
use crate::model::{ConvertRunManifest, InputInventoryManifest};

pub fn run(args: StatusArgs) -> Result<()> {
    let manifest_dir = args.cache_root.join("manifests");
    let inventory_path = manifest_dir.join(INVENTORY_FILE_NAME);

    info!(cache_root = %args.cache_root.display(), "status requested");

    if inventory_path.exists() {
        let inventory: InputInventoryManifest = read_manifest(&inventory_path)?;
        info!(
            generated_at = %inventory.generated_at,
            pipeline = %inventory.pipeline,
            source = %inventory.source_directory,
            input_count = inventory.input_count,
            "loaded inventory manifest"
        );
    } else {
        warn!(path = %inventory_path.display(), "inventory manifest missing");
    }

    match latest_convert_manifest(&manifest_dir)? {
        Some(path) => {
            let manifest: ConvertRunManifest = read_manifest(&path)?;
            info!(
                path = %path.display(),
                run_id = %manifest.run_id,
                pipeline = %manifest.pipeline,
                status = %manifest.status,
                started_at = %manifest.started_at,
                updated_at = %manifest.updated_at,
                processed = manifest.counts.processed_count,
                copied = manifest.counts.copied_count,
                failed = manifest.counts.failed_count,
                sections = manifest.counts.section_count,
                warnings = manifest.warnings.len(),
                "loaded convert run manifest"
            );
        }
        None => warn!(path = %manifest_dir.display(), "no convert run manifest found"),
    }

    Ok(())
}

fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

// Newest `convert_run_<stamp>.json`; compact UTC stamps sort lexically.
pub fn latest_convert_manifest(manifest_dir: &Path) -> Result<Option<PathBuf>> {
    if !manifest_dir.is_dir() {
        return Ok(None);
    }

    let entries = fs::read_dir(manifest_dir)
        .with_context(|| format!("failed to read {}", manifest_dir.display()))?;

    let mut latest: Option<PathBuf> = None;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("failed to read entry in {}", manifest_dir.display()))?;
        let path = entry.path();
        let is_run_manifest = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with("convert_run_") && name.ends_with(".json"))
            .unwrap_or(false);

        if is_run_manifest && latest.as_ref().is_none_or(|current| path > *current) {
            latest = Some(path);
        }
    }

    Ok(latest)
}
