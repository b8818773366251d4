use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::{InventoryArgs, Pipeline};
use crate::model::{InputEntry, InputInventoryManifest};
use crate::util::{now_utc_string, sha256_file, write_json_pretty};

pub const INVENTORY_FILE_NAME: &str = "input_inventory.json";

pub fn run(args: InventoryArgs) -> Result<()> {
    let manifest = build_manifest(&args.input_root, args.pipeline)?;

    if args.dry_run {
        info!(
            input_count = manifest.input_count,
            source = %manifest.source_directory,
            "inventory dry-run complete"
        );
        return Ok(());
    }

    let manifest_path = args
        .manifest_path
        .unwrap_or_else(|| args.cache_root.join("manifests").join(INVENTORY_FILE_NAME));

    write_json_pretty(&manifest_path, &manifest)?;
    info!(path = %manifest_path.display(), "wrote inventory manifest");
    info!(input_count = manifest.input_count, "inventory completed");

    Ok(())
}

pub fn build_manifest(input_root: &Path, pipeline: Pipeline) -> Result<InputInventoryManifest> {
    let extension = pipeline.input_extension().trim_start_matches('.');

    let mut input_paths = Vec::new();
    discover_inputs(input_root, extension, &mut input_paths)?;

    if input_paths.is_empty() {
        bail!(
            "no {} inputs found in {}",
            pipeline.as_str(),
            input_root.display()
        );
    }

    let mut inputs = Vec::with_capacity(input_paths.len());
    for path in input_paths {
        let relative_path = path
            .strip_prefix(input_root)
            .with_context(|| format!("{} is outside {}", path.display(), input_root.display()))?
            .display()
            .to_string();
        let size_bytes = fs::metadata(&path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        let sha256 = sha256_file(&path)?;

        inputs.push(InputEntry {
            relative_path,
            size_bytes,
            sha256,
        });
    }

    inputs.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    Ok(InputInventoryManifest {
        manifest_version: 1,
        generated_at: now_utc_string(),
        pipeline: pipeline.as_str().to_string(),
        source_directory: input_root.display().to_string(),
        input_count: inputs.len(),
        inputs,
    })
}

fn discover_inputs(directory: &Path, extension: &str, found: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("failed to read {}", directory.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", directory.display()))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to inspect file type: {}", path.display()))?;

        if file_type.is_dir() {
            discover_inputs(&path, extension, found)?;
            continue;
        }

        if !file_type.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(extension))
            .unwrap_or(false);

        if matches {
            found.push(path);
        }
    }

    Ok(())
}
