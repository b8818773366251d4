use anyhow::{Result, bail};
use chrono::Utc;
use tracing::info;

use super::{convert_tree, processor_for};
use crate::cli::ConvertArgs;
use crate::model::{ConvertPaths, ConvertRunManifest};
use crate::util::{now_utc_string, utc_compact_string, write_json_pretty};

pub fn run(args: ConvertArgs) -> Result<()> {
    let started_ts = Utc::now();
    let started_at = now_utc_string();
    let run_id = format!("run-{}", utc_compact_string(started_ts));

    if !args.input_root.is_dir() {
        bail!("input root is not a directory: {}", args.input_root.display());
    }

    let manifest_path = args.manifest_path.clone().unwrap_or_else(|| {
        args.cache_root.join("manifests").join(format!(
            "convert_run_{}.json",
            utc_compact_string(started_ts)
        ))
    });

    info!(
        input_root = %args.input_root.display(),
        output_root = %args.output_root.display(),
        pipeline = args.pipeline.as_str(),
        run_id = %run_id,
        "starting convert"
    );

    let processor = processor_for(args.pipeline)?;
    let outcome = convert_tree(processor.as_ref(), &args.input_root, &args.output_root)?;

    let status = if outcome.counts.failed_count == 0 {
        "completed"
    } else {
        "completed_with_failures"
    };

    let manifest = ConvertRunManifest {
        manifest_version: 1,
        run_id,
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        pipeline: args.pipeline.as_str().to_string(),
        status: status.to_string(),
        started_at,
        updated_at: now_utc_string(),
        command: render_convert_command(&args),
        paths: ConvertPaths {
            input_root: args.input_root.display().to_string(),
            output_root: args.output_root.display().to_string(),
            manifest_path: manifest_path.display().to_string(),
        },
        counts: outcome.counts,
        documents: outcome.documents,
        warnings: outcome.warnings,
    };

    write_json_pretty(&manifest_path, &manifest)?;

    info!(path = %manifest_path.display(), "wrote convert run manifest");
    info!(
        processed = manifest.counts.processed_count,
        copied = manifest.counts.copied_count,
        failed = manifest.counts.failed_count,
        sections = manifest.counts.section_count,
        status = %manifest.status,
        "convert completed"
    );

    Ok(())
}

pub fn render_convert_command(args: &ConvertArgs) -> String {
    let mut command = vec![
        "legalconv".to_string(),
        "convert".to_string(),
        "--input-root".to_string(),
        args.input_root.display().to_string(),
        "--output-root".to_string(),
        args.output_root.display().to_string(),
        "--pipeline".to_string(),
        args.pipeline.as_str().to_string(),
        "--cache-root".to_string(),
        args.cache_root.display().to_string(),
    ];

    if let Some(path) = &args.manifest_path {
        command.push("--manifest-path".to_string());
        command.push(path.display().to_string());
    }

    command.join(" ")
}
