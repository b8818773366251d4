use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::processor::DocumentProcessor;
use crate::model::{ConvertCounts, ConvertedDocument};
use crate::util::{ensure_directory, sha256_file};

#[derive(Debug, Default)]
pub struct WalkOutcome {
    pub counts: ConvertCounts,
    pub documents: Vec<ConvertedDocument>,
    pub warnings: Vec<String>,
}

pub fn convert_tree(
    processor: &dyn DocumentProcessor,
    input_root: &Path,
    output_root: &Path,
) -> Result<WalkOutcome> {
    let mut walker = TreeWalker {
        processor,
        input_root,
        output_root,
        outcome: WalkOutcome::default(),
    };

    ensure_directory(output_root)?;
    walker.walk_directory(input_root)?;

    Ok(walker.outcome)
}

struct TreeWalker<'a> {
    processor: &'a dyn DocumentProcessor,
    input_root: &'a Path,
    output_root: &'a Path,
    outcome: WalkOutcome,
}

impl TreeWalker<'_> {
    fn walk_directory(&mut self, directory: &Path) -> Result<()> {
        for path in sorted_entries(directory)? {
            let relative = path
                .strip_prefix(self.input_root)
                .with_context(|| format!("{} is outside the input root", path.display()))?
                .to_path_buf();

            if path.is_dir() {
                ensure_directory(&self.output_root.join(&relative))?;
                self.outcome.counts.directory_count += 1;
                self.walk_directory(&path)?;
            } else if path.is_file() {
                self.visit_file(&path, &relative);
            } else {
                debug!(path = %path.display(), "skipping non-regular entry");
            }
        }

        Ok(())
    }

    fn visit_file(&mut self, path: &Path, relative: &Path) {
        let relative_display = relative.display().to_string();

        if self.accepts(path) {
            let output_path = self
                .output_root
                .join(relative)
                .with_extension(extension_without_dot(self.processor.pipeline().output_extension()));

            match self.convert_file(path, &output_path, &relative_display) {
                Ok(document) => {
                    debug!(
                        path = %relative_display,
                        sections = document.section_count,
                        "converted document"
                    );
                    self.outcome.counts.processed_count += 1;
                    self.outcome.counts.section_count += document.section_count;
                    self.outcome.counts.table_count += document.table_count;
                    self.outcome.counts.image_count += document.image_count;
                    self.outcome.documents.push(document);
                }
                Err(err) => self.record_failure(&relative_display, &err),
            }
            return;
        }

        let target = self.output_root.join(relative);
        match fs::copy(path, &target)
            .with_context(|| format!("failed to copy {} to {}", path.display(), target.display()))
        {
            Ok(_) => self.outcome.counts.copied_count += 1,
            Err(err) => self.record_failure(&relative_display, &err),
        }
    }

    fn convert_file(
        &self,
        path: &Path,
        output_path: &Path,
        relative_display: &str,
    ) -> Result<ConvertedDocument> {
        let stats = self.processor.process(path, output_path)?;

        Ok(ConvertedDocument {
            relative_path: relative_display.to_string(),
            output_path: output_path.display().to_string(),
            sha256: sha256_file(path)?,
            section_count: stats.sections,
            table_count: stats.tables,
            image_count: stats.images,
        })
    }

    fn accepts(&self, path: &Path) -> bool {
        let expected = extension_without_dot(self.processor.pipeline().input_extension());
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(expected))
            .unwrap_or(false)
    }

    fn record_failure(&mut self, relative_display: &str, err: &anyhow::Error) {
        warn!(path = %relative_display, error = %format!("{err:#}"), "file failed, continuing");
        self.outcome.counts.failed_count += 1;
        self.outcome
            .warnings
            .push(format!("{relative_display}: {err:#}"));
    }
}

fn sorted_entries(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("failed to read {}", directory.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read entry in {}", directory.display()))?;
        paths.push(entry.path());
    }
    paths.sort();

    if paths.is_empty() {
        debug!(path = %directory.display(), "directory is empty");
    }

    Ok(paths)
}

fn extension_without_dot(extension: &str) -> &str {
    extension.trim_start_matches('.')
}
