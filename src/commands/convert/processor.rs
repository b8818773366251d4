use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::caselaw::{CaseLawParser, render_case_html};
use crate::cli::Pipeline;
use crate::legislation::LegislationParser;
use crate::model::{DocumentStats, StatuteRecord};
use crate::util::{write_json_pretty, write_text};

pub trait DocumentProcessor {
    fn pipeline(&self) -> Pipeline;

    fn process(&self, input_path: &Path, output_path: &Path) -> Result<DocumentStats>;
}

pub fn processor_for(pipeline: Pipeline) -> Result<Box<dyn DocumentProcessor>> {
    let processor: Box<dyn DocumentProcessor> = match pipeline {
        Pipeline::Legislation => Box::new(LegislationProcessor::new()?),
        Pipeline::CaseLaw => Box::new(CaseLawProcessor::new()?),
    };
    Ok(processor)
}

pub struct LegislationProcessor {
    parser: LegislationParser,
}

impl LegislationProcessor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: LegislationParser::new().context("failed to build legislation parser")?,
        })
    }
}

impl DocumentProcessor for LegislationProcessor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::Legislation
    }

    fn process(&self, input_path: &Path, output_path: &Path) -> Result<DocumentStats> {
        let html = read_input(input_path)?;
        let record = self
            .parser
            .parse_html(&html, &input_path.display().to_string());
        write_json_pretty(output_path, &record)?;
        Ok(statute_stats(&record))
    }
}

pub fn statute_stats(record: &StatuteRecord) -> DocumentStats {
    let section_tables = record
        .sections
        .iter()
        .map(|section| section.tables.len())
        .sum::<usize>();
    let section_images = record
        .sections
        .iter()
        .map(|section| section.images.len())
        .sum::<usize>();

    DocumentStats {
        sections: record.sections.len(),
        tables: section_tables + record.schedule.tables.len(),
        images: section_images + record.schedule.images.len(),
    }
}

pub struct CaseLawProcessor {
    parser: CaseLawParser,
}

impl CaseLawProcessor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: CaseLawParser::new().context("failed to build case-law parser")?,
        })
    }
}

impl DocumentProcessor for CaseLawProcessor {
    fn pipeline(&self) -> Pipeline {
        Pipeline::CaseLaw
    }

    fn process(&self, input_path: &Path, output_path: &Path) -> Result<DocumentStats> {
        let xml = read_input(input_path)?;
        let record = self
            .parser
            .parse_xml(&xml)
            .with_context(|| format!("failed to convert {}", input_path.display()))?;
        write_text(output_path, &render_case_html(&record))?;

        Ok(DocumentStats {
            sections: record.paragraph_count,
            ..DocumentStats::default()
        })
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
