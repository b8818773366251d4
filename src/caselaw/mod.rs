mod judgment;
mod render;
mod text;
#[cfg(test)]
mod tests;

use anyhow::{Context, Result};
use roxmltree::{Document, ParsingOptions};

use judgment::{CaseRecord, JudgmentExtractor};

pub use render::render_case_html;

#[derive(Debug)]
pub struct CaseLawParser {
    extractor: JudgmentExtractor,
}

impl CaseLawParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: JudgmentExtractor::new()?,
        })
    }

    pub fn parse_xml(&self, xml: &str) -> Result<CaseRecord> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document =
            Document::parse_with_options(xml, options).context("failed to parse judgment XML")?;
        Ok(self.extractor.extract(document.root_element()))
    }
}
