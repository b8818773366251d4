mod dates;
mod markers;
mod metadata;
mod node;
mod schedule;
mod sections;
mod table;
mod text;

use anyhow::Result;
use scraper::Html;

use crate::model::{Schedule, StatuteRecord};

use dates::DateNormalizer;
use markers::{MarkerRules, is_container_marker};
use metadata::extract_metadata;
use node::{HtmlNode, MarkupNode};
use schedule::extract_schedule;
use sections::SectionSegmenter;

#[derive(Debug)]
pub struct LegislationParser {
    markers: MarkerRules,
    dates: DateNormalizer,
}

impl LegislationParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            markers: MarkerRules::new()?,
            dates: DateNormalizer::new()?,
        })
    }

    pub fn parse_html(&self, html: &str, context: &str) -> StatuteRecord {
        let document = Html::parse_document(html);
        self.build_record(&HtmlNode::document_root(&document), context)
    }

    pub fn build_record<N: MarkupNode>(&self, root: &N, context: &str) -> StatuteRecord {
        let metadata = extract_metadata(root);
        let effective_date = metadata
            .raw_effective_date
            .as_deref()
            .map(|raw| self.dates.normalize(raw, context))
            .unwrap_or_default();

        let (sections, schedule) = match root.find(|node| is_container_marker(node)) {
            Some(container) => (
                SectionSegmenter::new(&self.markers).segment(&container),
                extract_schedule(&container),
            ),
            None => (Vec::new(), Schedule::default()),
        };

        StatuteRecord {
            title: metadata.title,
            effective_date,
            list_of_sections: metadata.list_of_sections,
            preamble: metadata.preamble,
            schedule,
            pre_sections_text: metadata.pre_sections_text,
            sections,
            statute_id: metadata.statute_id,
            is_effective_date_unavailable: metadata.raw_effective_date.is_none(),
            ..StatuteRecord::default()
        }
    }
}
