use anyhow::{Context, Result};
use regex::Regex;

use super::node::MarkupNode;
use super::text::normalize_inline;

#[derive(Debug)]
pub struct MarkerRules {
    heading_tag: Regex,
    boundary_heading_text: Regex,
    section_identifier: Regex,
}

impl MarkerRules {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading_tag: Regex::new(r"^h[1-6]").context("failed to compile heading tag regex")?,
            boundary_heading_text: Regex::new(r"^section *[0-9]+")
                .context("failed to compile section heading regex")?,
            section_identifier: Regex::new(r"^section[- ][0-9]+$")
                .context("failed to compile section identifier regex")?,
        })
    }

    pub fn is_boundary_heading<N: MarkupNode>(&self, node: &N) -> bool {
        let Some(name) = node.name() else {
            return false;
        };
        if !self.heading_tag.is_match(name) {
            return false;
        }

        let text = normalize_inline(&node.text()).to_lowercase();
        !text.is_empty() && self.boundary_heading_text.is_match(&text)
    }

    pub fn is_section_identifier(&self, id: &str) -> bool {
        self.section_identifier.is_match(id)
    }

    pub fn is_section_boundary<N: MarkupNode>(&self, node: &N) -> bool {
        self.is_boundary_heading(node)
            || node
                .attribute("id")
                .map(|id| self.is_section_identifier(id))
                .unwrap_or(false)
    }
}

pub fn is_container_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class == "DocContainer")
}

pub fn is_tabular_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class.contains("LegTabular"))
}

pub fn is_schedule_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class.contains("LegSchedule"))
}

pub fn is_group_title_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class.starts_with("LegP1GroupTitle") || class.contains("LegPblockTitle"))
}

pub fn is_image_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class.starts_with("LegDisplayImage"))
}

pub fn is_section_summary_marker<N: MarkupNode>(node: &N) -> bool {
    node.has_class(|class| class.starts_with("LegP1Container"))
}

pub fn is_enactment_date_marker<N: MarkupNode>(node: &N) -> bool {
    node.name() == Some("p") && node.has_class(|class| class.starts_with("LegDateOfEnactment"))
}

pub fn has_exact_class<N: MarkupNode>(node: &N, wanted: &str) -> bool {
    node.has_class(|class| class == wanted)
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::*;
    use crate::legislation::node::HtmlNode;

    fn first_body_child(document: &Html) -> HtmlNode<'_> {
        let root = HtmlNode::document_root(document);
        let body = root
            .find(|node| node.name() == Some("body"))
            .expect("parsed document has a body");
        body.children()
            .into_iter()
            .find(|node| node.is_element())
            .expect("body has an element child")
    }

    #[test]
    fn boundary_heading_requires_heading_tag_and_section_text() {
        let rules = MarkerRules::new().expect("marker regexes should compile");

        let heading = Html::parse_document("<h2>Section  4\n Powers</h2>");
        assert!(rules.is_boundary_heading(&first_body_child(&heading)));

        let paragraph = Html::parse_document("<p>Section 4</p>");
        assert!(!rules.is_boundary_heading(&first_body_child(&paragraph)));

        let other_heading = Html::parse_document("<h3>Schedule 1</h3>");
        assert!(!rules.is_boundary_heading(&first_body_child(&other_heading)));
    }

    #[test]
    fn section_identifier_accepts_hyphen_or_space_forms_only() {
        let rules = MarkerRules::new().expect("marker regexes should compile");
        assert!(rules.is_section_identifier("section-12"));
        assert!(rules.is_section_identifier("section 3"));
        assert!(!rules.is_section_identifier("section-12-a"));
        assert!(!rules.is_section_identifier("schedule-1"));
    }

    #[test]
    fn class_markers_match_token_prefixes_and_substrings() {
        let document = Html::parse_document(
            r#"<div class="LegP1GroupTitleFirst LegTabularWrapper LegScheduleFirst">x</div>"#,
        );
        let node = first_body_child(&document);
        assert!(is_group_title_marker(&node));
        assert!(is_tabular_marker(&node));
        assert!(is_schedule_marker(&node));
        assert!(!is_image_marker(&node));
        assert!(!is_container_marker(&node));
    }
}
