use super::markers::{has_exact_class, is_enactment_date_marker, is_section_summary_marker};
use super::node::MarkupNode;
use super::text::normalize_inline;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatuteMetadata {
    pub title: String,
    pub raw_effective_date: Option<String>,
    pub list_of_sections: String,
    pub preamble: String,
    pub pre_sections_text: String,
    pub statute_id: String,
}

pub fn extract_metadata<N: MarkupNode>(root: &N) -> StatuteMetadata {
    StatuteMetadata {
        title: root
            .find(|node| node.name() == Some("title"))
            .map(|node| node.text().trim().to_string())
            .unwrap_or_default(),
        raw_effective_date: root
            .find(|node| is_enactment_date_marker(node))
            .map(|node| node.text().replace(['[', ']'], " ").trim().to_string()),
        list_of_sections: root
            .find_all(|node| is_section_summary_marker(node))
            .iter()
            .map(|node| format!("{}\n", normalize_inline(&node.text())))
            .collect(),
        preamble: root
            .find(|node| has_exact_class(node, "LegLongTitle"))
            .map(|node| node.text().trim().to_string())
            .unwrap_or_default(),
        pre_sections_text: root
            .find(|node| has_exact_class(node, "LegPrelims"))
            .map(|node| normalize_inline(&node.text()))
            .unwrap_or_default(),
        statute_id: root
            .find(|node| has_exact_class(node, "LegNo"))
            .map(|node| normalize_inline(&node.text()))
            .unwrap_or_default(),
    }
}
