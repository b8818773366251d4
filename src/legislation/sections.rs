use super::markers::{MarkerRules, is_group_title_marker};
use super::node::MarkupNode;
use super::table::extract_table;
use super::text::{first_number, normalize_inline};
use crate::model::{Section, Table};

#[derive(Debug, Default, Clone, PartialEq)]
struct OpenSection {
    key: Option<String>,
    title: String,
    content: String,
    tables: Vec<Table>,
}

impl OpenSection {
    fn into_section(self) -> Section {
        Section {
            title: self.title,
            key: self.key,
            content: self.content,
            tables: self.tables,
            images: Vec::new(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SegmenterState {
    open: Option<OpenSection>,
    capture_text: bool,
    committed: Vec<Section>,
}

impl SegmenterState {
    fn commit_open(&mut self) {
        if let Some(section) = self.open.take() {
            self.committed.push(section.into_section());
        }
    }

    pub fn finish(mut self) -> Vec<Section> {
        self.commit_open();
        self.committed
    }
}

pub struct SectionSegmenter<'a> {
    rules: &'a MarkerRules,
}

impl<'a> SectionSegmenter<'a> {
    pub fn new(rules: &'a MarkerRules) -> Self {
        Self { rules }
    }

    pub fn segment<N: MarkupNode>(&self, container: &N) -> Vec<Section> {
        let mut state = SegmenterState::default();

        for child in container.children() {
            let Some(name) = child.name() else {
                continue;
            };

            if name == "div" {
                for inner in child.children() {
                    if inner.is_element() {
                        self.visit(&mut state, &inner);
                    }
                }
            } else {
                self.visit(&mut state, &child);
            }
        }

        state.finish()
    }

    pub fn visit<N: MarkupNode>(&self, state: &mut SegmenterState, node: &N) {
        if self.rules.is_section_boundary(node) {
            state.commit_open();
            state.open = Some(OpenSection {
                key: self.section_key(node),
                ..OpenSection::default()
            });
            state.capture_text = false;
        }

        if let Some(table) = extract_table(node)
            && let Some(open) = state.open.as_mut()
        {
            open.tables.push(table);
        }

        let Some(open) = state.open.as_mut() else {
            return;
        };

        if let Some(title_node) = node.find(|candidate| is_group_title_marker(candidate)) {
            open.title = normalize_inline(&title_node.text());
            state.capture_text = true;
        } else if state.capture_text {
            open.content.push_str(&normalize_inline(&node.text()));
            open.content.push('\n');
        }
    }

    fn section_key<N: MarkupNode>(&self, node: &N) -> Option<String> {
        if let Some(id) = node.attribute("id") {
            let parts = id.split('-').collect::<Vec<&str>>();
            if parts.len() == 2 {
                return Some(parts[1].to_string());
            }
        }

        first_number(&normalize_inline(&node.text()).to_lowercase())
    }
}
