use anyhow::{Context, Result};
use regex::Regex;
use roxmltree::Node;

use super::text::{
    escape_html, first_akn, flat_text, is_akn, paragraph, paragraphs_html, text_paragraphs,
};

const CASE_NUMBER_LABEL: &str = "Case No:";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CaseRecord {
    pub title: String,
    pub date: String,
    pub case_id: String,
    pub court: String,
    pub judges: String,
    pub presiding_judge: String,
    pub parties: String,
    pub neutral_citation: String,
    pub headnotes: String,
    pub content: String,
    pub paragraph_count: usize,
}

#[derive(Debug)]
pub struct JudgmentExtractor {
    non_word: Regex,
    versus: Regex,
}

impl JudgmentExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            non_word: Regex::new(r"\W+").context("failed to compile paragraph number regex")?,
            versus: Regex::new(r" [Vv] ").context("failed to compile party split regex")?,
        })
    }

    pub fn extract(&self, root: Node) -> CaseRecord {
        let title = root
            .descendants()
            .find(|node| is_akn(node, "FRBRname"))
            .and_then(|node| node.attribute("value"))
            .unwrap_or_default()
            .to_string();
        let header = first_akn(root, "header");

        let (content, paragraph_count) = match first_akn(root, "decision") {
            Some(decision) => self.decision_content(decision),
            None => (String::new(), 0),
        };

        CaseRecord {
            date: root
                .descendants()
                .find(|node| is_akn(node, "FRBRdate"))
                .and_then(|node| node.attribute("date"))
                .map(paragraph)
                .unwrap_or_default(),
            case_id: header.map(case_number).unwrap_or_default(),
            court: court(root),
            judges: judges(root, header),
            presiding_judge: presiding_judge(root, header),
            parties: self.parties(header, &title),
            neutral_citation: first_akn(root, "neutralCitation")
                .map(|node| paragraph(&flat_text(node)))
                .unwrap_or_default(),
            headnotes: header.map(headnotes).unwrap_or_default(),
            title: paragraph(&title),
            content,
            paragraph_count,
        }
    }

    fn decision_content(&self, decision: Node) -> (String, usize) {
        let mut html = String::new();
        let mut count = 0;

        for child in decision.children().filter(Node::is_element) {
            let name = child.tag_name().name();
            if name.ends_with("paragraph") {
                html.push_str(&self.paragraph_html(child));
                count += 1;
            } else if name.ends_with("level") {
                let (level_html, level_count) = self.level_html(child);
                html.push_str(&format!("<div>{level_html}</div>"));
                count += level_count;
            }
        }

        (html, count)
    }

    fn level_html(&self, level: Node) -> (String, usize) {
        let mut html = String::new();
        let mut count = 0;

        for child in level.children().filter(Node::is_element) {
            if child.tag_name().name().ends_with("paragraph") {
                html.push_str(&self.paragraph_html(child));
                count += 1;
            } else {
                html.push_str(&paragraphs_html(child));
            }
        }

        (html, count)
    }

    fn paragraph_html(&self, node: Node) -> String {
        let mut id = None;
        let mut text = None;

        for child in node.children().filter(Node::is_element) {
            if child.tag_name().name().ends_with("num") {
                if let Some(num) = child.text() {
                    id = Some(self.non_word.replace_all(num, "").into_owned());
                }
            } else {
                text = Some(flat_text(child));
            }
        }

        let body = escape_html(text.as_deref().unwrap_or_default());
        match id {
            Some(id) => format!("<p id=\"{}\">{body}</p>", escape_html(&id)),
            None => format!("<p>{body}</p>"),
        }
    }

    fn parties(&self, header: Option<Node>, title: &str) -> String {
        if let Some(header) = header {
            let fragments = header
                .descendants()
                .filter(|node| {
                    node.is_element() && {
                        let name = node.tag_name().name();
                        name.ends_with("role") || name.ends_with("party")
                    }
                })
                .map(paragraphs_html)
                .collect::<Vec<String>>();
            if fragments.len() >= 3 {
                return fragments.concat();
            }
        }

        let sides = self.versus.split(title).collect::<Vec<&str>>();
        if sides.len() > 1 {
            format!("{}{}{}", paragraph(sides[0]), paragraph("v"), paragraph(sides[1]))
        } else {
            paragraph(title)
        }
    }
}

fn header_paragraphs<'a, 'input>(header: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    header.descendants().filter(|node| is_akn(node, "p"))
}

fn case_number(header: Node) -> String {
    header_paragraphs(header)
        .map(flat_text)
        .filter(|text| text.contains(CASE_NUMBER_LABEL))
        .last()
        .map(|text| escape_html(text.replace(CASE_NUMBER_LABEL, "").trim()))
        .unwrap_or_default()
}

fn court(root: Node) -> String {
    let name = root
        .descendants()
        .find(|node| is_akn(node, "TLCOrganization"))
        .and_then(|node| node.attribute("shortForm").or_else(|| node.attribute("showAs")))
        .unwrap_or_default();
    paragraph(name)
}

fn headnotes(header: Node) -> String {
    header_paragraphs(header)
        .filter(|node| flat_text(*node).chars().any(|ch| ch.is_ascii_alphabetic()))
        .map(paragraphs_html)
        .collect::<Vec<String>>()
        .join(" ")
}

fn judge_elements<'a, 'input>(root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    root.descendants().filter(|node| is_akn(node, "judge")).collect()
}

fn judges(root: Node, header: Option<Node>) -> String {
    let elements = judge_elements(root);
    if !elements.is_empty() {
        return elements
            .into_iter()
            .map(|node| paragraph(&flat_text(node)))
            .collect();
    }

    header
        .map(|header| judges_from_header(header, false).concat())
        .unwrap_or_default()
}

fn presiding_judge(root: Node, header: Option<Node>) -> String {
    if let Some(first) = judge_elements(root).first() {
        return paragraph(&flat_text(*first));
    }

    header
        .and_then(|header| judges_from_header(header, true).into_iter().next())
        .unwrap_or_default()
}

// Judge names listed in the header between a "Before"/"Tribunal" line and
// the "Between" line that opens the parties block.
fn judges_from_header(header: Node, first_only: bool) -> Vec<String> {
    let mut names = Vec::new();
    let mut started = false;

    for node in header_paragraphs(header) {
        let text = text_paragraphs(node).join(" ");
        let lowered = text.trim().to_lowercase();
        if lowered.starts_with("between") {
            break;
        }

        if started {
            if !looks_like_name(&text) {
                break;
            }
            names.push(paragraphs_html(node));
            if first_only {
                break;
            }
        }

        if lowered.starts_with("before") || lowered.starts_with("tribunal") {
            started = true;
        }
    }

    names
}

// A short run of 2 to 8 words, starting with a letter, with more than 10
// letters in total.
pub fn looks_like_name(text: &str) -> bool {
    let word_count = text.split(' ').count();
    let starts_with_letter = text.chars().next().is_some_and(|ch| ch.is_ascii_alphabetic());
    let letter_count = text.chars().filter(|ch| ch.is_ascii_alphabetic()).count();

    (2..=8).contains(&word_count) && starts_with_letter && letter_count > 10
}
