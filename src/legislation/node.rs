use scraper::{ElementRef, Html};

pub trait MarkupNode: Clone {
    fn name(&self) -> Option<&str>;

    fn classes(&self) -> Vec<&str>;

    fn attribute(&self, key: &str) -> Option<&str>;

    fn children(&self) -> Vec<Self>;

    fn descendants(&self) -> Vec<Self>;

    fn text(&self) -> String;

    fn is_element(&self) -> bool {
        self.name().is_some()
    }

    fn has_class(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.classes().into_iter().any(predicate)
    }

    fn find(&self, predicate: impl Fn(&Self) -> bool) -> Option<Self> {
        self.descendants()
            .into_iter()
            .find(|node| node.is_element() && predicate(node))
    }

    fn find_all(&self, predicate: impl Fn(&Self) -> bool) -> Vec<Self> {
        self.descendants()
            .into_iter()
            .filter(|node| node.is_element() && predicate(node))
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
pub enum HtmlNode<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

impl<'a> HtmlNode<'a> {
    pub fn document_root(document: &'a Html) -> Self {
        HtmlNode::Element(document.root_element())
    }
}

impl MarkupNode for HtmlNode<'_> {
    fn name(&self) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => Some(element.value().name()),
            HtmlNode::Text(_) => None,
        }
    }

    fn classes(&self) -> Vec<&str> {
        match self {
            HtmlNode::Element(element) => element.value().classes().collect(),
            HtmlNode::Text(_) => Vec::new(),
        }
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        match self {
            HtmlNode::Element(element) => element.value().attr(key),
            HtmlNode::Text(_) => None,
        }
    }

    fn children(&self) -> Vec<Self> {
        match self {
            HtmlNode::Element(element) => element
                .children()
                .filter_map(|node| {
                    if let Some(child) = ElementRef::wrap(node) {
                        return Some(HtmlNode::Element(child));
                    }
                    node.value().as_text().map(|text| HtmlNode::Text(&**text))
                })
                .collect(),
            HtmlNode::Text(_) => Vec::new(),
        }
    }

    fn descendants(&self) -> Vec<Self> {
        match self {
            HtmlNode::Element(element) => element
                .descendants()
                .skip(1)
                .filter_map(|node| {
                    if let Some(descendant) = ElementRef::wrap(node) {
                        return Some(HtmlNode::Element(descendant));
                    }
                    node.value().as_text().map(|text| HtmlNode::Text(&**text))
                })
                .collect(),
            HtmlNode::Text(_) => Vec::new(),
        }
    }

    fn text(&self) -> String {
        match self {
            HtmlNode::Element(element) => element.text().collect(),
            HtmlNode::Text(text) => (*text).to_string(),
        }
    }
}
