use roxmltree::Node;

pub const AKN_NAMESPACE: &str = "http://docs.oasis-open.org/legaldocml/ns/akn/3.0";

pub fn is_akn(node: &Node, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(AKN_NAMESPACE)
}

pub fn first_akn<'a, 'input>(root: Node<'a, 'input>, local_name: &str) -> Option<Node<'a, 'input>> {
    root.descendants().find(|node| is_akn(node, local_name))
}

pub fn text_paragraphs(node: Node) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut words = Vec::<&str>::new();

    for descendant in node.descendants() {
        if is_akn(&descendant, "br") {
            if !words.is_empty() {
                paragraphs.push(words.join(" "));
                words.clear();
            }
            continue;
        }

        if descendant.is_text()
            && let Some(text) = descendant.text()
        {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                words.push(trimmed);
            }
        }
    }

    if !words.is_empty() {
        paragraphs.push(words.join(" "));
    }

    paragraphs
}

pub fn flat_text(node: Node) -> String {
    collapse_whitespace(&text_paragraphs(node).join(" "))
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape_html(text))
}

pub fn paragraphs_html(node: Node) -> String {
    text_paragraphs(node)
        .iter()
        .map(|text| paragraph(text))
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use roxmltree::Document;

    use super::*;

    #[test]
    fn line_breaks_split_paragraphs_and_fragments_are_trimmed() {
        let xml = format!(
            r#"<p xmlns="{AKN_NAMESPACE}">  First <i>part</i>
               of line<br/>Second line<br/><br/></p>"#
        );
        let document = Document::parse(&xml).expect("fixture parses");

        assert_eq!(
            text_paragraphs(document.root_element()),
            vec!["First part of line", "Second line"]
        );
        assert_eq!(
            paragraphs_html(document.root_element()),
            "<p>First part of line</p> <p>Second line</p>"
        );
    }

    #[test]
    fn breaks_outside_namespace_do_not_split() {
        let document = Document::parse("<p>One<br/>Two</p>").expect("fixture parses");
        assert_eq!(flat_text(document.root_element()), "One Two");
    }

    #[test]
    fn escaping_covers_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
