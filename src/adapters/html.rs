use scraper::{Html, Node};

/// Elements whose text is left out of the page text (`noscript` fallbacks stay in)
const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "template", "rt", "rp"];

fn is_hidden(node: &Node) -> bool {
    matches!(node, Node::Element(element) if HIDDEN_ELEMENTS.contains(&element.name()))
}

/// Concatenate the visible text nodes of an HTML document in document order
pub fn visible_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    let mut text = String::new();

    for node in document.tree.root().descendants() {
        if let Node::Text(content) = node.value() {
            if node.ancestors().any(|ancestor| is_hidden(ancestor.value())) {
                continue;
            }
            text.push_str(content);
        }
    }

    text
}
