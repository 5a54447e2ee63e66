/// Markup renderer for tag trees
use crate::tag::Tag;
use std::fmt;

pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        HtmlRenderer
    }

    pub fn render(&self, tag: &Tag) -> String {
        render_node(tag)
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_node(self))
    }
}

fn render_node(tag: &Tag) -> String {
    let content: String = tag.children().iter().map(render_node).collect();
    format!(
        "{}{}{}</{}>",
        render_open_tag(tag),
        tag.body(),
        content,
        tag.tag_name()
    )
}

/// Opening tag: attributes first, then id, then class, whatever order they were set in.
fn render_open_tag(tag: &Tag) -> String {
    let mut open = format!("<{}", tag.tag_name());
    for (key, value) in tag.attributes() {
        open.push_str(&format!(" {}=\"{}\"", key, value));
    }
    if let Some(id) = tag.id() {
        open.push_str(&format!(" id=\"{}\"", id));
    }
    if !tag.class_names().is_empty() {
        open.push_str(&format!(" class=\"{}\"", tag.class_names().join(" ")));
    }
    open.push('>');
    open
}
