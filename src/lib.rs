/// Builder API for markup element trees and a deterministic renderer
pub mod renderer;
pub mod tag;

pub use renderer::HtmlRenderer;
pub use tag::Tag;

/// Render a tag and its subtree to markup
pub fn render(tag: &Tag) -> String {
    HtmlRenderer::new().render(tag)
}

/// Parse a JSON tree document and render it to markup
pub fn json_to_html(json: &str) -> Result<String, serde_json::Error> {
    let tag: Tag = serde_json::from_str(json)?;
    Ok(render(&tag))
}
