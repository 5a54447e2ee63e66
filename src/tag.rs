/// Element tree for building markup
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single markup element: name, attributes, classes, id, text body and children.
///
/// Tag names, attribute names and class names are taken as-is. Nothing is
/// validated or escaped, so any string is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "tag")]
    tag_name: String,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, String>, // Emitted in insertion order
    #[serde(default, rename = "classes", skip_serializing_if = "Vec::is_empty")]
    class_names: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    id: String, // Empty means no id attribute
    #[serde(default, skip_serializing_if = "String::is_empty")]
    body: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Tag>,
}

impl Tag {
    /// Creates an empty element with the given tag name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Tag {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
            class_names: Vec::new(),
            id: String::new(),
            body: String::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child element. The child is moved into this tag.
    pub fn add_child(&mut self, child: Tag) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Sets an attribute, overwriting any previous value for the same key.
    ///
    /// An overwritten key keeps the position of its first insertion.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn add_class(&mut self, class_name: impl Into<String>) -> &mut Self {
        self.class_names.push(class_name.into());
        self
    }

    pub fn add_classes<I, S>(&mut self, class_names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.class_names
            .extend(class_names.into_iter().map(Into::into));
        self
    }

    /// Replaces the whole `style` attribute with a single `property: value;` declaration.
    ///
    /// Earlier declarations are discarded, not merged.
    pub fn set_style(&mut self, property: &str, value: &str) -> &mut Self {
        self.attributes
            .insert("style".to_string(), format!("{}: {};", property, value));
        self
    }

    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.body = body.into();
        self
    }

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = id.into();
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Attributes in emission order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// The element id, or `None` when unset or empty.
    pub fn id(&self) -> Option<&str> {
        if self.id.is_empty() {
            None
        } else {
            Some(&self.id)
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Tag> {
        self.children.get_mut(index)
    }
}
