//! Layer hierarchy documents.
//!
//! The hierarchy of one image is supplied from outside as a YAML or JSON
//! document. Reading the image's native format is left to whatever produces
//! that document.
//!
//! # Example
//!
//! ```yaml
//! layers:
//!   - name: background
//!     visible: true
//!     children:
//!       - name: sky
//!       - name: stars
//!   - name: title
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::layer::{LayerId, LayerTree};
use crate::result::SlidesResult;

/// One layer of the supplied hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSpec {
    /// Layer name, unique across the document
    pub name: String,
    /// Initial visibility; absent means hidden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Nested layers in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayerSpec>,
}

impl LayerSpec {
    /// Create a layer with no initial visibility and no children
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visible: None,
            children: Vec::new(),
        }
    }

    /// Set the initial visibility
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    /// Append a child layer
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }
}

/// Root of a hierarchy document: the top-level layers of one image
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDocument {
    /// Top-level layers in display order
    #[serde(default)]
    pub layers: Vec<LayerSpec>,
}

impl LayerDocument {
    /// Create a document from its top-level layers
    #[must_use]
    pub fn new(layers: Vec<LayerSpec>) -> Self {
        Self { layers }
    }

    /// Parse a YAML document
    pub fn from_yaml(yaml: &str) -> SlidesResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a JSON document
    pub fn from_json(json: &str) -> SlidesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a document, choosing JSON for `.json` files and YAML otherwise
    pub fn load(path: &Path) -> SlidesResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Build the layer tree, resolving absent visibility to hidden.
    ///
    /// Fails on duplicate or empty names anywhere in the document.
    pub fn build_tree(&self) -> SlidesResult<LayerTree> {
        let mut tree = LayerTree::new();
        let mut pending: Vec<(LayerId, &LayerSpec)> = self
            .layers
            .iter()
            .rev()
            .map(|spec| (LayerId::ROOT, spec))
            .collect();

        while let Some((parent, spec)) = pending.pop() {
            let id = tree.add_layer(parent, spec.name.as_str(), spec.visible)?;
            pending.extend(spec.children.iter().rev().map(|child| (id, child)));
        }

        Ok(tree)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::result::SlidesError;

    const SAMPLE: &str = r"
layers:
  - name: background
    visible: true
    children:
      - name: sky
        visible: true
      - name: stars
  - name: title
";

    #[test]
    fn test_parse_yaml() {
        let doc = LayerDocument::from_yaml(SAMPLE).expect("parse");
        assert_eq!(doc.layers.len(), 2);
        assert_eq!(doc.layers[0].children[1].visible, None);
    }

    #[test]
    fn test_parse_json() {
        let doc =
            LayerDocument::from_json(r#"{"layers":[{"name":"A","visible":true},{"name":"B"}]}"#)
                .expect("parse");
        assert_eq!(
            doc,
            LayerDocument::new(vec![
                LayerSpec::new("A").with_visible(true),
                LayerSpec::new("B")
            ])
        );
    }

    #[test]
    fn test_build_tree_preserves_order() {
        let tree = LayerDocument::from_yaml(SAMPLE).unwrap().build_tree().unwrap();
        let paths: Vec<String> = tree.nodes().map(|id| tree.path_of(id)).collect();
        assert_eq!(
            paths,
            ["background", "background/sky", "background/stars", "title"]
        );
    }

    #[test]
    fn test_build_tree_resolves_default_visibility() {
        let tree = LayerDocument::from_yaml(SAMPLE).unwrap().build_tree().unwrap();
        assert!(tree.get("background/sky").unwrap().is_visible());
        assert!(!tree.get("background/stars").unwrap().is_visible());
        assert!(!tree.get("title").unwrap().is_visible());
    }

    #[test]
    fn test_build_tree_rejects_duplicates_across_branches() {
        let doc = LayerDocument::new(vec![
            LayerSpec::new("A").with_child(LayerSpec::new("x")),
            LayerSpec::new("B").with_child(LayerSpec::new("x")),
        ]);
        assert!(matches!(
            doc.build_tree(),
            Err(SlidesError::DuplicateLayer { name }) if name == "x"
        ));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        assert!(matches!(
            LayerDocument::from_yaml("layers: [name: {"),
            Err(SlidesError::Yaml(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("image.json");
        std::fs::write(&path, r#"{"layers":[{"name":"only"}]}"#).unwrap();
        let doc = LayerDocument::load(&path).unwrap();
        assert_eq!(doc.layers[0].name, "only");
    }
}
