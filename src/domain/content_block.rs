use serde::{Deserialize, Serialize};

use super::Slug;

/// One ordered unit of lesson content.
///
/// The order of blocks within a [`Lesson`](super::Lesson) is the reading
/// order and is preserved exactly as authored. The rendering layer matches
/// on the variant; the catalog itself never interprets the payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// A markup-formatted passage, rendered verbatim.
    Text {
        /// The markup payload.
        #[serde(rename = "content")]
        markup: String,
    },
    /// A literal source listing, rendered verbatim with no parsing.
    Code {
        /// The source listing.
        #[serde(rename = "content")]
        listing: String,
    },
    /// A reference into the diagram [`Registry`](super::Registry).
    Diagram {
        /// Id of the referenced diagram.
        #[serde(rename = "diagramId")]
        id: Slug,
    },
}

impl ContentBlock {
    /// Returns the referenced diagram id, if this is a diagram block.
    #[must_use]
    pub const fn diagram_id(&self) -> Option<&Slug> {
        match self {
            Self::Diagram { id } => Some(id),
            Self::Text { .. } | Self::Code { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ContentBlock;

    #[test]
    fn serializes_with_type_tag() {
        let block = ContentBlock::Text {
            markup: "<p>Pods are the smallest deployable units.</p>".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "<p>Pods are the smallest deployable units.</p>");
    }

    #[test]
    fn diagram_block_carries_registry_id() {
        let block: ContentBlock =
            serde_json::from_str(r#"{ "type": "diagram", "diagramId": "k8s-architecture" }"#)
                .unwrap();
        assert_eq!(block.diagram_id().unwrap().as_str(), "k8s-architecture");
    }

    #[test]
    fn text_and_code_blocks_have_no_diagram_id() {
        let code = ContentBlock::Code {
            listing: "kubectl get pods".to_string(),
        };
        assert!(code.diagram_id().is_none());
    }
}
