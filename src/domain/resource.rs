use serde::{Deserialize, Serialize};

/// A reference to external learning material.
///
/// Resources carry no identity beyond their content; the same URL may appear
/// on several modules or lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Display title of the resource.
    pub title: String,
    /// Link to the external material.
    pub url: String,
    /// Category of the resource.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Short description shown alongside the link.
    pub description: String,
}

impl Resource {
    /// Creates a new resource.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind,
            description: description.into(),
        }
    }
}

/// The category of an external [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Reference documentation.
    Documentation,
    /// A hands-on tutorial.
    Tutorial,
    /// A video or recorded talk.
    Video,
    /// A written article or blog post.
    Article,
    /// A tool or utility.
    Tool,
    /// A GitHub repository.
    Github,
    /// A structured course.
    Course,
    /// A book.
    Book,
}

#[cfg(test)]
mod tests {
    use super::{Resource, ResourceKind};

    #[test]
    fn kind_serializes_lowercase() {
        let resource = Resource::new(
            "Kubernetes Documentation",
            "https://kubernetes.io/docs/home/",
            ResourceKind::Documentation,
            "Official Kubernetes documentation.",
        );
        let json = serde_json::to_value(&resource).unwrap();
        assert_eq!(json["type"], "documentation");
        assert_eq!(json["url"], "https://kubernetes.io/docs/home/");
    }
}
