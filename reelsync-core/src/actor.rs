use serde::{Deserialize, Serialize};

/// A performer, shared by every title they appear in.
///
/// Identity is the upstream person id; within one sync run there is at most
/// one `Actor` per id, handed out as `Arc<Actor>` by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub source_id: u64,
    pub name: String,
    /// Absolute profile image URL, if the upstream has one.
    pub photo: Option<String>,
}

impl Actor {
    pub fn new(source_id: u64, name: impl Into<String>, photo: Option<String>) -> Self {
        Self {
            source_id,
            name: name.into(),
            photo,
        }
    }
}
