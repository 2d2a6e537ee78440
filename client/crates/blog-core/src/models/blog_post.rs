use crate::BlogInput;

use serde::{Deserialize, Serialize};

/// A blog post as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub owner_id: i64,
}

impl BlogPost {
    /// Editable fields of this post, as loaded into the edit form.
    pub fn to_input(&self) -> BlogInput {
        BlogInput {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}
