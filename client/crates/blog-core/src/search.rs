//! Client-side search over the cached listing.
//!
//! Recomputed from the full list on every call; there is no index.

use crate::BlogPost;

/// Case-insensitive substring match of `search` against the post's id,
/// title, content and owner id. An empty search matches everything.
pub fn matches_search(post: &BlogPost, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let query = search.to_lowercase();

    post.id.to_string().contains(&query)
        || post.title.to_lowercase().contains(&query)
        || post.content.to_lowercase().contains(&query)
        || post.owner_id.to_string().contains(&query)
}

/// Posts matching `search`, in listing order.
pub fn filter_posts<'a>(posts: &'a [BlogPost], search: &str) -> Vec<&'a BlogPost> {
    posts
        .iter()
        .filter(|post| matches_search(post, search))
        .collect()
}
