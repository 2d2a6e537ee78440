use crate::{BlogInput, BlogPost};

#[test]
fn test_blog_post_deserialize_backend_shape() {
    let json = r#"{"id":3,"title":"Hello","content":"World","owner_id":9}"#;
    let post: BlogPost = serde_json::from_str(json).unwrap();

    assert_eq!(post.id, 3);
    assert_eq!(post.title, "Hello");
    assert_eq!(post.content, "World");
    assert_eq!(post.owner_id, 9);
}

#[test]
fn test_blog_post_missing_title_defaults_to_empty() {
    let json = r#"{"id":3,"content":"Body","owner_id":1}"#;
    let post: BlogPost = serde_json::from_str(json).unwrap();

    assert_eq!(post.title, "");
}

#[test]
fn test_blog_post_to_input_copies_editable_fields() {
    let post = BlogPost {
        id: 1,
        title: "Title".into(),
        content: "Content".into(),
        owner_id: 2,
    };

    assert_eq!(post.to_input(), BlogInput::new("Title", "Content"));
}

#[test]
fn test_blog_input_serializes_only_title_and_content() {
    let input = BlogInput::new("T", "C");
    let json = serde_json::to_value(&input).unwrap();

    assert_eq!(json, serde_json::json!({"title": "T", "content": "C"}));
}

#[test]
fn test_blog_input_clear() {
    let mut input = BlogInput::new("T", "C");
    input.clear();

    assert_eq!(input, BlogInput::default());
}
