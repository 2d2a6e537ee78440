mod blog_post;
mod error_body;
mod identity;
