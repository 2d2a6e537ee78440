pub mod blog_input;
pub mod blog_post;
pub mod error_body;
pub mod identity;
pub mod login_response;
pub mod register_request;
