//! User-facing messages shown when an action fails.
//!
//! Backend-provided `detail` strings take precedence over the fallbacks here.

pub const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";
pub const LOGIN_FAILED: &str = "Login failed";

pub const REGISTER_FIELDS_REQUIRED: &str = "All fields are required";
pub const REGISTER_FAILED: &str = "Registration failed";

pub const SESSION_SAVE_FAILED: &str = "Could not save session";

pub const AUTH_REQUIRED: &str = "Authentication required. Please login.";
pub const LOAD_BLOGS_FAILED: &str = "Failed to load blogs";
pub const LOAD_BLOG_FAILED: &str = "Failed to load blog";
pub const SAVE_BLOG_FAILED: &str = "Failed to save blog";
pub const DELETE_BLOG_FAILED: &str = "Failed to delete blog";

pub const DELETE_BLOG_PROMPT: &str = "Delete this blog?";
