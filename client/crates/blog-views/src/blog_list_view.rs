use crate::Confirm;

use blog_api::{ApiClient, ApiError};
use blog_core::messages::{
    AUTH_REQUIRED, DELETE_BLOG_FAILED, DELETE_BLOG_PROMPT, LOAD_BLOG_FAILED, LOAD_BLOGS_FAILED,
    SAVE_BLOG_FAILED,
};
use blog_core::{BlogInput, BlogPost, filter_posts};

use std::fmt::Write;

use log::{debug, error, info};

const TITLE_WIDTH: usize = 40;

/// Listing, detail and create/edit form for blog posts.
///
/// The listing is a cache of the last successful fetch and is re-fetched
/// after every successful mutation.
pub struct BlogListView {
    api: ApiClient,
    pub blogs: Vec<BlogPost>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub selected: Option<BlogPost>,
    pub form: BlogInput,
    pub editing_id: Option<i64>,
    /// Set by `start_edit`; a front end showing the form scrolls to it and clears the flag
    pub scroll_to_top: bool,
}

impl BlogListView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            blogs: Vec::new(),
            loading: false,
            error: None,
            search: String::new(),
            selected: None,
            form: BlogInput::default(),
            editing_id: None,
            scroll_to_top: false,
        }
    }

    /// Reload the listing. On failure the previous listing is kept.
    pub async fn fetch_all(&mut self) -> bool {
        self.loading = true;
        self.error = None;

        let result = self.api.list_blogs().await;
        self.loading = false;

        match result {
            Ok(blogs) => {
                debug!("Loaded {} blogs", blogs.len());
                self.blogs = blogs;
                true
            }
            Err(e) if e.is_unauthorized() => {
                info!("Blog listing requires authentication");
                self.error = Some(AUTH_REQUIRED.to_string());
                false
            }
            Err(e) => {
                error!("Failed to load blogs: {e}");
                self.error = Some(LOAD_BLOGS_FAILED.to_string());
                false
            }
        }
    }

    /// Posts matching the current search, in listing order.
    pub fn filtered(&self) -> Vec<&BlogPost> {
        filter_posts(&self.blogs, &self.search)
    }

    /// Load one post into the detail pane.
    pub async fn view(&mut self, id: i64) -> bool {
        match self.api.get_blog(id).await {
            Ok(post) => {
                self.selected = Some(post);
                true
            }
            Err(e) => {
                self.fail(&e, LOAD_BLOG_FAILED);
                false
            }
        }
    }

    pub fn close_selected(&mut self) {
        self.selected = None;
    }

    pub fn start_edit(&mut self, post: &BlogPost) {
        self.editing_id = Some(post.id);
        self.form = post.to_input();
        self.scroll_to_top = true;
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.form.clear();
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn form_heading(&self) -> &'static str {
        if self.is_editing() { "Edit Blog" } else { "Create Blog" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Update" } else { "Create" }
    }

    /// Update the post being edited, or create a new one from the form.
    /// On success the listing is refreshed and the form reset; a failed
    /// refresh leaves `error` set even though the save went through.
    pub async fn submit_form(&mut self) -> bool {
        self.error = None;

        let result = match self.editing_id {
            Some(id) => self.api.update_blog(id, &self.form).await,
            None => self.api.create_blog(&self.form).await,
        };

        match result {
            Ok(post) => {
                info!("Saved blog {}", post.id);
                self.fetch_all().await;
                self.cancel_edit();
                true
            }
            Err(e) => {
                self.fail(&e, SAVE_BLOG_FAILED);
                false
            }
        }
    }

    /// Delete a post after asking for confirmation. Declining sends nothing.
    pub async fn delete_record(&mut self, id: i64, confirm: &dyn Confirm) -> bool {
        if !confirm.confirm(DELETE_BLOG_PROMPT).await {
            debug!("Delete of blog {id} declined");
            return false;
        }

        match self.api.delete_blog(id).await {
            Ok(()) => {
                info!("Deleted blog {id}");
                self.fetch_all().await;
                true
            }
            Err(e) => {
                self.fail(&e, DELETE_BLOG_FAILED);
                false
            }
        }
    }

    /// Text rendering: error line, form heading, table of filtered posts and
    /// the selected post if any.
    pub fn render_table(&self) -> String {
        let mut out = String::new();

        if let Some(error) = &self.error {
            let _ = writeln!(out, "! {error}");
        }
        let _ = writeln!(out, "== {} ==", self.form_heading());

        if self.loading {
            let _ = writeln!(out, "Loading...");
        }

        let rows = self.filtered();
        if rows.is_empty() {
            let _ = writeln!(out, "No blogs found");
        } else {
            let _ = writeln!(out, "{:>6}  {:<TITLE_WIDTH$}  {:>6}", "ID", "Title", "Owner");
            for post in rows {
                let _ = writeln!(
                    out,
                    "{:>6}  {:<TITLE_WIDTH$}  {:>6}",
                    post.id,
                    truncate(&post.title, TITLE_WIDTH),
                    post.owner_id
                );
            }
        }

        if let Some(post) = &self.selected {
            let _ = writeln!(out);
            let _ = writeln!(out, "#{} {}", post.id, post.title);
            let _ = writeln!(out, "owner: {}", post.owner_id);
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", post.content);
        }

        out
    }

    fn fail(&mut self, e: &ApiError, fallback: &str) {
        error!("{fallback}: {e}");
        self.error = Some(e.detail_or(fallback));
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width.saturating_sub(3)).collect();
    short.push_str("...");
    short
}
