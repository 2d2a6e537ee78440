use crate::blog_commands::BlogCommands;
use crate::commands::Commands;
use crate::confirm::StdinConfirm;
use crate::error::{CliError, Result as CliResult};

use blog_api::ApiClient;
use blog_core::BlogPost;
use blog_session::{Session, StorageWatcher};
use blog_views::{
    BlogListView, Confirm, FixedAnswer, IdentityIndicator, IdentityState, LoginView,
    RecordingNavigator, RegisterView, ViewLifetime,
};

use std::time::Duration;

use log::{info, warn};
use serde_json::{Value, json};

/// What a command prints on stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Json(Value),
    Text(String),
    /// The command already wrote everything it had to say
    Nothing,
}

/// Runs commands against one session and backend.
pub struct App {
    api: ApiClient,
    session: Session,
    poll_interval: Duration,
}

impl App {
    pub fn new(api: ApiClient, poll_interval: Duration) -> Self {
        let session = api.session().clone();
        Self {
            api,
            session,
            poll_interval,
        }
    }

    pub(crate) async fn execute(&self, command: Commands) -> CliResult<Output> {
        match command {
            Commands::Login { email, password } => self.login(email, password).await,
            Commands::Register {
                username,
                email,
                password,
            } => self.register(username, email, password).await,
            Commands::Logout => self.logout(),
            Commands::Whoami => self.whoami().await,
            Commands::Watch => self.watch().await,
            Commands::Blog { action } => self.blog(action).await,
        }
    }

    async fn login(&self, email: String, password: String) -> CliResult<Output> {
        let mut view = LoginView::new(self.api.clone(), self.session.clone());
        view.email = email;
        view.password = password;

        let navigator = RecordingNavigator::new();
        if !view.submit(&navigator).await {
            return Err(view_error(view.error));
        }

        Ok(Output::Json(json!({
            "status": "logged_in",
            "navigate": navigator.current().map(|r| r.path()),
        })))
    }

    async fn register(&self, username: String, email: String, password: String) -> CliResult<Output> {
        let mut view = RegisterView::new(self.api.clone());
        view.username = username;
        view.email = email;
        view.password = password;

        let navigator = RecordingNavigator::new();
        if !view.submit(&navigator).await {
            return Err(view_error(view.error));
        }

        Ok(Output::Json(json!({
            "status": "registered",
            "navigate": navigator.current().map(|r| r.path()),
        })))
    }

    fn logout(&self) -> CliResult<Output> {
        let mut indicator = IdentityIndicator::new(self.api.clone(), self.session.clone());
        let navigator = RecordingNavigator::new();
        indicator.logout(&navigator)?;

        Ok(Output::Json(json!({
            "status": "logged_out",
            "navigate": navigator.current().map(|r| r.path()),
        })))
    }

    async fn whoami(&self) -> CliResult<Output> {
        let mut indicator = IdentityIndicator::new(self.api.clone(), self.session.clone());
        indicator.mount().await;
        let state = indicator.state();

        let links: Vec<&str> = state.links().iter().map(|r| r.path()).collect();

        Ok(Output::Json(json!({
            "display": state.render(),
            "identity": state.identity(),
            "links": links,
        })))
    }

    /// Print the indicator's display every time the text changes, following
    /// writes made by other processes to the session file, until Ctrl-C.
    async fn watch(&self) -> CliResult<Output> {
        let indicator = IdentityIndicator::new(self.api.clone(), self.session.clone());
        let mut states = indicator.subscribe_state();
        let lifetime = ViewLifetime::new();
        let watcher = StorageWatcher::spawn(self.session.clone(), self.poll_interval);
        let view = tokio::spawn(indicator.run(lifetime.guard()));

        let mut display = states.borrow_and_update().render();
        println!("{display}");

        loop {
            tokio::select! {
                changed = states.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let next = next_display(&display, &states.borrow_and_update());
                    if let Some(next) = next {
                        println!("{next}");
                        display = next;
                    }
                }
                signal = tokio::signal::ctrl_c() => {
                    if let Err(e) = signal {
                        warn!("Could not listen for Ctrl-C: {e}");
                    }
                    break;
                }
            }
        }

        info!("Stopping watch");
        lifetime.end();
        watcher.stop().await;
        if let Err(e) = view.await {
            warn!("Identity indicator task failed: {e}");
        }

        Ok(Output::Nothing)
    }

    async fn blog(&self, action: BlogCommands) -> CliResult<Output> {
        let mut view = BlogListView::new(self.api.clone());

        match action {
            BlogCommands::List { search, table } => {
                if !view.fetch_all().await {
                    return Err(view_error(view.error));
                }
                view.search = search.unwrap_or_default();

                if table {
                    Ok(Output::Text(view.render_table()))
                } else {
                    Ok(Output::Json(serde_json::to_value(view.filtered())?))
                }
            }
            BlogCommands::Get { id } => {
                let post = load(&mut view, id).await?;
                Ok(Output::Json(serde_json::to_value(post)?))
            }
            BlogCommands::Create { title, content } => {
                view.form.title = title;
                view.form.content = content;
                submit(&mut view).await
            }
            BlogCommands::Update { id, title, content } => {
                let post = load(&mut view, id).await?;
                view.start_edit(&post);
                if let Some(title) = title {
                    view.form.title = title;
                }
                if let Some(content) = content {
                    view.form.content = content;
                }
                submit(&mut view).await
            }
            BlogCommands::Delete { id, yes } => {
                let confirm: &dyn Confirm = if yes { &FixedAnswer(true) } else { &StdinConfirm };

                if view.delete_record(id, confirm).await {
                    refreshed(&mut view)?;
                    Ok(Output::Json(json!({ "status": "deleted", "id": id })))
                } else if let Some(error) = view.error {
                    Err(CliError::view(error))
                } else {
                    Ok(Output::Json(json!({ "status": "cancelled", "id": id })))
                }
            }
        }
    }
}

async fn load(view: &mut BlogListView, id: i64) -> CliResult<BlogPost> {
    if !view.view(id).await {
        return Err(view_error(view.error.take()));
    }
    view.selected
        .take()
        .ok_or_else(|| CliError::view(blog_core::messages::LOAD_BLOG_FAILED))
}

/// Submit the form, then report the refreshed listing.
async fn submit(view: &mut BlogListView) -> CliResult<Output> {
    if !view.submit_form().await {
        return Err(view_error(view.error.take()));
    }
    refreshed(view)?;
    Ok(Output::Json(serde_json::to_value(&view.blogs)?))
}

/// After a successful mutation, fail if re-fetching the listing did.
fn refreshed(view: &mut BlogListView) -> CliResult<()> {
    match view.error.take() {
        Some(error) => Err(CliError::view(error)),
        None => Ok(()),
    }
}

/// The text to print for `state`, if it differs from what is shown.
pub(crate) fn next_display(shown: &str, state: &IdentityState) -> Option<String> {
    let next = state.render();
    (next != shown).then_some(next)
}

#[track_caller]
fn view_error(message: Option<String>) -> CliError {
    CliError::view(message.unwrap_or_else(|| String::from("Request failed")))
}
