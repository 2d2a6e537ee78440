//! Headless views over the blog API.
//!
//! Each view owns its form state, error message and loading flag, and turns
//! every failure into a display string. Views are driven through `&mut self`,
//! so a view never has two requests for the same action in flight.

mod blog_list_view;
mod confirm;
mod identity_indicator;
mod identity_state;
mod lifetime;
mod login_view;
mod navigator;
mod register_view;
mod route;

#[cfg(test)]
mod tests;

pub use blog_list_view::BlogListView;
pub use confirm::{Confirm, FixedAnswer};
pub use identity_indicator::IdentityIndicator;
pub use identity_state::IdentityState;
pub use lifetime::{LifetimeGuard, ViewLifetime};
pub use login_view::LoginView;
pub use navigator::{Navigator, RecordingNavigator};
pub use register_view::RegisterView;
pub use route::Route;
