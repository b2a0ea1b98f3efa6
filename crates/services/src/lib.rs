#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress_store;
pub mod sessions;

pub use lingo_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressStoreError, SessionError};
pub use progress_store::ProgressStore;
pub use sessions::{CardView, Screen, SessionController, SessionState, View};
