//! Configuration and persistence for tomatui.

mod paths;
mod store;

pub use paths::Paths;
pub use store::{Settings, SettingsStore};
