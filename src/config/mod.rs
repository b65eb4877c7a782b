pub mod settings;

pub use settings::{AuthSettings, DatabaseSettings, Profile, ServerSettings, Settings};
