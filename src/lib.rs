//! Scaffolds new apps for the mooncake framework.
//!
//! A run turns a typed name into `AppFooBar` / `app_foo_bar`, copies the
//! `app_template` source/header pair into `app_foo_bar/` with the
//! placeholders filled in, and registers the app in `app_installer.h`.

pub mod config;
pub mod creator;
pub mod engine;
pub mod error;
pub mod installer;
pub mod naming;
pub mod prompt;
pub mod renderer;
pub mod report;
pub mod scaffold;
pub mod validation;

pub use config::CreatorConfig;
pub use creator::{AppCreator, CreatedApp};
pub use error::{CreatorError, Result};
pub use naming::{to_pascal, to_snake, AppName};
pub use renderer::{render, Substitutions};
pub use scaffold::AppFilePaths;
pub use validation::is_valid_name;
