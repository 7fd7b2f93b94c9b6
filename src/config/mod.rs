//! Configuration loading for the Paycheck Engine.
//!
//! This module loads a named pay policy from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use paycheck_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("Loaded policy: {}", loader.name());
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::PolicyConfig;
