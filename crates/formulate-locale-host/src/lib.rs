#![forbid(unsafe_code)]

mod config;
mod error;
mod payload;
mod registry;

pub use crate::config::HostConfig;
pub use crate::error::{RegistryError, RegistryResult};
pub use crate::payload::ContextPayload;
pub use crate::registry::LocaleRegistry;
