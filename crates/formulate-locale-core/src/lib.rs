#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod catalog;
mod context;
mod error;
mod format;
mod framing;
mod language_tag;
mod plugin;
mod rule;
mod value;

pub use catalog::{CatalogEntry, MessageCatalog, MessageTemplate};
pub use context::ValidationContext;
pub use error::{CoreError, CoreResult};
pub use format::sentence;
pub use framing::SizeFraming;
pub use language_tag::LocaleTag;
pub use plugin::{Extension, PluginHost};
pub use rule::Rule;
pub use value::{FieldValue, is_empty, is_numeric_like};
