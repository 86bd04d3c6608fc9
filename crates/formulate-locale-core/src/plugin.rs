use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::MessageCatalog;

/// Payload handed to a plugin host: message catalogs keyed by locale tag.
#[derive(Clone, Debug, Default)]
pub struct Extension {
    pub locales: BTreeMap<String, MessageCatalog>,
}

impl Extension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `catalog` under its own locale tag, replacing any earlier catalog
    /// for the same tag.
    pub fn with_locale(mut self, catalog: MessageCatalog) -> Self {
        self.locales.insert(String::from(catalog.locale()), catalog);
        self
    }
}

/// A validation host that accepts locale catalogs.
pub trait PluginHost {
    fn extend(&mut self, extension: Extension);
}
