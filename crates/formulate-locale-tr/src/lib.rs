#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod messages;

use formulate_locale_core::{CatalogEntry, Extension, MessageCatalog, PluginHost, Rule};

pub const LOCALE: &str = "tr";

const ENTRIES: &[CatalogEntry] = &[
    CatalogEntry::new(Rule::Accepted, messages::accepted),
    CatalogEntry::new(Rule::After, messages::after),
    CatalogEntry::new(Rule::Alpha, messages::alpha),
    CatalogEntry::new(Rule::Alphanumeric, messages::alphanumeric),
    CatalogEntry::new(Rule::Before, messages::before),
    CatalogEntry::new(Rule::Between, messages::between),
    CatalogEntry::new(Rule::Confirm, messages::confirm),
    CatalogEntry::new(Rule::Date, messages::date),
    CatalogEntry::new(Rule::Default, messages::default),
    CatalogEntry::new(Rule::Email, messages::email),
    CatalogEntry::new(Rule::EndsWith, messages::ends_with),
    CatalogEntry::new(Rule::In, messages::in_values),
    CatalogEntry::new(Rule::Matches, messages::matches),
    CatalogEntry::new(Rule::Max, messages::max),
    CatalogEntry::new(Rule::Mime, messages::mime),
    CatalogEntry::new(Rule::Min, messages::min),
    CatalogEntry::new(Rule::Not, messages::not),
    CatalogEntry::new(Rule::Number, messages::number),
    CatalogEntry::new(Rule::Required, messages::required),
    CatalogEntry::new(Rule::StartsWith, messages::starts_with),
    CatalogEntry::new(Rule::Url, messages::url),
];

/// Turkish validation messages for every supported rule.
pub const CATALOG: MessageCatalog = MessageCatalog::new(LOCALE, ENTRIES);

/// Registers the Turkish catalog with `host` under the `tr` tag.
pub fn install<H: PluginHost + ?Sized>(host: &mut H) {
    host.extend(Extension::new().with_locale(CATALOG));
}
