rust_i18n::i18n!("locales", fallback = "en");

pub mod i18n;
pub mod launcher;
pub mod report;
pub mod utils;
