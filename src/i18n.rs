pub use rust_i18n::t;

use crate::utils;

/// Maps an OS locale name (`zh-TW`, `ja_JP.UTF-8`, ...) onto one of the bundled locales.
pub fn match_locale(name: &str) -> &'static str {
    let lang = name.split(['-', '_', '.']).next().unwrap_or_default();
    match lang.to_ascii_lowercase().as_str() {
        "zh" => "zh-CN",
        "ja" => "ja",
        _ => "en"
    }
}

pub fn init() {
    let locale = utils::get_user_locale_name()
        .map(|name| match_locale(&name))
        .unwrap_or("en");
    rust_i18n::set_locale(locale);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_bundled_locales() {
        assert_eq!(match_locale("zh-CN"), "zh-CN");
        assert_eq!(match_locale("zh-Hant-TW"), "zh-CN");
        assert_eq!(match_locale("ja-JP"), "ja");
        assert_eq!(match_locale("ja_JP.UTF-8"), "ja");
        assert_eq!(match_locale("de-DE"), "en");
        assert_eq!(match_locale(""), "en");
    }

    #[test]
    fn translations_interpolate_values() {
        let text = t!("error.wait_failed", locale = "en", code = 5);
        assert_eq!(text, "Lost track of the application process. Error code: 5");

        let text = t!("error.unknown_code", locale = "ja");
        assert_eq!(text, "不明");
    }
}
