//! 文档级 DOM 操作
//!
//! 主题 class、`data-theme` 属性以及 `<html lang>`。

use crate::i18n::Language;
use crate::preferences::{Theme, ThemeTarget};

pub const DARK_THEME_CLASS: &str = "dark-theme";

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// 把主题应用到 `<body>`
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyTheme;

impl ThemeTarget for BodyTheme {
    fn apply(&self, theme: Theme) {
        let Some(body) = document().and_then(|d| d.body()) else {
            return;
        };
        let _ = body
            .class_list()
            .toggle_with_force(DARK_THEME_CLASS, theme.is_dark());
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// 同步 `<html lang>`
pub fn apply_language(lang: Language) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", lang.code());
    }
}
