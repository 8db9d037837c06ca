//! 界面偏好设置
//!
//! 主题与语言独立于会话持久化，启动时读取，切换时写回。

use crate::i18n::Language;
use crate::web::KeyValueStore;

pub const STORAGE_THEME_KEY: &str = "theme";
pub const STORAGE_LANG_KEY: &str = "lang";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// 主题在文档上的落地方式（浏览器中是 `<body>`）
pub trait ThemeTarget {
    fn apply(&self, theme: Theme);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Preferences<S> {
    store: S,
}

impl<S: KeyValueStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 已保存的主题；缺失或非法值回落到浅色
    pub fn theme(&self) -> Theme {
        self.store
            .get(STORAGE_THEME_KEY)
            .and_then(|v| Theme::parse(&v))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme, target: &impl ThemeTarget) {
        self.store.set(STORAGE_THEME_KEY, theme.as_str());
        target.apply(theme);
    }

    /// 切换主题并返回新值
    pub fn toggle_theme(&self, target: &impl ThemeTarget) -> Theme {
        let next = self.theme().toggled();
        self.set_theme(next, target);
        log::debug!("[Preferences] theme -> {}", next.as_str());
        next
    }

    /// 启动时把已保存的主题应用到文档
    pub fn apply_saved_theme(&self, target: &impl ThemeTarget) -> Theme {
        let theme = self.theme();
        target.apply(theme);
        theme
    }

    pub fn language(&self) -> Language {
        self.store
            .get(STORAGE_LANG_KEY)
            .and_then(|v| Language::from_storage(&v))
            .unwrap_or_default()
    }

    pub fn set_language(&self, lang: Language) {
        self.store.set(STORAGE_LANG_KEY, lang.as_storage());
    }

    pub fn toggle_language(&self) -> Language {
        let next = self.language().toggled();
        self.set_language(next);
        log::debug!("[Preferences] lang -> {}", next.as_storage());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MemoryStorage;
    use std::cell::Cell;

    /// 记录 `dark-theme` class 是否存在
    #[derive(Default)]
    struct FakeBody {
        dark_class: Cell<bool>,
        applied: Cell<usize>,
    }

    impl ThemeTarget for FakeBody {
        fn apply(&self, theme: Theme) {
            self.dark_class.set(theme.is_dark());
            self.applied.set(self.applied.get() + 1);
        }
    }

    #[test]
    fn defaults_when_nothing_saved() {
        let prefs = Preferences::new(MemoryStorage::new());
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        let storage = MemoryStorage::new()
            .with(STORAGE_THEME_KEY, "sepia")
            .with(STORAGE_LANG_KEY, "DE");
        let prefs = Preferences::new(storage);
        assert_eq!(prefs.theme(), Theme::Light);
        assert_eq!(prefs.language(), Language::En);
    }

    #[test]
    fn toggling_theme_twice_restores_value_and_class() {
        let storage = MemoryStorage::new().with(STORAGE_THEME_KEY, "dark");
        let prefs = Preferences::new(storage.clone());
        let body = FakeBody::default();

        let original = prefs.apply_saved_theme(&body);
        let original_class = body.dark_class.get();
        assert_eq!(original, Theme::Dark);

        assert_eq!(prefs.toggle_theme(&body), Theme::Light);
        assert_eq!(storage.raw(STORAGE_THEME_KEY).as_deref(), Some("light"));
        assert!(!body.dark_class.get());

        assert_eq!(prefs.toggle_theme(&body), original);
        assert_eq!(storage.raw(STORAGE_THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(body.dark_class.get(), original_class);
        assert_eq!(body.applied.get(), 3);
    }

    #[test]
    fn language_toggle_is_persisted() {
        let storage = MemoryStorage::new();
        let prefs = Preferences::new(storage.clone());
        assert_eq!(prefs.toggle_language(), Language::Fr);
        assert_eq!(storage.raw(STORAGE_LANG_KEY).as_deref(), Some("FR"));
        assert_eq!(prefs.toggle_language(), Language::En);
        assert_eq!(storage.raw(STORAGE_LANG_KEY).as_deref(), Some("EN"));
    }
}
