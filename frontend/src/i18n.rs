//! 国际化模块
//!
//! 静态文案表：每个 [`Msg`] 在英文与法文下各有一条文本。
//! 消息以键的形式保存（例如通知队列中），渲染时才翻译，
//! 因此切换语言会立即作用于已显示的内容。

use leptos::prelude::*;

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// 持久化值（`EN` / `FR`）
    pub fn as_storage(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Fr => "FR",
        }
    }

    /// 解析持久化值，未知值返回 None
    pub fn from_storage(value: &str) -> Option<Self> {
        match value {
            "EN" => Some(Self::En),
            "FR" => Some(Self::Fr),
            _ => None,
        }
    }

    /// `<html lang>` 使用的语言代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Msg {
    // 布局
    AppTitle,
    NavProducts,
    NavNewProduct,
    Logout,
    DarkMode,
    // 登录
    LoginTitle,
    LoginSubtitle,
    Username,
    Password,
    SignIn,
    SigningIn,
    UsernameRequired,
    PasswordRequired,
    InvalidCredentials,
    ServerUnreachable,
    TokenMissing,
    // 列表
    ProductsTitle,
    ProductsSubtitle,
    ColName,
    ColPrice,
    ColQuantity,
    ColCreatedAt,
    ColActions,
    Edit,
    Delete,
    Refresh,
    NoProducts,
    Loading,
    // 表单
    CreateTitle,
    EditTitle,
    Name,
    Description,
    Price,
    Quantity,
    Save,
    Create,
    Back,
    NameRequired,
    NameTooShort,
    PriceRequired,
    PriceInvalid,
    PriceNegative,
    QuantityRequired,
    QuantityInvalid,
    QuantityNegative,
    // 对话框
    ConfirmDeleteTitle,
    ConfirmDeleteMsg,
    Cancel,
    // 通知
    ProductCreated,
    CreateFailed,
    ProductUpdated,
    UpdateFailed,
    ProductDeleted,
    DeleteFailed,
    ForbiddenDelete,
    LoadProductsFailed,
    ProductNotFound,
    AccessDenied,
    SessionExpired,
}

impl Msg {
    pub fn text(self, lang: Language) -> &'static str {
        let (en, fr) = self.pair();
        match lang {
            Language::En => en,
            Language::Fr => fr,
        }
    }

    fn pair(self) -> (&'static str, &'static str) {
        match self {
            Msg::AppTitle => ("Catalog Admin", "Administration du catalogue"),
            Msg::NavProducts => ("Products", "Produits"),
            Msg::NavNewProduct => ("New product", "Nouveau produit"),
            Msg::Logout => ("Logout", "Déconnexion"),
            Msg::DarkMode => ("Dark mode", "Mode sombre"),

            Msg::LoginTitle => ("Sign in", "Connexion"),
            Msg::LoginSubtitle => (
                "Enter your credentials to manage the catalog",
                "Saisissez vos identifiants pour gérer le catalogue",
            ),
            Msg::Username => ("Username", "Nom d'utilisateur"),
            Msg::Password => ("Password", "Mot de passe"),
            Msg::SignIn => ("Sign in", "Se connecter"),
            Msg::SigningIn => ("Signing in...", "Connexion..."),
            Msg::UsernameRequired => ("Username is required", "Le nom d'utilisateur est requis"),
            Msg::PasswordRequired => ("Password is required", "Le mot de passe est requis"),
            Msg::InvalidCredentials => ("Invalid credentials", "Identifiants invalides"),
            Msg::ServerUnreachable => ("Server unreachable", "Serveur injoignable"),
            Msg::TokenMissing => ("Token not received", "Token non reçu"),

            Msg::ProductsTitle => ("Products", "Produits"),
            Msg::ProductsSubtitle => ("Manage the product catalog.", "Gérez le catalogue de produits."),
            Msg::ColName => ("Name", "Nom"),
            Msg::ColPrice => ("Price", "Prix"),
            Msg::ColQuantity => ("Quantity", "Quantité"),
            Msg::ColCreatedAt => ("Created", "Créé le"),
            Msg::ColActions => ("Actions", "Actions"),
            Msg::Edit => ("Edit", "Modifier"),
            Msg::Delete => ("Delete", "Supprimer"),
            Msg::Refresh => ("Refresh", "Actualiser"),
            Msg::NoProducts => ("No products yet.", "Aucun produit pour le moment."),
            Msg::Loading => ("Loading...", "Chargement..."),

            Msg::CreateTitle => ("Create product", "Créer un produit"),
            Msg::EditTitle => ("Edit product", "Modifier le produit"),
            Msg::Name => ("Name", "Nom"),
            Msg::Description => ("Description", "Description"),
            Msg::Price => ("Price", "Prix"),
            Msg::Quantity => ("Quantity", "Quantité"),
            Msg::Save => ("Save", "Enregistrer"),
            Msg::Create => ("Create", "Créer"),
            Msg::Back => ("Back", "Retour"),
            Msg::NameRequired => ("Name is required", "Le nom est requis"),
            Msg::NameTooShort => (
                "Name must be at least 2 characters",
                "Le nom doit contenir au moins 2 caractères",
            ),
            Msg::PriceRequired => ("Price is required", "Le prix est requis"),
            Msg::PriceInvalid => ("Price must be a number", "Le prix doit être un nombre"),
            Msg::PriceNegative => ("Price must be 0 or more", "Le prix doit être positif ou nul"),
            Msg::QuantityRequired => ("Quantity is required", "La quantité est requise"),
            Msg::QuantityInvalid => (
                "Quantity must be a whole number",
                "La quantité doit être un nombre entier",
            ),
            Msg::QuantityNegative => (
                "Quantity must be 0 or more",
                "La quantité doit être positive ou nulle",
            ),

            Msg::ConfirmDeleteTitle => ("Delete product?", "Supprimer le produit ?"),
            Msg::ConfirmDeleteMsg => (
                "This action cannot be undone.",
                "Cette action est irréversible.",
            ),
            Msg::Cancel => ("Cancel", "Annuler"),

            Msg::ProductCreated => ("Product created", "Produit créé"),
            Msg::CreateFailed => ("Create failed", "Échec de la création"),
            Msg::ProductUpdated => ("Product updated", "Produit mis à jour"),
            Msg::UpdateFailed => ("Update failed", "Échec de la mise à jour"),
            Msg::ProductDeleted => ("Product deleted", "Produit supprimé"),
            Msg::DeleteFailed => ("Delete failed", "Échec de la suppression"),
            Msg::ForbiddenDelete => (
                "You are not allowed to delete products",
                "Vous n'êtes pas autorisé à supprimer des produits",
            ),
            Msg::LoadProductsFailed => (
                "Failed to load products",
                "Impossible de charger les produits",
            ),
            Msg::ProductNotFound => ("Product not found", "Produit introuvable"),
            Msg::AccessDenied => ("Access denied", "Accès refusé"),
            Msg::SessionExpired => (
                "Session expired. Please login again.",
                "Session expirée. Veuillez vous reconnecter.",
            ),
        }
    }
}

// =========================================================
// Leptos 集成
// =========================================================

/// 当前语言的上下文（由布局层的语言切换写入）
#[derive(Clone, Copy)]
pub struct I18nContext(pub RwSignal<Language>);

pub fn provide_i18n(initial: Language) -> I18nContext {
    let ctx = I18nContext(RwSignal::new(initial));
    provide_context(ctx);
    ctx
}

pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext should be provided")
}

impl I18nContext {
    /// 响应式翻译：在视图闭包中调用会订阅语言变化
    pub fn t(&self, msg: Msg) -> &'static str {
        msg.text(self.0.get())
    }

    /// 返回可直接放进 `view!` 的翻译闭包
    pub fn tr(self, msg: Msg) -> impl Fn() -> &'static str + Copy + Send + Sync + 'static {
        let lang = self.0;
        move || msg.text(lang.get())
    }
}
