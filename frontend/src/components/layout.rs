use crate::auth::logout;
use crate::components::icons::*;
use crate::i18n::{Msg, use_i18n};
use crate::use_app;
use crate::web::dom::{BodyTheme, apply_language};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use leptos::prelude::*;

/// 受保护页面的外框：导航、主题 / 语言切换与注销
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let i18n = use_i18n();

    let preferences = app.preferences;
    let session = app.session;
    let theme = RwSignal::new(preferences.theme());

    let on_toggle_theme = move |_| {
        theme.set(preferences.toggle_theme(&BodyTheme));
    };

    let on_toggle_language = move |_| {
        let next = preferences.toggle_language();
        apply_language(next);
        i18n.0.set(next);
    };

    let on_logout = move |_| {
        logout(&session);
        router.navigate_to(AppRoute::auth_failure_redirect());
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <div class="navbar bg-base-100 rounded-box shadow-xl">
                    <div class="flex-1 gap-2">
                        <Package attr:class="text-primary h-6 w-6" />
                        <span class="text-xl font-bold px-2">{i18n.tr(Msg::AppTitle)}</span>
                        <Link to=AppRoute::Products class="btn btn-ghost btn-sm">
                            {i18n.tr(Msg::NavProducts)}
                        </Link>
                        <Link to=AppRoute::NewProduct class="btn btn-ghost btn-sm gap-1">
                            <Plus attr:class="h-4 w-4" />
                            {i18n.tr(Msg::NavNewProduct)}
                        </Link>
                    </div>
                    <div class="flex-none gap-2">
                        <button
                            class="btn btn-ghost btn-circle"
                            title=i18n.tr(Msg::DarkMode)
                            on:click=on_toggle_theme
                        >
                            {move || if theme.get().is_dark() {
                                view! { <Sun attr:class="h-5 w-5" /> }.into_any()
                            } else {
                                view! { <Moon attr:class="h-5 w-5" /> }.into_any()
                            }}
                        </button>
                        <button class="btn btn-ghost gap-1" on:click=on_toggle_language>
                            <Languages attr:class="h-5 w-5" />
                            {move || i18n.0.get().toggled().as_storage()}
                        </button>
                        <button on:click=on_logout class="btn btn-outline btn-error gap-2">
                            <LogOut attr:class="h-4 w-4" />
                            {i18n.tr(Msg::Logout)}
                        </button>
                    </div>
                </div>

                <main>{children()}</main>
            </div>
        </div>
    }
}
