use crate::auth::{LoginFieldErrors, LoginForm, login};
use crate::components::icons::ShieldCheck;
use crate::i18n::{Msg, use_i18n};
use crate::use_app;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_app().api;
    let router = use_router();
    let i18n = use_i18n();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<Msg>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let mut form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(errors) = form.validate() {
            field_errors.set(errors);
            return;
        }

        field_errors.set(LoginFieldErrors::default());
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let result = login(&api, &mut form).await;
            password.set(form.password);
            match result {
                Ok(_) => router.navigate_to(AppRoute::auth_success_redirect()),
                Err(failure) => set_error_msg.set(Some(failure.message())),
            }
            set_is_submitting.set(false);
        });
    };

    let field_error = move |pick: fn(&LoginFieldErrors) -> Option<Msg>| {
        move || field_errors.with(pick).map(|msg| i18n.t(msg))
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">{i18n.tr(Msg::AppTitle)}</h1>
                        <p class="text-base-content/70">{i18n.tr(Msg::LoginSubtitle)}</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <h2 class="card-title">{i18n.tr(Msg::LoginTitle)}</h2>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <svg xmlns="http://www.w3.org/2000/svg" class="stroke-current shrink-0 h-6 w-6" fill="none" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 14l2-2m0 0l2-2m-2 2l-2-2m2 2l2 2m7-2a9 9 0 11-18 0 9 9 0 0118 0z" /></svg>
                                <span>{move || error_msg.get().map(|msg| i18n.t(msg))}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="username">
                                <span class="label-text">{i18n.tr(Msg::Username)}</span>
                            </label>
                            <input
                                id="username"
                                type="text"
                                autocomplete="username"
                                on:input=move |ev| username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered"
                            />
                            <span class="label-text-alt text-error mt-1">
                                {field_error(|e| e.username)}
                            </span>
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{i18n.tr(Msg::Password)}</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                autocomplete="current-password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <span class="label-text-alt text-error mt-1">
                                {field_error(|e| e.password)}
                            </span>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> {i18n.t(Msg::SigningIn)} }.into_any()
                                } else {
                                    i18n.t(Msg::SignIn).into_any()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
