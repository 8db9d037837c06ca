//! 商品表单组件
//!
//! 新建与编辑页面共用，只负责字段渲染、逐字段错误展示与提交。

mod form_state;

pub use form_state::FormState;

use catalog_shared::ProductInput;
use leptos::prelude::*;

use crate::i18n::{Msg, use_i18n};
use crate::web::route::AppRoute;
use crate::web::router::Link;

/// 单个字段的错误提示
#[component]
fn FieldError(error: Signal<Option<Msg>>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <Show when=move || error.get().is_some()>
            <label class="label">
                <span class="label-text-alt text-error">
                    {move || error.get().map(|msg| i18n.t(msg))}
                </span>
            </label>
        </Show>
    }
}

#[component]
pub fn ProductForm(
    state: FormState,
    /// 加载或提交中时禁用整个表单
    #[prop(into)]
    busy: Signal<bool>,
    submit_label: Msg,
    #[prop(into)] on_submit: Callback<ProductInput>,
) -> impl IntoView {
    let i18n = use_i18n();

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        if let Some(input) = state.submit() {
            on_submit.run(input);
        }
    };

    let errors = state.errors;
    let input_class = move |has_error: bool| {
        if has_error {
            "input input-bordered input-error w-full"
        } else {
            "input input-bordered w-full"
        }
    };

    view! {
        <form on:submit=submit class="space-y-4" novalidate>
            <fieldset class="space-y-4" disabled=move || busy.get()>
                <div class="form-control">
                    <label for="name" class="label">
                        <span class="label-text">{i18n.tr(Msg::Name)}</span>
                    </label>
                    <input id="name"
                        type="text"
                        on:input=move |ev| state.name.set(event_target_value(&ev))
                        prop:value=move || state.name.get()
                        class=move || input_class(errors.with(|e| e.name.is_some()))
                    />
                    <FieldError error=Signal::derive(move || errors.with(|e| e.name)) />
                </div>

                <div class="form-control">
                    <label for="description" class="label">
                        <span class="label-text">{i18n.tr(Msg::Description)}</span>
                    </label>
                    <textarea id="description"
                        rows="3"
                        on:input=move |ev| state.description.set(event_target_value(&ev))
                        prop:value=move || state.description.get()
                        class="textarea textarea-bordered w-full"
                    ></textarea>
                </div>

                <div class="grid grid-cols-2 gap-4">
                    <div class="form-control">
                        <label for="price" class="label">
                            <span class="label-text">{i18n.tr(Msg::Price)}</span>
                        </label>
                        <input id="price"
                            type="number"
                            min="0"
                            step="0.01"
                            on:input=move |ev| state.price.set(event_target_value(&ev))
                            prop:value=move || state.price.get()
                            class=move || input_class(errors.with(|e| e.price.is_some()))
                        />
                        <FieldError error=Signal::derive(move || errors.with(|e| e.price)) />
                    </div>
                    <div class="form-control">
                        <label for="quantity" class="label">
                            <span class="label-text">{i18n.tr(Msg::Quantity)}</span>
                        </label>
                        <input id="quantity"
                            type="number"
                            min="0"
                            step="1"
                            on:input=move |ev| state.quantity.set(event_target_value(&ev))
                            prop:value=move || state.quantity.get()
                            class=move || input_class(errors.with(|e| e.quantity.is_some()))
                        />
                        <FieldError error=Signal::derive(move || errors.with(|e| e.quantity)) />
                    </div>
                </div>
            </fieldset>

            <div class="flex justify-end gap-2 pt-2">
                <Link to=AppRoute::Products class="btn btn-ghost">
                    {i18n.tr(Msg::Back)}
                </Link>
                <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                    {move || if busy.get() {
                        view! { <span class="loading loading-spinner"></span> {i18n.t(Msg::Loading)} }.into_any()
                    } else {
                        i18n.t(submit_label).into_any()
                    }}
                </button>
            </div>
        </form>
    }
}
