use catalog_shared::Product;
use leptos::prelude::*;

use crate::components::icons::Trash2;
use crate::i18n::{Msg, use_i18n};

/// 删除确认对话框
///
/// `target` 为 Some 时打开；确认后交给 `on_confirm`，任何方式关闭都会清空 `target`。
#[component]
pub fn ConfirmDeleteDialog(
    target: RwSignal<Option<Product>>,
    #[prop(into)] on_confirm: Callback<Product>,
) -> impl IntoView {
    let i18n = use_i18n();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if target.with(Option::is_some) {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let confirm = move |_| {
        if let Some(product) = target.get_untracked() {
            target.set(None);
            on_confirm.run(product);
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| target.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">{i18n.tr(Msg::ConfirmDeleteTitle)}</h3>
                <p class="py-4">
                    <span class="font-mono font-bold">
                        {move || target.with(|t| t.as_ref().map(|p| p.name.clone()))}
                    </span>
                    <br />
                    <span class="text-base-content/70">{i18n.tr(Msg::ConfirmDeleteMsg)}</span>
                </p>
                <div class="modal-action">
                    <button type="button" class="btn btn-ghost" on:click=move |_| target.set(None)>
                        {i18n.tr(Msg::Cancel)}
                    </button>
                    <button type="button" class="btn btn-error gap-2" on:click=confirm>
                        <Trash2 attr:class="h-4 w-4" />
                        {i18n.tr(Msg::Delete)}
                    </button>
                </div>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
