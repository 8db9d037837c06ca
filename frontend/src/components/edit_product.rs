use crate::components::product_form::{FormState, ProductForm};
use crate::failure::FailureAction;
use crate::i18n::{Msg, use_i18n};
use crate::notify::use_notifier;
use crate::use_app;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use catalog_shared::{ProductId, ProductInput};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn EditProductPage(id: Option<ProductId>) -> impl IntoView {
    let api = use_app().api;
    let notifier = use_notifier();
    let router = use_router();
    let i18n = use_i18n();

    let state = FormState::new();
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);

    // 先加载商品，加载完成前表单保持禁用
    {
        let api = api.clone();
        spawn_local(async move {
            let Some(id) = id else {
                notifier.error(Msg::ProductNotFound);
                router.navigate_to(AppRoute::Products);
                return;
            };
            match api.product_by_id(id).await {
                Ok(Some(product)) => {
                    state.fill(&product);
                    loading.set(false);
                }
                Ok(None) => FailureAction::BackToList(Msg::ProductNotFound).apply(&notifier, &router),
                Err(e) => match FailureAction::resolve(&e, Msg::ProductNotFound) {
                    // 没有数据可编辑，通用错误同样回到列表
                    FailureAction::Notify(msg) => FailureAction::BackToList(msg).apply(&notifier, &router),
                    FailureAction::AlreadyNotified => router.navigate_to(AppRoute::Products),
                    action => action.apply(&notifier, &router),
                },
            }
        });
    }

    let on_submit = move |input: ProductInput| {
        let Some(id) = id else { return };
        saving.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.update_product(id, input).await {
                Ok(Some(_)) => {
                    log::info!("[Products] updated #{}", id);
                    notifier.success(Msg::ProductUpdated);
                    router.navigate_to(AppRoute::Products);
                }
                Ok(None) => notifier.error(Msg::UpdateFailed),
                Err(e) => FailureAction::resolve(&e, Msg::UpdateFailed).apply(&notifier, &router),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <div class="card-body">
                <h3 class="card-title">
                    {i18n.tr(Msg::EditTitle)}
                    <Show when=move || loading.get()>
                        <span class="loading loading-spinner loading-sm"></span>
                    </Show>
                </h3>
                <ProductForm
                    state=state
                    busy=Signal::derive(move || loading.get() || saving.get())
                    submit_label=Msg::Save
                    on_submit=on_submit
                />
            </div>
        </div>
    }
}
