use crate::components::confirm_delete_dialog::ConfirmDeleteDialog;
use crate::components::icons::*;
use crate::failure::{DeleteOutcome, FailureAction};
use crate::i18n::{Msg, use_i18n};
use crate::notify::{Notifier, use_notifier};
use crate::web::route::AppRoute;
use crate::web::router::{Link, use_router};
use crate::{Api, use_app};
use catalog_shared::Product;
use catalog_shared::date::display_timestamp;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 从服务端重新加载列表；失败时保留旧数据
fn load_products(
    api: Api,
    products: RwSignal<Vec<Product>>,
    loading: RwSignal<bool>,
    notifier: Notifier,
) {
    loading.set(true);
    spawn_local(async move {
        match api.products().await {
            Ok(list) => products.set(list),
            Err(e) => match FailureAction::resolve(&e, Msg::LoadProductsFailed) {
                FailureAction::SignedOut | FailureAction::AlreadyNotified => {}
                FailureAction::BackToList(msg) | FailureAction::Notify(msg) => notifier.error(msg),
            },
        }
        loading.set(false);
    });
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = use_app().api;
    let notifier = use_notifier();
    let i18n = use_i18n();
    let router = use_router();

    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(false);
    let delete_target = RwSignal::new(Option::<Product>::None);

    // 每次进入列表页都重新加载
    load_products(api.clone(), products, loading, notifier);

    let on_refresh = {
        let api = api.clone();
        move |_| load_products(api.clone(), products, loading, notifier)
    };

    let on_confirm_delete = move |product: Product| {
        let api = api.clone();
        spawn_local(async move {
            let result = api.delete_product(product.id).await;
            let outcome = DeleteOutcome::resolve(&result);
            match outcome {
                DeleteOutcome::Deleted => {
                    log::info!("[Products] deleted #{} {}", product.id, product.name);
                    notifier.success(Msg::ProductDeleted);
                }
                DeleteOutcome::Failed(msg) => {
                    log::warn!("[Products] delete of #{} failed: {:?}", product.id, result);
                    notifier.error(msg);
                }
                DeleteOutcome::SignedOut => {}
            }
            if outcome.should_reload() {
                load_products(api, products, loading, notifier);
            }
        });
    };

    let total = move || products.with(Vec::len);

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body p-0">
                <div class="flex items-center justify-between p-6 pb-2">
                    <div>
                        <h3 class="card-title">{i18n.tr(Msg::ProductsTitle)}</h3>
                        <p class="text-base-content/70 text-sm">{i18n.tr(Msg::ProductsSubtitle)}</p>
                    </div>
                    <div class="flex gap-2">
                        <button
                            on:click=on_refresh
                            disabled=move || loading.get()
                            title=i18n.tr(Msg::Refresh)
                            class="btn btn-ghost btn-circle"
                        >
                            <RefreshCw attr:class=move || if loading.get() { "h-5 w-5 animate-spin" } else { "h-5 w-5" } />
                        </button>
                        <Link to=AppRoute::NewProduct class="btn btn-primary gap-2">
                            <Plus attr:class="h-4 w-4" />
                            {i18n.tr(Msg::NavNewProduct)}
                        </Link>
                    </div>
                </div>

                <div class="overflow-x-auto w-full">
                    <table class="table table-zebra w-full">
                        <thead>
                            <tr>
                                <th>{i18n.tr(Msg::ColName)}</th>
                                <th class="text-right">{i18n.tr(Msg::ColPrice)}</th>
                                <th class="text-right">{i18n.tr(Msg::ColQuantity)}</th>
                                <th class="hidden md:table-cell">{i18n.tr(Msg::ColCreatedAt)}</th>
                                <th>{i18n.tr(Msg::ColActions)}</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || total() == 0 && !loading.get()>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        {i18n.tr(Msg::NoProducts)}
                                    </td>
                                </tr>
                            </Show>
                            <Show when=move || loading.get() && total() == 0>
                                <tr>
                                    <td colspan="5" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " "
                                        {i18n.tr(Msg::Loading)}
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || products.get()
                                key=|p| p.id
                                children=move |product| {
                                    let edit = AppRoute::EditProduct(Some(product.id));
                                    let created = product
                                        .created_at
                                        .as_deref()
                                        .map(display_timestamp)
                                        .unwrap_or_default();
                                    let row = product.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <div class="font-bold">{product.name}</div>
                                                <div class="text-xs opacity-60 truncate max-w-xs">
                                                    {product.description.unwrap_or_default()}
                                                </div>
                                            </td>
                                            <td class="text-right font-mono">{format!("{:.2}", product.price)}</td>
                                            <td class="text-right font-mono">{product.quantity}</td>
                                            <td class="hidden md:table-cell text-sm opacity-70">{created}</td>
                                            <td>
                                                <div class="flex gap-1">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square"
                                                        title=i18n.tr(Msg::Edit)
                                                        on:click=move |_| router.navigate_to(edit)
                                                    >
                                                        <Pencil attr:class="h-4 w-4" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        title=i18n.tr(Msg::Delete)
                                                        on:click=move |_| delete_target.set(Some(row.clone()))
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>

        <ConfirmDeleteDialog target=delete_target on_confirm=on_confirm_delete />
    }
}
