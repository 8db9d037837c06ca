use crate::components::product_form::{FormState, ProductForm};
use crate::failure::FailureAction;
use crate::i18n::{Msg, use_i18n};
use crate::notify::use_notifier;
use crate::use_app;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use catalog_shared::ProductInput;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CreateProductPage() -> impl IntoView {
    let api = use_app().api;
    let notifier = use_notifier();
    let router = use_router();
    let i18n = use_i18n();

    let state = FormState::new();
    let saving = RwSignal::new(false);

    let on_submit = move |input: ProductInput| {
        saving.set(true);
        let api = api.clone();
        spawn_local(async move {
            match api.create_product(input).await {
                Ok(Some(product)) => {
                    log::info!("[Products] created #{} {}", product.id, product.name);
                    notifier.success(Msg::ProductCreated);
                    router.navigate_to(AppRoute::Products);
                }
                Ok(None) => notifier.error(Msg::CreateFailed),
                Err(e) => FailureAction::resolve(&e, Msg::CreateFailed).apply(&notifier, &router),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-xl max-w-2xl mx-auto">
            <div class="card-body">
                <h3 class="card-title">{i18n.tr(Msg::CreateTitle)}</h3>
                <ProductForm state=state busy=saving submit_label=Msg::Create on_submit=on_submit />
            </div>
        </div>
    }
}
