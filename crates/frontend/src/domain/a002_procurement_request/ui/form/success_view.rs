use contracts::domain::a002_procurement_request::{RequestType, SubmissionReceipt};
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Подтверждение принятой заявки
#[component]
pub fn SuccessView(receipt: SubmissionReceipt, on_new: Callback<()>) -> impl IntoView {
    let (icon_name, title) = match receipt.request_type {
        RequestType::Order => ("order", "Заказ отправлен"),
        RequestType::Quote => ("quote", "Запрос цены отправлен"),
    };

    view! {
        <div class="success-view" role="status">
            <div class="success-view__icon">{icon("check")}</div>
            <h2 class="success-view__title">{icon(icon_name)} " " {title}</h2>
            <p>
                "Номер заявки: "
                <strong class="success-view__id">{receipt.reference_id}</strong>
            </p>
            <p>"Поставщик: " {receipt.supplier_name}</p>
            <Button on_click=Callback::new(move |_| on_new.run(()))>
                "Новая заявка"
            </Button>
        </div>
    }
}
