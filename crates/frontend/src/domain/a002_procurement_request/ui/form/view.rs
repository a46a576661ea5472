use contracts::domain::a002_procurement_request::{FormEvent, RequestType};
use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

use super::materials_list::MaterialsList;
use super::success_view::SuccessView;
use super::supplier_info::SupplierInfo;
use super::view_model::ProcurementFormViewModel;
use crate::shared::components::banner::ErrorBanner;
use crate::shared::components::ui::{Button, Input, RadioGroup, Select, Textarea};
use crate::shared::icons::icon;

/// Страница заявки на закупку
#[component]
pub fn ProcurementRequestPage() -> impl IntoView {
    let vm = expect_context::<ProcurementFormViewModel>();

    view! {
        <main class="page">
            <header class="page__header">
                <h1 class="page__title">"Заявка на закупку материалов"</h1>
            </header>

            <ErrorBanner
                message=vm.banner
                on_dismiss=Callback::new(move |_| vm.dismiss_banner())
            />

            {move || match vm.receipt.get() {
                Some(receipt) => view! {
                    <SuccessView
                        receipt=receipt
                        on_new=Callback::new(move |_| vm.new_request_command())
                    />
                }.into_any(),
                None => view! { <RequestForm vm=vm /> }.into_any(),
            }}
        </main>
    }
}

#[component]
fn RequestForm(vm: ProcurementFormViewModel) -> impl IntoView {
    let form = vm.form;
    let busy = vm.submitting;

    let category_options = Signal::derive(move || {
        vm.reference.with(|r| {
            r.categories
                .iter()
                .map(|c| (c.name.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let category_hint = move || {
        let category = form.with(|f| f.category.clone());
        vm.reference.with(|r| {
            r.categories
                .iter()
                .find(|c| c.name == category)
                .map(|c| c.description.clone())
                .filter(|d| !d.is_empty())
        })
    };
    let supplier_options = Signal::derive(move || {
        form.with(|f| {
            f.supplier_options
                .iter()
                .map(|s| (s.id.clone(), s.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let material_options = Signal::derive(move || {
        form.with(|f| {
            f.material_options
                .iter()
                .map(|m| {
                    let label = if m.code.is_empty() {
                        format!("{} ({})", m.name, m.unit)
                    } else {
                        format!("{} [{}] ({})", m.name, m.code, m.unit)
                    };
                    (m.id.clone(), label)
                })
                .collect::<Vec<_>>()
        })
    });
    let supplier_locked = move || busy.get() || form.with(|f| f.category.is_empty());
    let materials_locked = move || busy.get() || form.with(|f| !f.materials_enabled);
    let request_type_options = Signal::derive(RequestType::options);

    let can_submit = vm.can_submit();
    let email_invalid = vm.email_invalid();

    view! {
        <form
            class="form"
            novalidate=true
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                vm.submit_command();
            }
        >
            <Show when=move || vm.loading.get()>
                <div class="form__loading">
                    <Spinner size=SpinnerSize::Small />
                    " Загрузка справочников..."
                </div>
            </Show>

            <section class="form__section">
                <h2 class="form__section-title">"Поставщик"</h2>
                <Select
                    id="category"
                    label="Категория"
                    placeholder="Выберите категорию"
                    value=Signal::derive(move || form.with(|f| f.category.clone()))
                    options=category_options
                    disabled=Signal::derive(move || busy.get() || vm.loading.get())
                    on_change=Callback::new(move |v: String| vm.dispatch(FormEvent::CategoryChanged(v)))
                />
                {move || category_hint().map(|d| view! { <div class="form__hint">{d}</div> })}

                <Select
                    id="supplier"
                    label="Поставщик"
                    placeholder=Signal::derive(move || {
                        if form.with(|f| f.category.is_empty()) {
                            "Сначала выберите категорию".to_string()
                        } else if supplier_options.with(|o| o.is_empty()) {
                            "Нет поставщиков для категории".to_string()
                        } else {
                            "Выберите поставщика".to_string()
                        }
                    })
                    value=Signal::derive(move || form.with(|f| f.supplier_id.clone()))
                    options=supplier_options
                    disabled=Signal::derive(supplier_locked)
                    on_change=Callback::new(move |v: String| vm.dispatch(FormEvent::SupplierChanged(v)))
                />
                {move || {
                    form.with(|f| f.selected_supplier().cloned())
                        .map(|supplier| view! { <SupplierInfo supplier=supplier /> })
                }}
            </section>

            <section class="form__section">
                <h2 class="form__section-title">{icon("materials")} " Материалы"</h2>
                <div class="form__row">
                    <Select
                        id="material"
                        placeholder=Signal::derive(move || {
                            if form.with(|f| f.supplier_id.is_empty()) {
                                "Сначала выберите поставщика".to_string()
                            } else if form.with(|f| !f.materials_enabled) {
                                "Нет материалов в категории".to_string()
                            } else {
                                "Выберите материал".to_string()
                            }
                        })
                        value=Signal::derive(move || form.with(|f| f.picked_material.clone()))
                        options=material_options
                        disabled=Signal::derive(materials_locked)
                        on_change=Callback::new(move |v: String| vm.dispatch(FormEvent::MaterialPicked(v)))
                    />
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(materials_locked)
                        on_click=Callback::new(move |_| vm.dispatch(FormEvent::AddMaterial))
                    >
                        {icon("plus")}
                        " Добавить"
                    </Button>
                </div>
                {move || vm.add_error.get().map(|e| view! {
                    <div class="form__hint form__hint--error" role="alert">{e}</div>
                })}
                <MaterialsList vm=vm />
            </section>

            <section class="form__section">
                <h2 class="form__section-title">"Заявитель"</h2>
                <Input
                    id="requestor-name"
                    label="Имя"
                    placeholder="Иван Петров"
                    autocomplete="name"
                    value=Signal::derive(move || form.with(|f| f.requestor_name.clone()))
                    disabled=Signal::derive(move || busy.get())
                    on_input=Callback::new(move |v: String| vm.dispatch(FormEvent::RequestorNameChanged(v)))
                />
                <Input
                    id="requestor-email"
                    label="Email"
                    input_type="email"
                    placeholder="name@company.com"
                    autocomplete="email"
                    value=Signal::derive(move || form.with(|f| f.requestor_email.clone()))
                    invalid=Signal::derive(email_invalid)
                    hint="Введите корректный email"
                    disabled=Signal::derive(move || busy.get())
                    on_input=Callback::new(move |v: String| vm.dispatch(FormEvent::RequestorEmailChanged(v)))
                />
                <RadioGroup
                    label="Тип заявки"
                    name="request-type"
                    value=Signal::derive(move || form.with(|f| f.request_type.as_str().to_string()))
                    options=request_type_options
                    disabled=Signal::derive(move || busy.get())
                    on_change=Callback::new(move |v: String| {
                        vm.dispatch(FormEvent::RequestTypeChanged(RequestType::parse(&v)))
                    })
                />
                <Textarea
                    id="notes"
                    label="Комментарий"
                    placeholder="Сроки, адрес доставки, прочее"
                    value=Signal::derive(move || form.with(|f| f.notes.clone()))
                    disabled=Signal::derive(move || busy.get())
                    on_input=Callback::new(move |v: String| vm.dispatch(FormEvent::NotesChanged(v)))
                />
            </section>

            <div class="form__actions">
                <Button
                    button_type="submit"
                    disabled=Signal::derive(move || !can_submit())
                    busy=Signal::derive(move || busy.get())
                >
                    {move || {
                        if busy.get() {
                            "Отправка...".to_string()
                        } else {
                            format!("Отправить: {}", form.with(|f| f.request_type.display_name()))
                        }
                    }}
                </Button>
            </div>
        </form>
    }
}
