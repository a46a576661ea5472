use contracts::domain::a002_procurement_request::FormEvent;
use leptos::prelude::*;

use super::view_model::ProcurementFormViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

/// Таблица выбранных материалов с количеством и удалением
#[component]
pub fn MaterialsList(vm: ProcurementFormViewModel) -> impl IntoView {
    let rows = move || {
        vm.form.with(|f| {
            f.selected_materials()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };
    let is_empty = move || vm.form.with(|f| f.selected_materials().is_empty());

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <div class="materials-list materials-list--empty">
                    "Материалы не выбраны"
                </div>
            }
        >
            <table class="materials-list">
                <thead>
                    <tr>
                        <th>"Материал"</th>
                        <th>"Код"</th>
                        <th>"Подкатегория"</th>
                        <th class="materials-list__qty">"Количество"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    // Индекс входит в ключ: после удаления строки перерисовываются
                    // с актуальными индексами для кнопок
                    <For
                        each=rows
                        key=|(index, item)| (*index, item.id.clone(), item.quantity)
                        children=move |(index, item)| {
                            let quantity = item.quantity.to_string();
                            view! {
                                <tr>
                                    <td>{item.name}</td>
                                    <td class="materials-list__code">{item.code}</td>
                                    <td>{item.subcategory}</td>
                                    <td class="materials-list__qty">
                                        <input
                                            type="number"
                                            min="1"
                                            class="form__input form__input--narrow"
                                            prop:value=quantity
                                            disabled=move || vm.submitting.get()
                                            on:change=move |ev| {
                                                match event_target_value(&ev).trim().parse::<u32>() {
                                                    Ok(quantity) => vm.dispatch(FormEvent::QuantityChanged { index, quantity }),
                                                    Err(_) => vm.add_error.set(Some("Количество должно быть целым числом".to_string())),
                                                }
                                            }
                                        />
                                        " "
                                        {item.unit}
                                    </td>
                                    <td>
                                        <Button
                                            variant="ghost"
                                            size="sm"
                                            title="Удалить"
                                            disabled=Signal::derive(move || vm.submitting.get())
                                            on_click=Callback::new(move |_| vm.dispatch(FormEvent::RemoveMaterial(index)))
                                        >
                                            {icon("trash")}
                                        </Button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
