use leptos::prelude::*;

/// Однострочное поле с подписью
///
/// Значение привязано к свойству `value`, поэтому сброс модели
/// очищает поле и после ручного ввода.
#[component]
pub fn Input(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// "text" (по умолчанию), "email" и т.п.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Подсветить поле как некорректное
    #[prop(optional, into)]
    invalid: MaybeProp<bool>,
    /// Подсказка под полем, видна только вместе с `invalid`
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional, into)]
    autocomplete: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let is_invalid = move || invalid.get().unwrap_or(false);

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class=move || {
                    if is_invalid() {
                        "form__input form__input--invalid"
                    } else {
                        "form__input"
                    }
                }
                type=input_t
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get().unwrap_or(false)
                autocomplete=move || autocomplete.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || {
                is_invalid()
                    .then(|| hint.get())
                    .flatten()
                    .map(|h| view! { <div class="form__hint form__hint--error">{h}</div> })
            }}
        </div>
    }
}
