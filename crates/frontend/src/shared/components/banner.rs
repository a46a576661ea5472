use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

/// Баннер с ошибкой над формой; скрыт, пока `message` пуст
#[component]
pub fn ErrorBanner(
    #[prop(into)]
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(|m| m.is_some())>
            <div class="banner" role="alert">
                <MessageBar intent=MessageBarIntent::Error>
                    <div class="banner__content">
                        <span class="banner__text">{move || message.get().unwrap_or_default()}</span>
                        <button
                            type="button"
                            class="banner__close"
                            title="Закрыть"
                            on:click=move |_| on_dismiss.run(())
                        >
                            "×"
                        </button>
                    </div>
                </MessageBar>
            </div>
        </Show>
    }
}
