use super::model;
use crate::domain::a001_reference_data::api;
use contracts::domain::a001_reference_data::ReferenceData;
use contracts::domain::a002_procurement_request::{
    validation, FormEvent, ProcurementForm, SubmissionReceipt,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Баннер с ошибкой скрывается сам через 5 секунд
const BANNER_TIMEOUT_MS: u32 = 5_000;

/// ViewModel формы заявки
///
/// Все сигналы `Copy`, поэтому модель передаётся по значению в обработчики
/// и асинхронные задачи.
#[derive(Clone, Copy)]
pub struct ProcurementFormViewModel {
    pub reference: RwSignal<ReferenceData>,
    pub form: RwSignal<ProcurementForm>,
    /// Справочники ещё загружаются
    pub loading: RwSignal<bool>,
    /// Заявка отправлена, ответа ещё нет
    pub submitting: RwSignal<bool>,
    /// Отказ в добавлении материала, показывается у кнопки «Добавить»
    pub add_error: RwSignal<Option<String>>,
    pub banner: RwSignal<Option<String>>,
    banner_generation: RwSignal<u32>,
    /// Подтверждение последней успешной заявки
    pub receipt: RwSignal<Option<SubmissionReceipt>>,
}

impl ProcurementFormViewModel {
    pub fn new() -> Self {
        Self {
            reference: RwSignal::new(ReferenceData::default()),
            form: RwSignal::new(ProcurementForm::new()),
            loading: RwSignal::new(true),
            submitting: RwSignal::new(false),
            add_error: RwSignal::new(None),
            banner: RwSignal::new(None),
            banner_generation: RwSignal::new(0),
            receipt: RwSignal::new(None),
        }
    }

    /// Загрузить справочники. При ошибке форма остаётся пустой, а причина
    /// показывается в баннере.
    pub fn load(&self) {
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::load_reference_data().await {
                Ok(data) => {
                    log::info!(
                        "Reference data loaded: {} categories",
                        data.categories.len()
                    );
                    vm.reference.set(data);
                }
                Err(e) => {
                    log::error!("Reference data load failed: {}", e);
                    vm.show_error(e);
                }
            }
            vm.loading.set(false);
        });
    }

    /// Применить событие формы
    pub fn dispatch(&self, event: FormEvent) {
        let mut result = Ok(());
        self.reference.with_untracked(|data| {
            self.form.update(|form| result = form.apply(event, data));
        });
        match result {
            Ok(()) => {
                if self.add_error.get_untracked().is_some() {
                    self.add_error.set(None);
                }
            }
            Err(e) => {
                log::debug!("Form event rejected: {}", e);
                self.add_error.set(Some(e.to_string()));
            }
        }
    }

    /// Кнопка отправки доступна: форма заполнена и предыдущая отправка завершена
    pub fn can_submit(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        let submitting = self.submitting;
        move || !submitting.get() && form.with(|f| f.can_submit())
    }

    /// Email введён и не проходит проверку формата
    pub fn email_invalid(&self) -> impl Fn() -> bool + Copy + 'static {
        let form = self.form;
        move || {
            form.with(|f| {
                validation::is_filled(&f.requestor_email)
                    && !validation::is_valid_email(f.requestor_email.trim())
            })
        }
    }

    /// Отправить заявку
    ///
    /// Повторный вызов во время отправки игнорируется. После ответа кнопка
    /// снова доступна при любом исходе.
    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        if !form.can_submit() {
            return;
        }

        let request = form.to_request();
        let vm = *self;
        vm.submitting.set(true);
        vm.dismiss_banner();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = model::submit_request(&request).await.and_then(|response| {
                SubmissionReceipt::from_response(
                    &response,
                    request.request_type,
                    &request.supplier_name,
                    now_ms(),
                )
            });

            match outcome {
                Ok(receipt) => {
                    log::info!(
                        "{} submitted: {}",
                        receipt.request_type.display_name(),
                        receipt.reference_id
                    );
                    vm.dispatch(FormEvent::Reset);
                    vm.receipt.set(Some(receipt));
                }
                Err(e) => {
                    log::warn!("Submit failed: {}", e);
                    vm.show_error(e);
                }
            }
            vm.submitting.set(false);
        });
    }

    /// Закрыть подтверждение и начать новую заявку
    pub fn new_request_command(&self) {
        self.dispatch(FormEvent::Reset);
        self.receipt.set(None);
    }

    /// Показать ошибку в баннере; скрывается через [`BANNER_TIMEOUT_MS`],
    /// если за это время не появилась новая.
    pub fn show_error(&self, message: String) {
        let generation = self.banner_generation.get_untracked().wrapping_add(1);
        self.banner_generation.set(generation);
        self.banner.set(Some(message));

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            if vm.banner_generation.get_untracked() == generation {
                vm.banner.set(None);
            }
        });
    }

    pub fn dismiss_banner(&self) {
        self.banner_generation.update(|g| *g = g.wrapping_add(1));
        self.banner.set(None);
    }
}

impl Default for ProcurementFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
