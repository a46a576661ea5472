//! Состояние формы заявки и каскад категория → поставщик → материалы
//!
//! Все изменения проходят через [`ProcurementForm::apply`] с явным событием
//! [`FormEvent`]. Отрисовка читает состояние и ничего не хранит сама.

use thiserror::Error;

use super::aggregate::{ProcurementRequest, RequestType, SelectedMaterial};
use super::validation;
use crate::domain::a001_reference_data::{Material, ReferenceData, Supplier};

/// Событие от элементов формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    CategoryChanged(String),
    SupplierChanged(String),
    MaterialPicked(String),
    AddMaterial,
    RemoveMaterial(usize),
    QuantityChanged { index: usize, quantity: u32 },
    RequestorNameChanged(String),
    RequestorEmailChanged(String),
    RequestTypeChanged(RequestType),
    NotesChanged(String),
    Reset,
}

/// Отказ в изменении состояния (показывается пользователю рядом с полем)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Выберите материал для добавления")]
    NoMaterialSelected,

    #[error("Материал «{0}» уже добавлен")]
    DuplicateMaterial(String),

    #[error("Материал не найден в каталоге категории")]
    UnknownMaterial,

    #[error("Количество должно быть больше нуля")]
    InvalidQuantity,
}

/// Состояние формы заявки
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcurementForm {
    pub category: String,
    pub supplier_id: String,
    pub requestor_name: String,
    pub requestor_email: String,
    pub request_type: RequestType,
    pub notes: String,

    /// Текущее значение выпадающего списка материалов
    pub picked_material: String,
    pub supplier_options: Vec<Supplier>,
    pub material_options: Vec<Material>,
    /// Выбор материалов и кнопка «Добавить» доступны
    pub materials_enabled: bool,

    selected: Vec<SelectedMaterial>,
}

impl ProcurementForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Выбранные материалы в порядке добавления
    pub fn selected_materials(&self) -> &[SelectedMaterial] {
        &self.selected
    }

    /// Применить событие. При ошибке состояние не меняется.
    pub fn apply(&mut self, event: FormEvent, data: &ReferenceData) -> Result<(), FormError> {
        match event {
            FormEvent::CategoryChanged(category) => {
                self.change_category(category, data);
                Ok(())
            }
            FormEvent::SupplierChanged(supplier_id) => {
                self.change_supplier(supplier_id, data);
                Ok(())
            }
            FormEvent::MaterialPicked(id) => {
                self.picked_material = id;
                Ok(())
            }
            FormEvent::AddMaterial => self.add_picked_material(),
            FormEvent::RemoveMaterial(index) => {
                self.remove_material(index);
                Ok(())
            }
            FormEvent::QuantityChanged { index, quantity } => self.set_quantity(index, quantity),
            FormEvent::RequestorNameChanged(v) => {
                self.requestor_name = v;
                Ok(())
            }
            FormEvent::RequestorEmailChanged(v) => {
                self.requestor_email = v;
                Ok(())
            }
            FormEvent::RequestTypeChanged(t) => {
                self.request_type = t;
                Ok(())
            }
            FormEvent::NotesChanged(v) => {
                self.notes = v;
                Ok(())
            }
            FormEvent::Reset => {
                *self = Self::default();
                Ok(())
            }
        }
    }

    fn change_category(&mut self, category: String, data: &ReferenceData) {
        self.supplier_id.clear();
        self.supplier_options.clear();
        self.clear_material_picker();
        self.category = category;

        if self.category.is_empty() {
            return;
        }
        self.supplier_options = data.suppliers_for_category(&self.category);
    }

    fn change_supplier(&mut self, supplier_id: String, data: &ReferenceData) {
        self.clear_material_picker();
        self.supplier_id = supplier_id;

        if self.supplier_id.is_empty() {
            return;
        }
        let materials = data.materials_for_category(&self.category);
        if !materials.is_empty() {
            self.material_options = materials.to_vec();
            self.materials_enabled = true;
        }
    }

    fn clear_material_picker(&mut self) {
        self.picked_material.clear();
        self.material_options.clear();
        self.materials_enabled = false;
    }

    fn add_picked_material(&mut self) -> Result<(), FormError> {
        if self.picked_material.is_empty() {
            return Err(FormError::NoMaterialSelected);
        }
        let material = self
            .material_options
            .iter()
            .find(|m| m.id == self.picked_material)
            .ok_or(FormError::UnknownMaterial)?;
        if let Some(existing) = self.selected.iter().find(|m| m.id == material.id) {
            return Err(FormError::DuplicateMaterial(existing.name.clone()));
        }
        self.selected.push(SelectedMaterial::from(material));
        self.picked_material.clear();
        Ok(())
    }

    /// Индекс вне диапазона молча игнорируется
    pub fn remove_material(&mut self, index: usize) {
        if index < self.selected.len() {
            self.selected.remove(index);
        }
    }

    fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<(), FormError> {
        if quantity == 0 {
            return Err(FormError::InvalidQuantity);
        }
        if let Some(item) = self.selected.get_mut(index) {
            item.quantity = quantity;
        }
        Ok(())
    }

    /// Поставщик для панели контактов (скрыта, если не выбран)
    pub fn selected_supplier(&self) -> Option<&Supplier> {
        if self.supplier_id.is_empty() {
            return None;
        }
        self.supplier_options.iter().find(|s| s.id == self.supplier_id)
    }

    /// Кнопка отправки доступна
    pub fn can_submit(&self) -> bool {
        validation::can_submit(
            &self.category,
            &self.supplier_id,
            &self.requestor_name,
            &self.requestor_email,
            self.selected.len(),
        )
    }

    /// Собрать payload для отправки
    pub fn to_request(&self) -> ProcurementRequest {
        ProcurementRequest {
            category: self.category.clone(),
            supplier_id: self.supplier_id.clone(),
            supplier_name: self
                .selected_supplier()
                .map(|s| s.name.clone())
                .unwrap_or_default(),
            requestor_name: self.requestor_name.trim().to_string(),
            requestor_email: self.requestor_email.trim().to_string(),
            request_type: self.request_type,
            notes: self.notes.trim().to_string(),
            materials: self.selected.clone(),
        }
    }
}
