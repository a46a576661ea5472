use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Catalog entries
// ============================================================================

/// Категория материалов (верхний уровень каскада)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Поставщик
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub specialties: Vec<String>,
}

impl Supplier {
    /// Специализация поставщика пересекается с названием категории
    /// (подстрока в любую сторону, без учета регистра)
    pub fn matches_category(&self, category: &str) -> bool {
        let category = category.trim().to_lowercase();
        if category.is_empty() {
            return false;
        }
        self.specialties.iter().any(|s| {
            let s = s.trim().to_lowercase();
            !s.is_empty() && (s.contains(&category) || category.contains(&s))
        })
    }
}

/// Материал из каталога
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub subcategory: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Справочные данные формы. Загружаются один раз при старте и дальше только читаются.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReferenceData {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(rename = "suppliersByCategory", default)]
    pub suppliers_by_category: BTreeMap<String, Vec<Supplier>>,

    #[serde(default)]
    pub materials: BTreeMap<String, Vec<Material>>,
}

impl ReferenceData {
    /// Поставщики для категории.
    ///
    /// Сначала прямой поиск по ключу; если по ключу ничего нет, берутся все
    /// поставщики, чья специализация совпадает с названием категории.
    /// Дубликаты по `id` отбрасываются, порядок - первое вхождение.
    pub fn suppliers_for_category(&self, category: &str) -> Vec<Supplier> {
        if category.is_empty() {
            return Vec::new();
        }

        if let Some(direct) = self.suppliers_by_category.get(category) {
            if !direct.is_empty() {
                return direct.clone();
            }
        }

        let mut found: Vec<Supplier> = Vec::new();
        for supplier in self.suppliers_by_category.values().flatten() {
            if supplier.matches_category(category) && !found.iter().any(|s| s.id == supplier.id) {
                found.push(supplier.clone());
            }
        }
        found
    }

    /// Материалы категории (пустой срез, если категории нет)
    pub fn materials_for_category(&self, category: &str) -> &[Material] {
        self.materials
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Найти поставщика по id среди всех категорий
    pub fn find_supplier(&self, id: &str) -> Option<&Supplier> {
        self.suppliers_by_category
            .values()
            .flatten()
            .find(|s| s.id == id)
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }
}

// ============================================================================
// API envelope
// ============================================================================

/// Ответ `GET /api/data/load`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoadDataResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReferenceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadDataResponse {
    pub fn ok(data: ReferenceData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Развернуть конверт в справочные данные или текст ошибки
    pub fn into_result(self) -> Result<ReferenceData, String> {
        if !self.success {
            return Err(self
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Не удалось загрузить справочные данные".to_string()));
        }
        self.data
            .ok_or_else(|| "Некорректный ответ сервера: нет справочных данных".to_string())
    }
}
