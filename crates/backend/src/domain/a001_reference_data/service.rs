use contracts::domain::a001_reference_data::ReferenceData;
use std::path::Path;

/// Встроенный набор справочных данных
const DEFAULT_REFERENCE_DATA: &str = include_str!("../../../data/reference_data.json");

/// Загрузить справочные данные из файла или встроенного набора
pub fn load(path: Option<&Path>) -> anyhow::Result<ReferenceData> {
    match path {
        Some(path) => {
            tracing::info!("Loading reference data from: {}", path.display());
            let contents = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;
            parse(&contents)
        }
        None => {
            tracing::info!("Using embedded reference data");
            parse(DEFAULT_REFERENCE_DATA)
        }
    }
}

pub fn parse(contents: &str) -> anyhow::Result<ReferenceData> {
    let data: ReferenceData = serde_json::from_str(contents)?;
    validate(&data)?;
    Ok(data)
}

/// Проверка целостности: уникальные id материалов внутри категории,
/// у поставщиков и материалов непустые id
fn validate(data: &ReferenceData) -> anyhow::Result<()> {
    for (category, suppliers) in &data.suppliers_by_category {
        if let Some(s) = suppliers.iter().find(|s| s.id.trim().is_empty()) {
            anyhow::bail!("supplier '{}' in '{}' has empty id", s.name, category);
        }
    }

    for (category, materials) in &data.materials {
        let mut ids: Vec<&str> = Vec::with_capacity(materials.len());
        for m in materials {
            if m.id.trim().is_empty() {
                anyhow::bail!("material '{}' in '{}' has empty id", m.name, category);
            }
            if ids.contains(&m.id.as_str()) {
                anyhow::bail!("duplicate material id '{}' in '{}'", m.id, category);
            }
            ids.push(&m.id);
        }
        if !data.has_category(category) {
            tracing::warn!("Materials listed for unknown category '{}'", category);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_is_valid() {
        let data = load(None).unwrap();
        assert!(!data.categories.is_empty());
        // "Electrical" нет среди ключей поставщиков - подбор по специализации
        assert!(!data.suppliers_by_category.contains_key("Electrical"));
        assert!(!data.suppliers_for_category("Electrical").is_empty());
        assert!(!data.materials_for_category("Electrical").is_empty());
    }

    #[test]
    fn test_duplicate_material_rejected() {
        let json = r#"{
            "categories": [{"name": "A", "description": ""}],
            "suppliersByCategory": {},
            "materials": {"A": [
                {"id": "m1", "name": "One", "code": "", "unit": "", "subcategory": ""},
                {"id": "m1", "name": "Two", "code": "", "unit": "", "subcategory": ""}
            ]}
        }"#;
        assert!(parse(json).is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let path = std::env::temp_dir().join("procurement-missing-reference.json");
        assert!(load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "procurement-reference-{}.json",
            std::process::id()
        ));
        std::fs::write(
            &path,
            r#"{"categories": [{"name": "Tools", "description": "Hand tools"}]}"#,
        )
        .unwrap();
        let data = load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(data.categories[0].name, "Tools");
        assert!(data.suppliers_by_category.is_empty());
    }
}
