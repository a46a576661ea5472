use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation;
use crate::domain::a001_reference_data::Material;

// ============================================================================
// Request type
// ============================================================================

/// Тип заявки: заказ или запрос цены
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RequestType {
    #[default]
    Order,
    Quote,
}

impl RequestType {
    /// Значение в payload и в `<select>`
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Order => "order",
            RequestType::Quote => "quote",
        }
    }

    /// Только `order` означает заказ, любое другое значение - запрос цены
    pub fn parse(value: &str) -> Self {
        if value == "order" {
            RequestType::Order
        } else {
            RequestType::Quote
        }
    }

    /// Эндпоинт отправки
    pub fn submit_path(&self) -> &'static str {
        match self {
            RequestType::Order => "/api/order/submit",
            RequestType::Quote => "/api/quote/submit",
        }
    }

    /// Префикс идентификатора заявки
    pub fn id_prefix(&self) -> &'static str {
        match self {
            RequestType::Order => "ORDER",
            RequestType::Quote => "QUOTE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RequestType::Order => "Заказ",
            RequestType::Quote => "Запрос цены",
        }
    }

    /// Варианты для переключателя (value, label)
    pub fn options() -> Vec<(String, String)> {
        [RequestType::Order, RequestType::Quote]
            .iter()
            .map(|t| (t.as_str().to_string(), t.display_name().to_string()))
            .collect()
    }

    /// Сформировать идентификатор `<TYPE>-<timestamp>`
    pub fn reference_id(&self, timestamp_ms: u64) -> String {
        format!("{}-{}", self.id_prefix(), timestamp_ms)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RequestType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RequestType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(RequestType::parse(&value))
    }
}

// ============================================================================
// Selected material
// ============================================================================

/// Позиция в списке выбранных материалов
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMaterial {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl From<&Material> for SelectedMaterial {
    fn from(m: &Material) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
            code: m.code.clone(),
            unit: m.unit.clone(),
            subcategory: m.subcategory.clone(),
            quantity: default_quantity(),
        }
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Тело запроса `POST /api/{order|quote}/submit`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub supplier_id: String,
    #[serde(default)]
    pub supplier_name: String,
    #[serde(default)]
    pub requestor_name: String,
    #[serde(default)]
    pub requestor_email: String,
    #[serde(default)]
    pub request_type: RequestType,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub materials: Vec<SelectedMaterial>,
}

impl ProcurementRequest {
    /// Валидация данных (те же правила, что и у формы)
    pub fn validate(&self) -> Result<(), String> {
        if !validation::is_filled(&self.category) {
            return Err("Категория не выбрана".into());
        }
        if !validation::is_filled(&self.supplier_id) {
            return Err("Поставщик не выбран".into());
        }
        if !validation::is_filled(&self.requestor_name) {
            return Err("Имя заявителя обязательно для заполнения".into());
        }
        if !validation::is_valid_email(&self.requestor_email) {
            return Err("Некорректный email заявителя".into());
        }
        if self.materials.is_empty() {
            return Err("Список материалов пуст".into());
        }
        let mut ids: Vec<&str> = self.materials.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err("Материалы в списке повторяются".into());
        }
        if self.materials.iter().any(|m| m.quantity == 0) {
            return Err("Количество должно быть больше нуля".into());
        }
        Ok(())
    }
}

// ============================================================================
// Response
// ============================================================================

/// Ответ эндпоинта отправки
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(rename = "orderId", default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(rename = "quoteId", default, skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    /// Успешный ответ с идентификатором в поле, соответствующем типу
    pub fn accepted(request_type: RequestType, reference_id: String) -> Self {
        let mut resp = Self {
            success: true,
            ..Default::default()
        };
        match request_type {
            RequestType::Order => resp.order_id = Some(reference_id),
            RequestType::Quote => resp.quote_id = Some(reference_id),
        }
        resp
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Идентификатор из ответа: orderId, затем quoteId, затем id
    pub fn reference_id(&self) -> Option<&str> {
        [&self.order_id, &self.quote_id, &self.id]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }
}

/// Данные для экрана успешной отправки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub request_type: RequestType,
    pub reference_id: String,
    pub supplier_name: String,
}

impl SubmissionReceipt {
    /// Разобрать ответ сервера.
    ///
    /// Если сервер подтвердил заявку, но не вернул идентификатор,
    /// он генерируется как `<TYPE>-<timestamp_ms>`.
    pub fn from_response(
        response: &SubmitResponse,
        request_type: RequestType,
        supplier_name: &str,
        timestamp_ms: u64,
    ) -> Result<Self, String> {
        if !response.success {
            return Err(response
                .error
                .clone()
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "Сервер отклонил заявку".to_string()));
        }
        let reference_id = response
            .reference_id()
            .map(str::to_string)
            .unwrap_or_else(|| request_type.reference_id(timestamp_ms));
        Ok(Self {
            request_type,
            reference_id,
            supplier_name: supplier_name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material(id: &str) -> SelectedMaterial {
        SelectedMaterial {
            id: id.into(),
            name: format!("Material {id}"),
            code: format!("C-{id}"),
            unit: "pcs".into(),
            subcategory: "General".into(),
            quantity: 1,
        }
    }

    fn valid_request() -> ProcurementRequest {
        ProcurementRequest {
            category: "Plumbing".into(),
            supplier_id: "s1".into(),
            supplier_name: "Pipe Works".into(),
            requestor_name: "Ann".into(),
            requestor_email: "ann@example.com".into(),
            request_type: RequestType::Order,
            notes: String::new(),
            materials: vec![material("m1")],
        }
    }

    #[test]
    fn test_request_type_parse() {
        assert_eq!(RequestType::parse("order"), RequestType::Order);
        assert_eq!(RequestType::parse("quote"), RequestType::Quote);
        assert_eq!(RequestType::parse("something"), RequestType::Quote);
        assert_eq!(RequestType::parse("ORDER"), RequestType::Quote);
        assert_eq!(RequestType::parse(" order "), RequestType::Quote);
        assert_eq!(RequestType::parse(""), RequestType::Quote);
        assert_eq!(RequestType::Order.submit_path(), "/api/order/submit");
        assert_eq!(RequestType::Quote.submit_path(), "/api/quote/submit");
    }

    #[test]
    fn test_payload_wire_format() {
        let json = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(json["requestType"], "order");
        assert_eq!(json["supplierId"], "s1");
        assert_eq!(json["requestorEmail"], "ann@example.com");
        assert_eq!(json["materials"][0]["quantity"], 1);
    }

    #[test]
    fn test_validate() {
        assert!(valid_request().validate().is_ok());

        let mut r = valid_request();
        r.requestor_email = "nope".into();
        assert!(r.validate().is_err());

        let mut r = valid_request();
        r.materials.clear();
        assert!(r.validate().is_err());

        let mut r = valid_request();
        r.materials.push(material("m1"));
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_reference_id_priority() {
        let resp: SubmitResponse =
            serde_json::from_str(r#"{"success": true, "quoteId": "Q-7", "id": "X"}"#).unwrap();
        assert_eq!(resp.reference_id(), Some("Q-7"));

        let resp: SubmitResponse = serde_json::from_str(r#"{"success": true, "id": "X"}"#).unwrap();
        assert_eq!(resp.reference_id(), Some("X"));
    }

    #[test]
    fn test_receipt_synthesizes_id() {
        let resp = SubmitResponse {
            success: true,
            ..Default::default()
        };
        let receipt =
            SubmissionReceipt::from_response(&resp, RequestType::Quote, "Pipe Works", 1_700_000_000_123)
                .unwrap();
        assert_eq!(receipt.reference_id, "QUOTE-1700000000123");
        assert_eq!(receipt.supplier_name, "Pipe Works");

        let receipt =
            SubmissionReceipt::from_response(&resp, RequestType::Order, "Pipe Works", 42).unwrap();
        assert_eq!(receipt.reference_id, "ORDER-42");
    }

    #[test]
    fn test_receipt_failure_message() {
        let err = SubmissionReceipt::from_response(
            &SubmitResponse::rejected("нет такого поставщика"),
            RequestType::Order,
            "",
            0,
        )
        .unwrap_err();
        assert_eq!(err, "нет такого поставщика");

        let err = SubmissionReceipt::from_response(
            &SubmitResponse::default(),
            RequestType::Order,
            "",
            0,
        )
        .unwrap_err();
        assert_eq!(err, "Сервер отклонил заявку");
    }

    #[test]
    fn test_accepted_uses_type_field() {
        let resp = SubmitResponse::accepted(RequestType::Order, "ORDER-1".into());
        assert_eq!(resp.order_id.as_deref(), Some("ORDER-1"));
        assert!(resp.quote_id.is_none());
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["orderId"], "ORDER-1");
        assert!(json.get("quoteId").is_none());
    }
}
