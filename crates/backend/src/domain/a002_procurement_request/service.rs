use contracts::domain::a001_reference_data::ReferenceData;
use contracts::domain::a002_procurement_request::{ProcurementRequest, RequestType};

/// Принять заявку и выдать идентификатор `<TYPE>-<timestamp_ms>`.
///
/// Тип заявки определяет эндпоинт; `requestType` из тела только сверяется.
pub fn submit(
    endpoint_type: RequestType,
    request: &ProcurementRequest,
    reference: &ReferenceData,
    timestamp_ms: u64,
) -> Result<String, String> {
    request.validate()?;

    if !reference.has_category(&request.category) {
        return Err(format!("Неизвестная категория: {}", request.category));
    }
    if reference.find_supplier(&request.supplier_id).is_none() {
        return Err(format!("Неизвестный поставщик: {}", request.supplier_id));
    }

    if request.request_type != endpoint_type {
        tracing::warn!(
            "requestType '{}' does not match endpoint '{}', using endpoint type",
            request.request_type,
            endpoint_type
        );
    }

    let reference_id = endpoint_type.reference_id(timestamp_ms);
    let total_quantity: u64 = request.materials.iter().map(|m| m.quantity as u64).sum();
    tracing::info!(
        "{} accepted: {} | supplier={} | requestor={} <{}> | items={} qty={}",
        endpoint_type.display_name(),
        reference_id,
        request.supplier_id,
        request.requestor_name,
        request.requestor_email,
        request.materials.len(),
        total_quantity
    );
    Ok(reference_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_procurement_request::SelectedMaterial;

    fn reference() -> ReferenceData {
        crate::domain::a001_reference_data::service::load(None).unwrap()
    }

    fn request() -> ProcurementRequest {
        ProcurementRequest {
            category: "Plumbing".into(),
            supplier_id: "SUP-001".into(),
            supplier_name: "Northline Pipe & Valve".into(),
            requestor_name: "Ann Buyer".into(),
            requestor_email: "ann@example.com".into(),
            request_type: RequestType::Order,
            notes: String::new(),
            materials: vec![SelectedMaterial {
                id: "MAT-101".into(),
                name: "Copper pipe 22mm".into(),
                code: "CP-22".into(),
                unit: "m".into(),
                subcategory: "Pipes".into(),
                quantity: 3,
            }],
        }
    }

    #[test]
    fn test_submit_order() {
        let id = submit(RequestType::Order, &request(), &reference(), 1000).unwrap();
        assert_eq!(id, "ORDER-1000");
    }

    #[test]
    fn test_endpoint_type_wins() {
        let id = submit(RequestType::Quote, &request(), &reference(), 7).unwrap();
        assert_eq!(id, "QUOTE-7");
    }

    #[test]
    fn test_unknown_supplier_rejected() {
        let mut r = request();
        r.supplier_id = "SUP-999".into();
        assert!(submit(RequestType::Order, &r, &reference(), 1).is_err());
    }

    #[test]
    fn test_invalid_payload_rejected() {
        let mut r = request();
        r.requestor_email = "ann".into();
        assert!(submit(RequestType::Order, &r, &reference(), 1).is_err());

        let mut r = request();
        r.category = "Nope".into();
        assert!(submit(RequestType::Order, &r, &reference(), 1).is_err());
    }
}
