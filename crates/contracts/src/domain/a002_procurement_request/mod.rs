pub mod aggregate;
pub mod form_state;
pub mod validation;

pub use aggregate::{
    ProcurementRequest, RequestType, SelectedMaterial, SubmissionReceipt, SubmitResponse,
};
pub use form_state::{FormError, FormEvent, ProcurementForm};
