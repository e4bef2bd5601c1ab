use axum::{Extension, Json};
use bizloc_core::BusinessObject;

use crate::middleware::RequestId;

use super::ApiResponse;

pub(super) async fn template(
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<BusinessObject>> {
    Json(ApiResponse::new(req_id.0, BusinessObject::template()))
}
