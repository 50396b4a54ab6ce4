use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::AppError;
use crate::domain::returns::{
    ReturnLineInput, ReturnMethod, ReturnReason, ReturnStatus, ReturnSubmission, ReturnView,
};
use crate::AppReturnService;

/// Header carrying the caller-authenticated customer identity.
pub const CUSTOMER_ID_HEADER: &str = "X-Customer-ID";

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItemRequest {
    pub order_item_id: i64,
    pub quantity_to_return: i32,
    pub condition: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReturnRequest {
    pub order_number: String,
    pub reason: ReturnReason,
    pub method: ReturnMethod,
    pub notes: Option<String>,
    pub return_items: Vec<ReturnItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReturnResponse {
    pub rma_number: String,
    pub order_number: String,
    pub reason: ReturnReason,
    pub method: ReturnMethod,
    pub status: ReturnStatus,
    pub notes: Option<String>,
    pub tracking_number: Option<String>,
    pub qr_code_data: Option<String>,
    pub shipping_label_url: Option<String>,
    pub requested_date: String,
    pub processed_date: Option<String>,
    pub completed_date: Option<String>,
}

impl From<ReturnView> for ReturnResponse {
    fn from(v: ReturnView) -> Self {
        ReturnResponse {
            rma_number: v.rma_number,
            order_number: v.order_number,
            reason: v.reason,
            method: v.method,
            status: v.status,
            notes: v.notes,
            tracking_number: v.tracking_number,
            qr_code_data: v.qr_code_data,
            shipping_label_url: v.shipping_label_url,
            requested_date: v.requested_date.to_rfc3339(),
            processed_date: v.processed_date.map(|d| d.to_rfc3339()),
            completed_date: v.completed_date.map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StatusParams {
    pub status: ReturnStatus,
}

fn customer_id_header(req: &HttpRequest) -> Result<String, AppError> {
    req.headers()
        .get(CUSTOMER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| AppError::BadRequest(format!("{CUSTOMER_ID_HEADER} header is required")))
}

fn to_submission(body: CreateReturnRequest) -> Result<ReturnSubmission, AppError> {
    if body.return_items.is_empty() {
        return Err(AppError::BadRequest(
            "returnItems must not be empty".to_string(),
        ));
    }
    for item in &body.return_items {
        if item.quantity_to_return < 1 {
            return Err(AppError::BadRequest(
                "quantityToReturn must be at least 1".to_string(),
            ));
        }
    }
    Ok(ReturnSubmission {
        order_number: body.order_number,
        reason: body.reason,
        method: body.method,
        notes: body.notes,
        items: body
            .return_items
            .into_iter()
            .map(|i| ReturnLineInput {
                order_item_id: i.order_item_id,
                quantity_to_return: i.quantity_to_return,
                condition: i.condition,
                notes: i.notes,
            })
            .collect(),
    })
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /returns
///
/// Creates a return request for eligible merchandise. The request, its line
/// items and the fulfillment artifact fields are committed in one database
/// transaction; any rejection leaves nothing behind.
#[utoipa::path(
    post,
    path = "/returns",
    request_body = CreateReturnRequest,
    responses(
        (status = 201, description = "Return request created and approved", body = ReturnResponse),
        (status = 400, description = "Invalid request data"),
        (status = 403, description = "Order does not belong to customer"),
        (status = 404, description = "Customer, order, or order item not found"),
        (status = 409, description = "Items not eligible for return"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "returns"
)]
pub async fn create_return(
    service: web::Data<AppReturnService>,
    req: HttpRequest,
    body: web::Json<CreateReturnRequest>,
) -> Result<HttpResponse, AppError> {
    let customer_id = customer_id_header(&req)?;
    let submission = to_submission(body.into_inner())?;

    let view = web::block(move || {
        service
            .create_return(&customer_id, submission)
            .map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(ReturnResponse::from(view)))
}

/// GET /returns/{rmaNumber}
#[utoipa::path(
    get,
    path = "/returns/{rmaNumber}",
    params(
        ("rmaNumber" = String, Path, description = "RMA number of the return request"),
    ),
    responses(
        (status = 200, description = "Return request found", body = ReturnResponse),
        (status = 404, description = "Return request not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "returns"
)]
pub async fn get_return(
    service: web::Data<AppReturnService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let rma_number = path.into_inner();

    let view = web::block(move || service.get_by_rma(&rma_number).map_err(AppError::from))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(ReturnResponse::from(view)))
}

/// GET /returns/customer/{customerId}
///
/// All return requests for a customer, newest first.
#[utoipa::path(
    get,
    path = "/returns/customer/{customerId}",
    params(
        ("customerId" = String, Path, description = "Customer identifier"),
    ),
    responses(
        (status = 200, description = "Customer returns", body = [ReturnResponse]),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "returns"
)]
pub async fn get_customer_returns(
    service: web::Data<AppReturnService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    let views = web::block(move || {
        service
            .get_customer_returns(&customer_id)
            .map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let responses: Vec<ReturnResponse> = views.into_iter().map(ReturnResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

/// PUT /returns/{rmaNumber}/status?status=SHIPPED
///
/// Administrative transition. Terminal states refuse further changes.
#[utoipa::path(
    put,
    path = "/returns/{rmaNumber}/status",
    params(
        ("rmaNumber" = String, Path, description = "RMA number of the return request"),
        ("status" = ReturnStatus, Query, description = "New status"),
    ),
    responses(
        (status = 200, description = "Status updated"),
        (status = 404, description = "Return request not found"),
        (status = 409, description = "Return request is in a terminal state"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "returns"
)]
pub async fn update_return_status(
    service: web::Data<AppReturnService>,
    path: web::Path<String>,
    query: web::Query<StatusParams>,
) -> Result<HttpResponse, AppError> {
    let rma_number = path.into_inner();
    let status = query.into_inner().status;

    web::block(move || {
        service
            .update_status(&rma_number, status)
            .map_err(AppError::from)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().finish())
}

/// GET /returns/health
#[utoipa::path(
    get,
    path = "/returns/health",
    responses((status = 200, description = "Service is healthy")),
    tag = "returns"
)]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().body("Return service is healthy")
}
