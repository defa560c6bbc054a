use crate::{middleware::validate::SimpleValidatedJson, state::AppState};
use axum::{
    Json,
    extract::{Extension, Multipart, Path, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    domain::{
        requests::UpdateProductRequest,
        responses::{MessageResponse, ProductResponse, UploadResponse},
    },
    errors::{ErrorResponse, HttpError},
    service::ProductService,
};
use std::sync::Arc;
use tracing::warn;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

const IMAGE_FIELD: &str = "image";

/// Multipart form accepted by `POST /upload`.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    image: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/upload",
    tag = "Product",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Product details extracted and stored", body = UploadResponse),
        (status = 400, description = "Missing image, invalid image or unparseable model reply", body = ErrorResponse),
        (status = 500, description = "Model or database failure", body = ErrorResponse)
    )
)]
pub async fn upload_product(
    Extension(service): Extension<ProductService>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!("⚠️ Upload without a multipart body: {}", rejection.body_text());
        HttpError::BadRequest("No image uploaded".to_string())
    })?;

    let mut image: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| HttpError::BadRequest(format!("Invalid multipart body: {}", e.body_text())))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        if field.file_name().is_some_and(str::is_empty) {
            return Err(HttpError::BadRequest("No selected file".to_string()));
        }

        let bytes = field.bytes().await.map_err(|e| {
            HttpError::BadRequest(format!("Invalid multipart body: {}", e.body_text()))
        })?;

        image = Some(bytes.to_vec());
        break;
    }

    let image = image.ok_or_else(|| HttpError::BadRequest("No image uploaded".to_string()))?;

    let product = service.command.upload_product(image).await?;

    Ok((
        StatusCode::OK,
        Json(UploadResponse {
            message: "Product details extracted successfully".to_string(),
            product,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/products",
    tag = "Product",
    responses(
        (status = 200, description = "All products, newest first", body = Vec<ProductResponse>),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_products(
    Extension(service): Extension<ProductService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product details", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn get_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.query.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = MessageResponse),
        (status = 400, description = "Invalid body", body = ErrorResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn update_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i64>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.update_product(id, &body).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product updated successfully!")),
    ))
}

#[utoipa::path(
    delete,
    path = "/product/{id}",
    tag = "Product",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse)
    )
)]
pub async fn delete_product(
    Extension(service): Extension<ProductService>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, HttpError> {
    service.command.delete_product(id).await?;
    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Product deleted successfully!")),
    ))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/upload", post(upload_product))
        .route("/products", get(get_products))
        .route(
            "/product/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(Extension(app_state.di_container.product_service.clone()))
}
