use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::any,
    Json,
};
use tracing::{debug, error, info, warn};

use crate::config::ServiceConfig;
use crate::models::{Airport, AirportV2, UpdateImageResponse};
use crate::storage::{object_key, IMAGE_CONTENT_TYPE};
use crate::AppState;

use error::ApiError;

mod error;

pub fn routes(config: &ServiceConfig) -> axum::Router<AppState> {
    let mut router = axum::Router::new()
        .route("/airports", any(list_airports))
        .route(
            "/update_airport_image",
            any(update_airport_image).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        );

    if config.enable_v2 {
        router = router.route("/airports_v2", any(list_airports_v2));
    }

    router
}

/// /airports (any method)
async fn list_airports(State(state): State<AppState>) -> Json<Vec<Airport>> {
    Json(state.store.list().await)
}

/// /airports_v2 (any method)
/// Same records with runway length
async fn list_airports_v2(State(state): State<AppState>) -> Json<Vec<AirportV2>> {
    Json(state.store.list_v2().await)
}

/// Fields of the update form
struct ImageForm {
    name: String,
    image: Bytes,
}

/// POST /update_airport_image
/// Other methods carry no multipart body and fail form parsing.
/// Upload an image for an airport and point its record at the new object
async fn update_airport_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UpdateImageResponse>, ApiError> {
    let multipart = multipart.map_err(|e| {
        debug!("Rejected update request: {}", e);
        ApiError::UnparseableForm
    })?;

    let form = read_image_form(multipart).await?;
    let key = object_key(&form.name);
    let size = form.image.len();

    if let Err(e) = state
        .object_store
        .put_object(&key, form.image, IMAGE_CONTENT_TYPE)
        .await
    {
        error!("Failed to upload image for {}: {}", form.name, e);
        return Err(ApiError::UploadFailed);
    }
    info!("Uploaded {} ({} bytes)", key, size);

    let image_url = state.object_store.public_url(&key);
    if !state.store.set_image_url(&form.name, &image_url).await {
        warn!("No airport named {:?}; uploaded {} without updating a record", form.name, key);
    }

    Ok(Json(UpdateImageResponse::new(image_url)))
}

/// Collect `name` and `image` from the form, in whatever order they arrive.
/// Repeated fields keep their first value; unknown fields are skipped.
async fn read_image_form(mut multipart: Multipart) -> Result<ImageForm, ApiError> {
    let mut name: Option<String> = None;
    let mut image: Option<Bytes> = None;

    let unparseable = |e: axum::extract::multipart::MultipartError| {
        debug!("Malformed multipart body: {}", e);
        ApiError::UnparseableForm
    };

    while let Some(field) = multipart.next_field().await.map_err(unparseable)? {
        let field_name = field.name().map(str::to_owned);
        match field_name.as_deref() {
            Some("name") if name.is_none() => {
                name = Some(field.text().await.map_err(unparseable)?);
            }
            Some("image") if image.is_none() => {
                image = Some(field.bytes().await.map_err(unparseable)?);
            }
            _ => {
                // Drain so oversized bodies still trip the limit
                field.bytes().await.map_err(unparseable)?;
            }
        }
    }

    let image = image.ok_or(ApiError::MissingFile)?;
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or(ApiError::MissingName)?;

    Ok(ImageForm { name, image })
}
