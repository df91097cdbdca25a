use crate::api::{AppError, AppState};
use crate::controller::{Controller, RequestContext, ResourceFamily};
use crate::dto::{Envelope, NoData};
use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::routing::get;
use std::collections::HashMap;

pub const SIMULATE_ERROR_HEADER: &str = "x-simulate-error";

type Params = Path<HashMap<String, String>>;

/// Routes for one resource family, meant to be nested under its prefix.
pub fn resource_router<R: ResourceFamily>() -> Router<AppState> {
    let mut router = Router::new()
        .route("/{tenant_id}", get(list::<R>).post(create::<R>))
        .route(
            "/{tenant_id}/{id}",
            get(get_details::<R>)
                .put(update_details::<R>)
                .patch(update_details::<R>)
                .delete(delete_details::<R>),
        );
    if let Some(alias) = R::ALIAS {
        router = router
            .route(
                &format!("/{{tenant_id}}/{}", alias),
                get(list::<R>).post(create::<R>),
            )
            .route(
                &format!("/{{tenant_id}}/{}/{{id}}", alias),
                get(get_details::<R>)
                    .put(update_details::<R>)
                    .patch(update_details::<R>)
                    .delete(delete_details::<R>),
            );
    }
    router
}

fn simulate_error_requested(headers: &HeaderMap) -> bool {
    headers
        .get(SIMULATE_ERROR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

fn request_context(params: HashMap<String, String>, headers: &HeaderMap) -> RequestContext {
    RequestContext::new(params).with_simulated_error(simulate_error_requested(headers))
}

async fn list<R: ResourceFamily>(
    State(app_state): State<AppState>,
    Path(params): Params,
    headers: HeaderMap,
) -> Result<Json<Envelope<Vec<R::Summary>>>, AppError> {
    let ctx = request_context(params, &headers);
    Ok(Json(Controller::<R>::new(app_state).list(&ctx).await?))
}

async fn create<R: ResourceFamily>(
    State(app_state): State<AppState>,
    Path(params): Params,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<NoData>>, AppError> {
    let ctx = request_context(params, &headers)
        .with_body(String::from_utf8_lossy(&body).into_owned());
    Ok(Json(Controller::<R>::new(app_state).create(&ctx).await?))
}

async fn get_details<R: ResourceFamily>(
    State(app_state): State<AppState>,
    Path(params): Params,
    headers: HeaderMap,
) -> Result<Json<Envelope<R::Details>>, AppError> {
    let ctx = request_context(params, &headers);
    Ok(Json(Controller::<R>::new(app_state).get_details(&ctx).await?))
}

async fn update_details<R: ResourceFamily>(
    State(app_state): State<AppState>,
    Path(params): Params,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Envelope<R::Details>>, AppError> {
    let ctx = request_context(params, &headers)
        .with_body(String::from_utf8_lossy(&body).into_owned());
    Ok(Json(Controller::<R>::new(app_state).update_details(&ctx).await?))
}

async fn delete_details<R: ResourceFamily>(
    State(app_state): State<AppState>,
    Path(params): Params,
    headers: HeaderMap,
) -> Result<Json<Envelope<NoData>>, AppError> {
    let ctx = request_context(params, &headers);
    Ok(Json(Controller::<R>::new(app_state).delete_details(&ctx).await?))
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn it_should_read_simulate_error_header() {
        let mut headers = HeaderMap::new();
        assert!(!simulate_error_requested(&headers));

        headers.insert(SIMULATE_ERROR_HEADER, HeaderValue::from_static("TRUE"));
        assert!(simulate_error_requested(&headers));

        headers.insert(SIMULATE_ERROR_HEADER, HeaderValue::from_static("1"));
        assert!(simulate_error_requested(&headers));

        headers.insert(SIMULATE_ERROR_HEADER, HeaderValue::from_static("no"));
        assert!(!simulate_error_requested(&headers));
    }
}
