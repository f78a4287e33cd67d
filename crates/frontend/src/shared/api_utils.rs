//! API utilities for frontend-backend communication
//!
//! Every request goes through the helpers below so that error mapping is the
//! same on every screen: a backend rejection keeps its `detail` message, a
//! transport failure is reported separately and never retried.

use crate::shared::config::AppConfig;
use contracts::shared::error_body::ErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-2xx response; `detail` is the backend message if it sent one
    #[error("HTTP {status}: {}", detail.as_deref().unwrap_or("sin detalle"))]
    Rejected { status: u16, detail: Option<String> },
    /// The request never got a response (network down, CORS, DNS)
    #[error("sin respuesta del servidor: {0}")]
    NoResponse(String),
    /// A 2xx response whose body could not be decoded
    #[error("respuesta inválida: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing message: the backend `detail` verbatim, else `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_no_response(&self) -> bool {
        matches!(self, ApiError::NoResponse(_))
    }
}

/// Build a full API URL from a resource path such as "/brands/3"
pub fn api_url(path: &str) -> String {
    format!("{}{}", AppConfig::current().api_base, path)
}

/// Path of a single record, with the id percent-encoded
pub fn record_path(resource: &str, id: &contracts::domain::common::EntityId) -> String {
    format!("{}/{}", resource, urlencoding::encode(id.as_str()))
}

/// Append a serialized query (`serde_qs`) to a path
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

async fn rejected(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    ApiError::Rejected {
        status,
        detail: ErrorBody::parse(&body).detail,
    }
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::NoResponse(e.to_string()))?;
    if !response.ok() {
        return Err(rejected(response).await);
    }
    Ok(response)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let request = Request::get(&url)
        .header("Accept", "application/json")
        .header("Cache-Control", "no-cache")
        .build()
        .map_err(|e| ApiError::NoResponse(e.to_string()))?;
    decode(send(request).await?).await
}

/// POST `body` as JSON and decode the created record
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let request = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    decode(send(request).await?).await
}

/// PUT `body` as JSON and decode the updated record
pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    let request = Request::put(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Failed to serialize request: {}", e)))?;
    decode(send(request).await?).await
}

/// DELETE `path`; the response body carries nothing of interest
pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let request = Request::delete(&url)
        .build()
        .map_err(|e| ApiError::NoResponse(e.to_string()))?;
    send(request).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityId;
    use contracts::shared::list_query::ListQuery;

    #[test]
    fn detail_is_used_verbatim() {
        let err = ApiError::Rejected {
            status: 409,
            detail: Some("La marca tiene productos asociados".into()),
        };
        assert_eq!(
            err.message_or("Error al eliminar la marca"),
            "La marca tiene productos asociados"
        );
    }

    #[test]
    fn fallback_without_detail_or_response() {
        let no_detail = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(no_detail.message_or("Error al cargar las marcas"), "Error al cargar las marcas");

        let offline = ApiError::NoResponse("Failed to fetch".into());
        assert!(offline.is_no_response());
        assert_eq!(offline.message_or("Error al cargar las marcas"), "Error al cargar las marcas");
    }

    #[test]
    fn record_path_encodes_id() {
        assert_eq!(record_path("/brands", &EntityId::from(1)), "/brands/1");
        assert_eq!(record_path("/categories", &EntityId::from("a b")), "/categories/a%20b");
    }

    #[test]
    fn query_string_skips_unset_filters() {
        let mut q = ListQuery::default().search("nike");
        q.brand_id = Some(EntityId::from(4));
        assert_eq!(
            with_query("/products-catalog", &q).unwrap(),
            "/products-catalog?skip=0&limit=100&search=nike&brand_id=4"
        );
    }
}
