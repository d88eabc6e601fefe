//! Generic REST client for catalog entities.
//!
//! Every entity lives under `/api/{collection}`; `DELETE` performs the
//! backend's baja lógica. Failed GETs go through [`crate::shared::error_memo`].

use super::api_utils::api_url;
use super::error_memo::{after_request, before_request};
use contracts::domain::common::CatalogEntity;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

/// `"HTTP {status}: {message}"`, pulling `error` / `message` out of a JSON body
pub fn http_error(status: u16, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return format!("HTTP {}", status);
    }
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            ["error", "message", "mensaje"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string());
    format!("HTTP {}: {}", status, message)
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(http_error(status, &body));
    }
    response
        .json::<R>()
        .await
        .map_err(|e| format!("Respuesta inválida del servidor: {}", e))
}

/// GET with failure memoization; `force` skips and clears the memo
pub async fn get_json<R: DeserializeOwned>(url: &str, force: bool) -> Result<R, String> {
    if let Some(message) = before_request(url, force) {
        log::warn!("GET {} skipped, recent failure: {}", url, message);
        return Err(message);
    }

    let result = match Request::get(url).send().await {
        Ok(response) => read_json::<R>(response).await,
        Err(e) => Err(format!("Error de conexión: {}", e)),
    };

    if let Err(message) = &result {
        log::error!("GET {} failed: {}", url, message);
    }
    after_request(url, result.as_ref().map(|_| ()).map_err(String::as_str));
    result
}

pub async fn post_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> Result<R, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de conexión: {}", e))?;
    read_json(response).await.inspect_err(|e| log::error!("POST {} failed: {}", url, e))
}

pub async fn put_json<B: Serialize, R: DeserializeOwned>(url: &str, body: &B) -> Result<R, String> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| format!("No se pudo serializar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de conexión: {}", e))?;
    read_json(response).await.inspect_err(|e| log::error!("PUT {} failed: {}", url, e))
}

/// POST without body whose response is the updated entity
pub async fn post_action<R: DeserializeOwned>(url: &str) -> Result<R, String> {
    let response = Request::post(url)
        .send()
        .await
        .map_err(|e| format!("Error de conexión: {}", e))?;
    read_json(response).await.inspect_err(|e| log::error!("POST {} failed: {}", url, e))
}

pub async fn delete(url: &str) -> Result<(), String> {
    let response = Request::delete(url)
        .send()
        .await
        .map_err(|e| format!("Error de conexión: {}", e))?;
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = http_error(status, &body);
        log::error!("DELETE {} failed: {}", url, message);
        return Err(message);
    }
    Ok(())
}

/// CRUD endpoints of one entity collection
pub struct CrudApi<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for CrudApi<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CrudApi<T> {}

impl<T> Default for CrudApi<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CrudApi<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T: CatalogEntity> CrudApi<T> {
    pub fn collection_path() -> String {
        format!("/api/{}", T::collection_name())
    }

    pub fn item_path(id: i64) -> String {
        format!("/api/{}/{}", T::collection_name(), id)
    }

    pub async fn list(&self, force: bool) -> Result<Vec<T>, String> {
        get_json(&api_url(&Self::collection_path()), force).await
    }

    pub async fn get(&self, id: i64) -> Result<T, String> {
        get_json(&api_url(&Self::item_path(id)), false).await
    }

    pub async fn create(&self, item: &T) -> Result<T, String> {
        post_json(&api_url(&Self::collection_path()), item).await
    }

    pub async fn update(&self, item: &T) -> Result<T, String> {
        let id = item
            .id()
            .ok_or_else(|| format!("{} sin identificador", T::element_name()))?;
        put_json(&api_url(&Self::item_path(id)), item).await
    }

    /// Baja lógica
    pub async fn deactivate(&self, id: i64) -> Result<(), String> {
        delete(&api_url(&Self::item_path(id))).await
    }

    /// Create when the item has no id yet, update otherwise
    pub async fn save(&self, item: &T) -> Result<T, String> {
        match item.id() {
            Some(_) => self.update(item).await,
            None => self.create(item).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_zona::Zona;
    use contracts::domain::a006_carga_combustible::CargaCombustible;

    #[test]
    fn test_paths() {
        assert_eq!(CrudApi::<Zona>::collection_path(), "/api/zonas");
        assert_eq!(CrudApi::<Zona>::item_path(7), "/api/zonas/7");
        assert_eq!(
            CrudApi::<CargaCombustible>::item_path(2),
            "/api/cargas-combustible/2"
        );
    }

    #[test]
    fn test_http_error() {
        assert_eq!(http_error(500, ""), "HTTP 500");
        assert_eq!(http_error(404, "not found"), "HTTP 404: not found");
        assert_eq!(
            http_error(409, r#"{"error":"Tarifa duplicada"}"#),
            "HTTP 409: Tarifa duplicada"
        );
        assert_eq!(
            http_error(400, r#"{"message":"CUIT inválido"}"#),
            "HTTP 400: CUIT inválido"
        );
        assert_eq!(http_error(400, r#"{"otro":1}"#), r#"HTTP 400: {"otro":1}"#);
    }
}
