//! API utilities for frontend-backend communication
//!
//! URL construction plus authenticated JSON helpers on top of `gloo-net`.
//! Every helper returns `Result<T, String>` with a message ready to show.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// The backend listens on port 3000 of the host that served the page.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append a serialized query struct, skipping it when empty
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Invalid query: {}", e))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, String> {
    let token = storage::get_access_token().ok_or("Not authenticated")?;
    Ok(builder.header("Authorization", &format!("Bearer {}", token)))
}

/// Human readable message for a failed response
///
/// The backend answers errors with `{"error": "..."}`; anything else falls
/// back to the status code.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| match status {
            401 => "Session expired, please sign in again".to_string(),
            403 => "Not allowed".to_string(),
            404 => "Not found".to_string(),
            _ => format!("HTTP {}", status),
        })
}

async fn check(response: Response) -> Result<Response, String> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(error_message(status, &body))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = authorized(Request::get(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST without caring about the response body
pub async fn post_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorized(Request::post(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

/// PUT without caring about the response body
pub async fn put_empty<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = authorized(Request::put(&api_url(path)))?
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = authorized(Request::delete(&api_url(path)))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    check(response).await.map(|_| ())
}

/// Id returned by the upsert endpoints: `{"id": "..."}`
pub fn id_from_upsert(value: &serde_json::Value) -> Option<String> {
    value
        .get("id")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Default)]
    struct Filter {
        #[serde(skip_serializing_if = "Option::is_none")]
        property_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        search: Option<String>,
    }

    #[test]
    fn test_error_message_uses_backend_text() {
        assert_eq!(
            error_message(409, r#"{"error":"Room 101 is already booked"}"#),
            "Room 101 is already booked"
        );
        assert_eq!(error_message(500, "boom"), "HTTP 500");
        assert_eq!(error_message(404, ""), "Not found");
        assert_eq!(error_message(400, r#"{"error":""}"#), "HTTP 400");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/api/rooms", &Filter::default()).unwrap(), "/api/rooms");
        let filter = Filter {
            property_id: Some("p1".into()),
            search: Some("ada lovelace".into()),
        };
        let url = with_query("/api/reservations", &filter).unwrap();
        assert!(url.starts_with("/api/reservations?property_id=p1&search=ada"));
    }

    #[test]
    fn test_id_from_upsert() {
        let v = serde_json::json!({"id": "abc"});
        assert_eq!(id_from_upsert(&v).as_deref(), Some("abc"));
        assert_eq!(id_from_upsert(&serde_json::json!({})), None);
    }
}
