use gloo::net::http::Request;
use shared::{users_from_value, User};

/// API client for the user management backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Fetch the full user collection.
    ///
    /// A response body that is not a JSON array is silently treated as an
    /// empty collection; only transport failures surface as errors.
    pub async fn fetch_users(&self) -> Result<Vec<User>, String> {
        match Request::get(&self.users_url()).send().await {
            Ok(response) => {
                let body = response
                    .json::<serde_json::Value>()
                    .await
                    .unwrap_or(serde_json::Value::Null);
                Ok(users_from_value(body))
            }
            Err(e) => Err(format!("Failed to fetch users: {}", e)),
        }
    }

    /// Create a new user record; returns the record as stored by the server.
    pub async fn create_user(&self, user: &User) -> Result<User, String> {
        match Request::post(&self.users_url())
            .json(user)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<User>().await {
                        Ok(created) => Ok(created),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Update the record keyed by `id`; returns the server's updated record.
    ///
    /// `id` is the record's current server-assigned id, which may differ
    /// from the id carried in the body when the user edited that field.
    pub async fn update_user(&self, id: &str, user: &User) -> Result<User, String> {
        match Request::put(&self.user_url(id))
            .json(user)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<User>().await {
                        Ok(updated) => Ok(updated),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete the record keyed by `id`. The response body is ignored.
    pub async fn delete_user(&self, id: &str) -> Result<(), String> {
        match Request::delete(&self.user_url(id)).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(error_text)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_base_url() {
        let client = ApiClient::new();
        assert_eq!(client.users_url(), "http://localhost:8080/users");
    }

    #[wasm_bindgen_test]
    fn test_record_url_uses_key() {
        let client = ApiClient::with_base_url("http://backend:9000".to_string());
        assert_eq!(client.user_url("42"), "http://backend:9000/users/42");
    }
}
