use super::{ensure_client_id, ImageHost};
use crate::models::UploadResponse;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct MockImageHost {
    responses: Arc<Mutex<Vec<UploadResponse>>>,
    payloads: Arc<Mutex<Vec<(String, String)>>>,
    upload_count: Arc<Mutex<usize>>,
    should_fail: Arc<Mutex<bool>>,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            payloads: Arc::new(Mutex::new(Vec::new())),
            upload_count: Arc::new(Mutex::new(0)),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    pub fn with_response(self, response: UploadResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_json_response(self, status: u16, body: serde_json::Value) -> Self {
        let response = json_response(status, body.to_string());
        self.with_response(response)
    }

    pub fn with_failure(self, should_fail: bool) -> Self {
        *self.should_fail.lock().unwrap() = should_fail;
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    /// `(client_id, payload)` pairs in the order they were received.
    pub fn get_payloads(&self) -> Vec<(String, String)> {
        self.payloads.lock().unwrap().clone()
    }
}

impl Default for MockImageHost {
    fn default() -> Self {
        Self::new()
    }
}

fn json_response(status: u16, body: String) -> UploadResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    UploadResponse::new(status, headers, body.into_bytes())
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload_payload(&self, client_id: &str, payload: String) -> Result<UploadResponse> {
        ensure_client_id(client_id)?;

        if *self.should_fail.lock().unwrap() {
            return Err(crate::Error::Runtime("Mock failure".to_string()));
        }

        let mut count = self.upload_count.lock().unwrap();
        *count += 1;

        self.payloads
            .lock()
            .unwrap()
            .push((client_id.to_string(), payload));

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response
            Ok(json_response(
                200,
                serde_json::json!({
                    "data": { "id": "mock", "link": "https://i.imgur.com/mock.png" },
                    "success": true,
                    "status": 200
                })
                .to_string(),
            ))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
