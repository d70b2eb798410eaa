use crate::error::{ErrorCli, Result};
use fg_core::server::payload::chat_response::ChatErrorResponse;
use fg_core::server::payload::profile_request::{UpdateLanguageRequest, UpdateProfileRequest};
use fg_core::server::payload::send_message_request::SendMessageRequest;
use fg_core::server::routes::{
    API_PREFIX, BackendApiHealth, BackendApiLanguage, BackendApiProfile, BackendConversationApi,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        CliClient {
            client: Client::new(),
            base_url_api: format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url_api, path)
    }

    fn connection_error(&self, err: reqwest::Error) -> ErrorCli {
        if err.is_connect() {
            ErrorCli::ConnectionRefused(self.base_url_api.clone())
        } else {
            ErrorCli::Http(err)
        }
    }

    /// Body of a 2xx answer; otherwise the server's `error` field as `ErrorCli::Api`.
    async fn handle_response(&self, res: std::result::Result<Response, reqwest::Error>) -> Result<String> {
        let res = res.map_err(|e| self.connection_error(e))?;
        let status = res.status();
        let text = res.text().await?;
        if status.is_success() {
            return Ok(text);
        }
        let message = serde_json::from_str::<ChatErrorResponse>(&text)
            .map(|body| match body.details {
                Some(details) => format!("{} ({details})", body.error),
                None => body.error,
            })
            .unwrap_or(text);
        Err(ErrorCli::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn send(&self, request: RequestBuilder) -> Result<String> {
        self.handle_response(request.send().await).await
    }

    async fn send_json<T: Serialize>(&self, request: RequestBuilder, body: &T) -> Result<String> {
        self.send(request.json(body)).await
    }

    pub async fn list_conversations(&self) -> Result<String> {
        let url = self.url(BackendConversationApi::List.path(None).as_str());
        self.send(self.client.get(&url)).await
    }

    pub async fn create_conversation(&self) -> Result<String> {
        let url = self.url(BackendConversationApi::List.path(None).as_str());
        self.send(self.client.post(&url)).await
    }

    pub async fn select_conversation(&self, conversation_id: &str) -> Result<String> {
        let url = self.url(BackendConversationApi::Select.path(Some(conversation_id)).as_str());
        self.send(self.client.post(&url)).await
    }

    pub async fn delete_conversation(&self, conversation_id: &str) -> Result<String> {
        let url = self.url(BackendConversationApi::Delete.path(Some(conversation_id)).as_str());
        self.send(self.client.delete(&url)).await
    }

    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<String> {
        let url = self.url(BackendConversationApi::SendMessage.path(None).as_str());
        self.send_json(self.client.post(&url), request).await
    }

    pub async fn get_profile(&self) -> Result<String> {
        let url = self.url(BackendApiProfile::Profile.path().as_str());
        self.send(self.client.get(&url)).await
    }

    pub async fn update_name(&self, request: &UpdateProfileRequest) -> Result<String> {
        let url = self.url(BackendApiProfile::Profile.path().as_str());
        self.send_json(self.client.put(&url), request).await
    }

    pub async fn update_language(&self, request: &UpdateLanguageRequest) -> Result<String> {
        let url = self.url(BackendApiProfile::Language.path().as_str());
        self.send_json(self.client.put(&url), request).await
    }

    pub async fn profile_stats(&self) -> Result<String> {
        let url = self.url(BackendApiProfile::Stats.path().as_str());
        self.send(self.client.get(&url)).await
    }

    pub async fn export(&self) -> Result<String> {
        let url = self.url(BackendApiProfile::Export.path().as_str());
        self.send(self.client.get(&url)).await
    }

    pub async fn clear_data(&self) -> Result<String> {
        let url = self.url(BackendApiProfile::Data.path().as_str());
        self.send(self.client.delete(&url)).await
    }

    pub async fn list_languages(&self) -> Result<String> {
        let url = self.url(BackendApiLanguage::List.path().as_str());
        self.send(self.client.get(&url)).await
    }

    pub async fn health(&self) -> Result<String> {
        let url = self.url(BackendApiHealth::Health.path().as_str());
        self.send(self.client.get(&url)).await
    }

    /// Status and body, since a failed check still carries a useful payload.
    pub async fn test_gemini(&self) -> Result<(u16, String)> {
        let url = self.url(BackendApiHealth::TestGemini.path().as_str());
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;
        let status = res.status().as_u16();
        Ok((status, res.text().await?))
    }
}
