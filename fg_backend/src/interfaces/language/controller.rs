use axum::Json;
use fg_core::types::language::{Language, SUPPORTED_LANGUAGES};

pub async fn list_languages_handler() -> Json<&'static [Language]> {
    Json(SUPPORTED_LANGUAGES.as_slice())
}

#[cfg(test)]
mod tests {
    use crate::server::http_server::tests::{call, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_catalog_listing() {
        let (_, router) = test_app(Vec::new());
        let (status, body) = call(&router, "GET", "/api/v1/languages", None).await;
        assert_eq!(status, StatusCode::OK);
        let languages = body.as_array().unwrap();
        assert_eq!(languages.len(), 10);
        assert_eq!(languages[0]["code"], "en");
        assert_eq!(languages[1]["nativeName"], "हिन्दी");
    }
}
