use crate::error::ProviderError;
use crate::llm::models::openai::{
    build_chat_completions_request_body, chat_completions_url, extract_completion_text,
    OpenAiClient,
};
use crate::llm::models::provider_base::{Message, ProviderClient};
use mockito::Matcher;
use serde_json::json;

#[cfg(test)]
mod tests {
    use super::*;

    const OK_BODY: &str =
        r#"{"id":"c1","choices":[{"index":0,"message":{"role":"assistant","content":"Hello!"}}]}"#;

    #[test]
    fn request_body_has_single_user_message_and_no_store() {
        let body = build_chat_completions_request_body("gpt-4", vec![Message::user("hi")]);
        assert_eq!(
            body,
            json!({
                "model": "gpt-4",
                "store": false,
                "messages": [{"role": "user", "content": "hi"}],
            })
        );
    }

    #[test]
    fn chat_completions_url_trims_trailing_slash() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://localhost:8080"),
            "http://localhost:8080/chat/completions"
        );
    }

    #[test]
    fn extract_completion_text_reads_first_choice() {
        assert_eq!(extract_completion_text(OK_BODY).unwrap(), "Hello!");
    }

    #[test]
    fn extract_completion_text_rejects_empty_choices() {
        let err = extract_completion_text(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn extract_completion_text_rejects_null_content() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let err = extract_completion_text(body).unwrap_err();
        assert!(matches!(err, ProviderError::MalformedResponse(_)));
    }

    #[test]
    fn extract_completion_text_rejects_non_json() {
        let err = extract_completion_text("<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), "malformed_response");
    }

    #[test]
    fn complete_posts_prompt_with_bearer_auth() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::Json(json!({
                "model": "gpt-4",
                "store": false,
                "messages": [{"role": "user", "content": "hello"}],
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(OK_BODY)
            .create();

        let client = OpenAiClient::new(format!("{}/v1", server.url()), "sk-test".to_string());
        let text = client.complete("gpt-4", "hello").unwrap();

        assert_eq!(text, "Hello!");
        mock.assert();
    }

    #[test]
    fn complete_maps_error_status_to_api_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .create();

        let client = OpenAiClient::new(server.url(), "bad".to_string());
        let err = client.complete("gpt-4", "hello").unwrap_err();

        match err {
            ProviderError::Api { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Incorrect API key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        mock.assert();
    }
}
