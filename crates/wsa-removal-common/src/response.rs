//! Status payload returned to the Lambda platform

use serde::Serialize;

/// `{ "statusCode": 200, "body": "\"message\"" }`
///
/// `body` holds the message JSON-encoded as a string, the shape API Gateway
/// style consumers expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// Build a 200 response carrying `message`
    pub fn ok(message: &str) -> Self {
        Self {
            status_code: 200,
            body: encode_message(message),
        }
    }
}

fn encode_message(message: &str) -> String {
    // Serializing a &str cannot fail; keep the quoted form regardless.
    serde_json::to_string(message).unwrap_or_else(|_| format!("\"{message}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::COMPLETED_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_ok_response_shape() {
        let response = HandlerResponse::ok(COMPLETED_MESSAGE);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "statusCode": 200,
                "body": "\"Completed WorkSpaces Application Modifications!\""
            })
        );
    }

    #[test]
    fn test_body_escapes_quotes() {
        let response = HandlerResponse::ok("say \"hi\"");
        assert_eq!(response.body, r#""say \"hi\"""#);
    }
}
