use serde::Serialize;
use serde_json::Value;

use crate::dap::document::{read_int, read_str};

/// Value of the `type` field of a client request.
pub const REQUEST: &str = "request";
/// Value of the `type` field of an adapter response.
pub const RESPONSE: &str = "response";

/// DAP response envelope.
///
/// Note: DAP allows responses with no `body` field at all, so an absent
/// body isn't serialized.
#[derive(Debug, Serialize)]
pub struct DapResponse {
    pub seq: i64,
    #[serde(rename = "type")]
    pub r#type: &'static str,
    pub request_seq: i64,
    pub success: bool,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl DapResponse {
    /// Create a response for a request document. Request fields that can't be read
    /// are replaced with neutral values (`0` for sequence, empty command name).
    pub fn for_request(seq: i64, request: &Value, success: bool) -> Self {
        Self {
            seq,
            r#type: RESPONSE,
            request_seq: read_int(request, "seq", 0),
            success,
            command: read_str(request, "command", "").to_string(),
            message: None,
            body: None,
        }
    }

    pub fn with_message(mut self, message: impl ToString) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }

    /// Convert into a response document.
    pub fn into_document(self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_envelope() {
        let request = json!({"seq": 12, "type": "request", "command": "threads"});
        let document = DapResponse::for_request(3, &request, true)
            .with_body(Some(json!({"threads": []})))
            .into_document()
            .unwrap();
        assert_eq!(
            document,
            json!({
                "seq": 3,
                "type": "response",
                "request_seq": 12,
                "success": true,
                "command": "threads",
                "body": {"threads": []},
            })
        );

        let document = DapResponse::for_request(4, &json!({"type": "event"}), false)
            .with_message("invalid command")
            .into_document()
            .unwrap();
        assert_eq!(
            document,
            json!({
                "seq": 4,
                "type": "response",
                "request_seq": 0,
                "success": false,
                "command": "",
                "message": "invalid command",
            })
        );
    }
}
