//! Sample webhook notifications served by the mock source.

use serde_json::{json, Value};

/// The fixed, ordered list of sample notifications.
pub fn sample_events() -> Vec<Value> {
    vec![
        json!({
            "specversion": "1.0",
            "type": "grant.created",
            "source": "/nylas/system",
            "id": "mock-id",
            "time": 1234567890,
            "data": {
                "application_id": "NYLAS_APPLICATION_ID",
                "object": {
                    "code": 25012,
                    "grant_id": "NYLAS_GRANT_ID",
                    "integration_id": "NYLAS_INTEGRATION_ID",
                    "login_id": "mock-login-id",
                    "provider": "google"
                }
            }
        }),
        json!({
            "specversion": "1.0",
            "type": "grant.updated",
            "source": "/nylas/system",
            "id": "mock-id",
            "time": 123456789,
            "data": {
                "application_id": "NYLAS_APPLICATION_ID",
                "object": {
                    "code": 25014,
                    "grant_id": "NYLAS_GRANT_ID",
                    "integration_id": "NYLAS_INTEGRATION_ID",
                    "provider": "microsoft",
                    "reauthentication_flag": false
                }
            }
        }),
        json!({
            "specversion": "1.0",
            "type": "grant.deleted",
            "source": "/nylas/system",
            "id": "mock-id",
            "time": 1234567890,
            "data": {
                "application_id": "NYLAS_APPLICATION_ID",
                "object": {
                    "code": 25013,
                    "grant_id": "NYLAS_GRANT_ID",
                    "integration_id": "NYLAS_INTEGRATION_ID",
                    "provider": "google"
                }
            }
        }),
        json!({
            "specversion": "1.0",
            "type": "message.created",
            "source": "/google/emails/realtime",
            "id": "<WEBHOOK_ID>",
            "time": 1723821985,
            "webhook_delivery_attempt": 1,
            "data": {
                "application_id": "<NYLAS_APPLICATION_ID>",
                "object": {
                    "attachments": {
                        "content_disposition": "attachment; filename=\"image.jpg\"",
                        "content_id": "<CID>",
                        "content_type": "image/jpeg; name=\"image.jpg\"",
                        "filename": "image.jpg",
                        "grant_id": "<NYLAS_GRANT_ID>",
                        "id": "<ATTACHMENT_ID>",
                        "is_inline": false,
                        "size": 4860136
                    },
                    "bcc": { "email": "leyah@example.com" },
                    "body": "<div dir=\"ltr\">Test with attachments</div>\r\n",
                    "cc": { "email": "kaveh@example.com" },
                    "date": 1723821981,
                    "folders": ["SENT"],
                    "from": { "email": "swag@example.com", "name": "Nylas Swag" },
                    "grant_id": "<NYLAS_GRANT_ID>",
                    "id": "<MESSAGE_ID>",
                    "metadata": { "key1": "all-meetings", "key2": "on-site" },
                    "object": "message",
                    "reply_to": {},
                    "snippet": "This message has an attachment. yippee!",
                    "starred": false,
                    "subject": "Let's send an attachment",
                    "thread_id": "<THREAD_ID>",
                    "to": { "email": "nyla@example.com" },
                    "unread": false
                }
            }
        }),
    ]
}

/// Compact single-line JSON for each sample, as sent on the wire.
///
/// `<`, `>` and `&` are written literally, not as `\u003c`-style escapes.
pub fn sample_payloads() -> Vec<String> {
    sample_events().iter().map(Value::to_string).collect()
}
