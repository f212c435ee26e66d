//! Single-use acknowledgement handle.
//!
//! The platform reads success or failure from the JSON body, so every
//! acknowledgement is sent with HTTP 200. The only other status this module
//! produces is 500, when an application value cannot be serialized.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{error, warn};

use super::types::AckResponse;

pub const ACK_SUCCESS_STATUS: &str = "OK";
pub const ACK_FAILURE_STATUS: &str = "FAIL";

pub const ACK_SUCCESS_CODE: i32 = 0;
pub const ACK_FAILURE_CODE: i32 = 1;

/// Failure to deliver an acknowledgement.
#[derive(Debug, Error)]
pub enum AckError {
    #[error("failed to serialize ack body: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The request this ack belongs to has gone away
    #[error("callback request closed before ack was sent")]
    Closed,
}

impl AckResponse {
    pub fn success(code: i32, message: Option<&str>) -> Self {
        Self {
            action_status: ACK_SUCCESS_STATUS.to_string(),
            error_code: code,
            error_info: message.unwrap_or_default().to_string(),
        }
    }

    pub fn failure(message: Option<&str>) -> Self {
        Self {
            action_status: ACK_FAILURE_STATUS.to_string(),
            error_code: ACK_FAILURE_CODE,
            error_info: message.unwrap_or_default().to_string(),
        }
    }
}

/// Responds to exactly one callback request.
///
/// Every responding method takes `self`, so an `Ack` cannot answer twice.
/// It is only valid until the handler future completes; after that every
/// method returns [`AckError::Closed`].
pub struct Ack {
    tx: oneshot::Sender<Response>,
}

impl Ack {
    /// Create an ack and the receiver its response is delivered to.
    pub fn channel() -> (Self, oneshot::Receiver<Response>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Respond with an arbitrary JSON value.
    pub fn ack<T: Serialize + ?Sized>(self, value: &T) -> Result<(), AckError> {
        match serde_json::to_vec(value) {
            Ok(body) => self.send(json_response(body)),
            Err(e) => {
                error!(error = %e, "callback_ack_serialize_failed");
                // Report the serialize error even if the request is gone.
                let _ = self.send(StatusCode::INTERNAL_SERVER_ERROR.into_response());
                Err(AckError::Serialize(e))
            }
        }
    }

    /// Respond with `{"ActionStatus":"OK","ErrorCode":code,"ErrorInfo":message}`.
    pub fn ack_success(self, code: i32, message: Option<&str>) -> Result<(), AckError> {
        self.ack(&AckResponse::success(code, message))
    }

    /// Respond with `{"ActionStatus":"FAIL","ErrorCode":1,"ErrorInfo":message}`.
    pub fn ack_failure(self, message: Option<&str>) -> Result<(), AckError> {
        self.ack(&AckResponse::failure(message))
    }

    fn send(self, response: Response) -> Result<(), AckError> {
        self.tx.send(response).map_err(|_| {
            warn!("callback_ack_receiver_closed");
            AckError::Closed
        })
    }
}

fn json_response(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::ser::Error as _;
    use serde_json::Value;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_ack_success_envelope() {
        let (ack, rx) = Ack::channel();
        ack.ack_success(0, None).unwrap();

        let response = rx.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"ActionStatus": "OK", "ErrorCode": 0, "ErrorInfo": ""})
        );
    }

    #[tokio::test]
    async fn test_ack_success_with_code_and_message() {
        let (ack, rx) = Ack::channel();
        ack.ack_success(120001, Some("blocked by policy")).unwrap();

        assert_eq!(
            body_json(rx.await.unwrap()).await,
            serde_json::json!({
                "ActionStatus": "OK",
                "ErrorCode": 120001,
                "ErrorInfo": "blocked by policy"
            })
        );
    }

    #[tokio::test]
    async fn test_ack_failure_envelope_is_http_200() {
        let (ack, rx) = Ack::channel();
        ack.ack_failure(Some("invalid sdk appId")).unwrap();

        let response = rx.await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "ActionStatus": "FAIL",
                "ErrorCode": 1,
                "ErrorInfo": "invalid sdk appId"
            })
        );
    }

    #[tokio::test]
    async fn test_ack_custom_value() {
        let mut body = HashMap::new();
        body.insert("ActionStatus", "OK");
        body.insert("MsgBody", "rewritten");

        let (ack, rx) = Ack::channel();
        ack.ack(&body).unwrap();

        assert_eq!(
            body_json(rx.await.unwrap()).await,
            serde_json::json!({"ActionStatus": "OK", "MsgBody": "rewritten"})
        );
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("nope"))
        }
    }

    #[tokio::test]
    async fn test_ack_serialize_failure_is_500() {
        let (ack, rx) = Ack::channel();
        let err = ack.ack(&Unserializable).unwrap_err();

        assert!(matches!(err, AckError::Serialize(_)));
        assert_eq!(rx.await.unwrap().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_ack_after_request_closed() {
        let (ack, rx) = Ack::channel();
        drop(rx);

        assert!(matches!(ack.ack_success(0, None), Err(AckError::Closed)));
    }
}
