use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`
use uuid::Uuid;

use super::setup::TestSetup;

#[allow(dead_code)]
impl TestSetup {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, value)
    }

    /// Opens a game between two teams on the given date and returns its id
    pub async fn create_game(&self, game_date: &str) -> Uuid {
        let (status, body) = self
            .send(
                Method::POST,
                "/games",
                Some(json!({
                    "game_date": game_date,
                    "home": { "team": { "id": "LAL", "name": "Lakers" } },
                    "away": { "team": { "id": "BOS", "name": "Celtics" } }
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create game failed: {body}");

        body["id"].as_str().unwrap().parse().unwrap()
    }

    pub async fn get_game(&self, game_id: Uuid) -> Value {
        let (status, body) = self.send(Method::GET, &format!("/games/{game_id}"), None).await;
        assert_eq!(status, StatusCode::OK, "get game failed: {body}");
        body
    }

    pub async fn set_stat(
        &self,
        game_id: Uuid,
        side: &str,
        player_id: &str,
        field: &str,
        value: Value,
    ) -> (StatusCode, Value) {
        self.send(
            Method::PATCH,
            &format!("/games/{game_id}/{side}/players/{player_id}"),
            Some(json!({ "field": field, "value": value })),
        )
        .await
    }

    pub async fn set_quarter(
        &self,
        game_id: Uuid,
        side: &str,
        quarter: u8,
        points: Value,
    ) -> (StatusCode, Value) {
        self.send(
            Method::PUT,
            &format!("/games/{game_id}/{side}/quarters/{quarter}"),
            Some(json!({ "points": points })),
        )
        .await
    }

    pub async fn comparison(&self, game_id: Uuid) -> Value {
        let (status, body) = self
            .send(Method::GET, &format!("/games/{game_id}/comparison"), None)
            .await;
        assert_eq!(status, StatusCode::OK, "comparison failed: {body}");
        body
    }
}
