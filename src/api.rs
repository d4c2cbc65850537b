//! JSON client for the puzzle backend
//!
//! The wire contract is consumed here, not defined: field names follow what
//! the server actually sends (a mix of snake_case and camelCase). Calls are
//! best-effort browser fetches - no retry, no cancellation; failures surface
//! as an [`ApiError`] for the status line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Fetch rejected or never reached the server
    Network(String),
    /// Non-2xx HTTP status
    Status(u16),
    /// Body did not match the expected shape
    Decode(String),
    /// Server answered with `ok: false`
    Rejected,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Status(code) => write!(f, "server returned HTTP {code}"),
            ApiError::Decode(msg) => write!(f, "unexpected server reply: {msg}"),
            ApiError::Rejected => write!(f, "server rejected the request"),
        }
    }
}

impl std::error::Error for ApiError {}

/// `POST /api/create_run` body
#[derive(Debug, Clone, Serialize)]
pub struct CreateRunRequest {
    pub difficulty: String,
    pub n_puzzles: u32,
    pub min_move: u32,
    pub max_move: u32,
    pub source: String,
}

impl Default for CreateRunRequest {
    fn default() -> Self {
        use crate::consts::*;
        Self {
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            n_puzzles: DEFAULT_RUN_LENGTH,
            min_move: DEFAULT_MIN_MOVE,
            max_move: DEFAULT_MAX_MOVE,
            source: DEFAULT_SOURCE.to_string(),
        }
    }
}

/// `POST /api/create_run` reply
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRunResponse {
    pub ok: bool,
    #[serde(default)]
    pub run_id: String,
}

/// `GET /api/next/{run_id}?index=N` reply
#[derive(Debug, Clone, Deserialize)]
pub struct NextPuzzleResponse {
    pub ok: bool,
    #[serde(default)]
    pub initial_subfen: String,
    #[serde(default)]
    pub geochess_id: i64,
    pub index: u32,
    pub len: u32,
    #[serde(default)]
    pub white_to_move: Option<bool>,
}

/// `POST /api/check_position` body
#[derive(Debug, Clone, Serialize)]
pub struct CheckPositionRequest {
    pub id: i64,
    pub x: u8,
    pub y: u8,
}

/// Correct fragment origin in a check reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub x: u8,
    pub y: u8,
}

/// Per-run aggregates, present on the reply that completes a run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunStats {
    #[serde(default)]
    pub completed_count: u32,
    #[serde(default)]
    pub avg_time_seconds: Option<f64>,
    #[serde(default)]
    pub avg_correct_count: Option<f64>,
}

/// `POST /api/check_position` reply
///
/// Metadata fields vary by puzzle source; everything beyond the verdict is
/// optional.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckPositionResponse {
    pub ok: bool,
    pub correct: bool,
    pub answer: Answer,
    #[serde(default, rename = "fullFen")]
    pub full_fen: Option<String>,
    #[serde(default, rename = "gameId")]
    pub game_id: Option<String>,
    #[serde(default, rename = "halfMoveNum")]
    pub half_move_num: Option<u32>,
    #[serde(default)]
    pub pgn: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub result: Option<f64>,
    #[serde(default, rename = "whiteElo")]
    pub white_elo: Option<u32>,
    #[serde(default, rename = "blackElo")]
    pub black_elo: Option<u32>,
    #[serde(default, rename = "whitePlayer")]
    pub white_player: Option<String>,
    #[serde(default, rename = "blackPlayer")]
    pub black_player: Option<String>,
    #[serde(default)]
    pub opening_name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, rename = "runStats")]
    pub run_stats: Option<RunStats>,
}

impl CheckPositionResponse {
    /// Game result as the usual score string
    pub fn result_label(&self) -> Option<&'static str> {
        match self.result {
            Some(r) if r == 1.0 => Some("1-0"),
            Some(r) if r == 0.0 => Some("0-1"),
            Some(_) => Some("\u{00bd}-\u{00bd}"),
            None => None,
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod fetch {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Headers, Request, RequestInit, Response};

    use super::*;

    fn js_err(err: JsValue) -> ApiError {
        ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }

    async fn request_text(
        method: &str,
        url: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        if let Some(body) = body {
            let headers = Headers::new().map_err(js_err)?;
            headers
                .set("Content-Type", "application/json")
                .map_err(js_err)?;
            opts.set_headers(headers.as_ref());
            opts.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_err)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ApiError::Network("reply was not a Response".to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        text.as_string()
            .ok_or_else(|| ApiError::Decode("non-text body".to_string()))
    }

    fn decode<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Start a fresh run on the server
    pub async fn create_run(req: &CreateRunRequest) -> Result<CreateRunResponse, ApiError> {
        let body = serde_json::to_string(req).map_err(|err| ApiError::Decode(err.to_string()))?;
        let text = request_text("POST", "/api/create_run", Some(body)).await?;
        let resp: CreateRunResponse = decode(&text)?;
        if !resp.ok {
            return Err(ApiError::Rejected);
        }
        Ok(resp)
    }

    /// Fetch puzzle `index` of a run
    pub async fn next_puzzle(run_id: &str, index: u32) -> Result<NextPuzzleResponse, ApiError> {
        let url = format!("/api/next/{run_id}?index={index}");
        let text = request_text("GET", &url, None).await?;
        let resp: NextPuzzleResponse = decode(&text)?;
        if !resp.ok {
            return Err(ApiError::Rejected);
        }
        Ok(resp)
    }

    /// Submit a placement guess for verdict
    pub async fn check_position(
        req: &CheckPositionRequest,
    ) -> Result<CheckPositionResponse, ApiError> {
        let body = serde_json::to_string(req).map_err(|err| ApiError::Decode(err.to_string()))?;
        let text = request_text("POST", "/api/check_position", Some(body)).await?;
        let resp: CheckPositionResponse = decode(&text)?;
        if !resp.ok {
            return Err(ApiError::Rejected);
        }
        Ok(resp)
    }
}

#[cfg(target_arch = "wasm32")]
pub use fetch::{check_position, create_run, next_puzzle};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_response_field_names() {
        let json = r#"{
            "ok": true,
            "correct": false,
            "answer": {"x": 3, "y": 5},
            "fullFen": "8/8/8/8/8/8/8/8",
            "gameId": "abc123",
            "halfMoveNum": 24,
            "pgn": "1. e4 e5",
            "url": "https://lichess.org/abc123",
            "result": 0.5,
            "whiteElo": 2100,
            "blackElo": 1987,
            "opening_name": "Sicilian Defense"
        }"#;
        let resp: CheckPositionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert!(!resp.correct);
        assert_eq!(resp.answer, Answer { x: 3, y: 5 });
        assert_eq!(resp.full_fen.as_deref(), Some("8/8/8/8/8/8/8/8"));
        assert_eq!(resp.half_move_num, Some(24));
        assert_eq!(resp.white_elo, Some(2100));
        assert_eq!(resp.opening_name.as_deref(), Some("Sicilian Defense"));
        assert_eq!(resp.result_label(), Some("\u{00bd}-\u{00bd}"));
        assert!(resp.run_stats.is_none());
    }

    #[test]
    fn test_check_response_minimal() {
        let json = r#"{"ok": true, "correct": true, "answer": {"x": 0, "y": 0}}"#;
        let resp: CheckPositionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.correct);
        assert!(resp.full_fen.is_none());
        assert_eq!(resp.result_label(), None);
    }

    #[test]
    fn test_run_stats_field_names() {
        let json = r#"{
            "ok": true, "correct": true, "answer": {"x": 1, "y": 1},
            "runStats": {"completedCount": 12, "avgTimeSeconds": 93.5, "avgCorrectCount": 3.4}
        }"#;
        let resp: CheckPositionResponse = serde_json::from_str(json).unwrap();
        let stats = resp.run_stats.unwrap();
        assert_eq!(stats.completed_count, 12);
        assert_eq!(stats.avg_time_seconds, Some(93.5));
        assert_eq!(stats.avg_correct_count, Some(3.4));
    }

    #[test]
    fn test_next_puzzle_response() {
        let json = r#"{
            "ok": true,
            "initial_subfen": "r2/bb1/B2",
            "geochess_id": 9917,
            "index": 2,
            "len": 5,
            "white_to_move": false
        }"#;
        let resp: NextPuzzleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.initial_subfen, "r2/bb1/B2");
        assert_eq!(resp.geochess_id, 9917);
        assert_eq!(resp.index, 2);
        assert_eq!(resp.len, 5);
        assert_eq!(resp.white_to_move, Some(false));
    }

    #[test]
    fn test_requests_serialize() {
        let req = CheckPositionRequest { id: 7, x: 4, y: 2 };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"id":7,"x":4,"y":2}"#
        );

        let run = CreateRunRequest::default();
        let json = serde_json::to_string(&run).unwrap();
        assert!(json.contains(r#""n_puzzles":5"#));
        assert!(json.contains(r#""source":"lichess""#));
        assert!(json.contains(r#""min_move":4"#));
    }
}
