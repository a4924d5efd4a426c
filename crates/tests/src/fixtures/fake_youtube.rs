use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tokio::net::TcpListener;

/// German manual track plus an English auto-generated one.
pub const CAPTIONED_VIDEO: &str = "fakeCapt1on";
/// Watch page served behind a captcha wall.
pub const CAPTCHA_VIDEO: &str = "fakeCaptcha";
/// Playable, but the page carries no captions block.
pub const SILENT_VIDEO: &str = "fakeS1lent0";

const ENGLISH_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0.0" dur="1.5">Hey there</text><text start="1.5" dur="2.25">it&amp;#39;s   &lt;i&gt;great&lt;/i&gt;</text><text start="3.75" dur="1"></text><text start="4.75" dur="1.25">to see you</text></transcript>"#;
const GERMAN_XML: &str = r#"<?xml version="1.0" encoding="utf-8" ?><transcript><text start="0" dur="2">Hallo</text></transcript>"#;

/// Local stand-in for the watch page and timedtext endpoints.
pub struct FakeYoutube {
    pub addr: SocketAddr,
    pub base_url: String,
}

struct FakeState {
    base_url: String,
    timedtext: HashMap<(String, String), &'static str>,
}

impl FakeYoutube {
    pub async fn spawn() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake upstream");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let mut timedtext = HashMap::new();
        timedtext.insert((CAPTIONED_VIDEO.to_string(), "en".to_string()), ENGLISH_XML);
        timedtext.insert((CAPTIONED_VIDEO.to_string(), "de".to_string()), GERMAN_XML);

        let state = Arc::new(FakeState {
            base_url: base_url.clone(),
            timedtext,
        });

        let app = Router::new()
            .route("/watch", get(watch))
            .route("/api/timedtext", get(timedtext_xml))
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, base_url }
    }
}

async fn watch(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let video_id = params.get("v").cloned().unwrap_or_default();

    match video_id.as_str() {
        CAPTIONED_VIDEO => {
            let track = |lang: &str, name: &str, kind: &str| {
                format!(
                    r#"{{"baseUrl":"{base}/api/timedtext?v={video_id}&lang={lang}&fmt=srv3","name":{{"simpleText":"{name}"}},"languageCode":"{lang}"{kind},"isTranslatable":true}}"#,
                    base = state.base_url,
                )
            };
            let tracks = [
                track("de", "German", ""),
                track("en", "English (auto-generated)", r#","kind":"asr""#),
            ]
            .join(",");
            Html(format!(
                r#"<html><body><script>var ytInitialPlayerResponse = {{"playabilityStatus":{{"status":"OK"}},"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[{tracks}],"audioTracks":[]}}}},"videoDetails":{{"videoId":"{video_id}"}}}};</script></body></html>"#
            ))
            .into_response()
        }
        CAPTCHA_VIDEO => Html(
            r#"<html><body><form><div class="g-recaptcha" data-sitekey="x"></div></form></body></html>"#,
        )
        .into_response(),
        SILENT_VIDEO => Html(format!(
            r#"<html><script>var ytInitialPlayerResponse = {{"playabilityStatus":{{"status":"OK"}},"videoDetails":{{"videoId":"{video_id}"}}}};</script></html>"#
        ))
        .into_response(),
        _ => Html("<html><body>This video isn't available anymore</body></html>").into_response(),
    }
}

async fn timedtext_xml(
    State(state): State<Arc<FakeState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    // The provider must strip the srv3 format selector before fetching.
    if params.contains_key("fmt") {
        return (StatusCode::BAD_REQUEST, "unexpected fmt").into_response();
    }

    let key = (
        params.get("v").cloned().unwrap_or_default(),
        params.get("lang").cloned().unwrap_or_default(),
    );

    match state.timedtext.get(&key) {
        Some(xml) => ([("content-type", "text/xml; charset=UTF-8")], *xml).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
