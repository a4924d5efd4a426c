use std::sync::Arc;

use crate::fixtures::{
    stub_provider::{ENGLISH_VIDEO, GERMAN_VIDEO, JAPANESE_VIDEO, StubProvider},
    test_app::TestApp,
};
use serde_json::Value;
use tubescript_services::LanguagePreference;

#[tokio::test]
async fn returns_raw_segments_with_timing() {
    let app = TestApp::spawn().await;

    let resp = app.get(&format!("/transcript/{ENGLISH_VIDEO}/segments")).await;
    assert_eq!(resp.status().as_u16(), 200);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], true);
    assert_eq!(json["video_id"], ENGLISH_VIDEO);
    assert_eq!(json["segments_count"], 3);
    assert_eq!(json["service"], "test-transcript-api");

    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments[0]["text"], "hello world\n");
    assert_eq!(segments[1]["text"], "this is  a   test");
    assert_eq!(segments[1]["start"], 2.0);
    assert_eq!(segments[1]["duration"], 2.0);
}

#[tokio::test]
async fn makes_a_single_attempt() {
    let provider = Arc::new(StubProvider::catalogue());
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let resp = app.get(&format!("/transcript/{GERMAN_VIDEO}/segments")).await;
    assert_eq!(resp.status().as_u16(), 200);

    let calls = provider.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].1,
        LanguagePreference::languages(["en", "de", "fr", "es", "it"])
    );
}

#[tokio::test]
async fn missing_transcript_is_a_server_error() {
    let app = TestApp::spawn().await;

    // Japanese is outside the single attempt's language list.
    let resp = app.get(&format!("/transcript/{JAPANESE_VIDEO}/segments")).await;
    assert_eq!(resp.status().as_u16(), 500);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "internal");
    assert!(json["detail"].as_str().unwrap().starts_with("Server error: "));
}

#[tokio::test]
async fn short_ids_are_passed_through() {
    let provider = Arc::new(StubProvider::catalogue());
    let app = TestApp::spawn_with_provider(provider.clone()).await;

    let resp = app.get("/transcript/short/segments").await;
    assert_eq!(resp.status().as_u16(), 500);
    assert_eq!(provider.calls().len(), 1);
}
