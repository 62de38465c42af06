//! Integration tests for `POST /process`.
//!
//! Every domain outcome (converted, refused, not found) is a 200 response;
//! these tests assert on the literal body text.

mod common;

use akkhara_core::translit;
use axum::http::StatusCode;
use common::{body_json, body_text, post_raw, process};

const LOSSY: &str = "Not available: colloquial thai is a lossy encoding of pali!";
const NOT_FOUND: &str = "func not found";

// ---------------------------------------------------------------------------
// Test: identity conversion returns the input unchanged
// ---------------------------------------------------------------------------

#[tokio::test]
async fn latin_to_latin_is_identity() {
    let response = process(common::build_test_app(), "dhamma", "latin", "latin").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "dhamma");
}

#[tokio::test]
async fn identity_for_every_script_token() {
    for token in ["latin", "thai1", "thai2", "kana"] {
        let text = "ธมฺม dhamma ダンマ";
        let response = process(common::build_test_app(), text, token, token).await;
        assert_eq!(body_text(response).await, text, "identity failed for {token}");
    }
}

// ---------------------------------------------------------------------------
// Test: primitive conversions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn latin_to_thai_pintu() {
    let response = process(common::build_test_app(), "buddho", "latin", "thai2").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(body_text(response).await, "พุทฺโธ");
}

#[tokio::test]
async fn latin_to_thai_pintu_drops_typographic_apostrophe() {
    let response = process(common::build_test_app(), "ti’ssa", "latin", "thai2").await;

    assert_eq!(body_text(response).await, translit::roman_to_thai("tissa"));
}

#[tokio::test]
async fn thai_pintu_to_latin() {
    let response = process(common::build_test_app(), "เมตฺตา", "thai2", "latin").await;

    assert_eq!(body_text(response).await, "mettā");
}

#[tokio::test]
async fn thai_colloquial_to_latin() {
    let response = process(common::build_test_app(), "นิพพาน", "thai1", "latin").await;

    assert_eq!(body_text(response).await, "nibbāna");
}

// ---------------------------------------------------------------------------
// Test: composed conversions obey the composition law
// ---------------------------------------------------------------------------

#[tokio::test]
async fn thai_colloquial_to_kana_goes_through_latin() {
    let text = "พุทธัง สะระณัง";

    let direct = body_text(process(common::build_test_app(), text, "thai1", "kana").await).await;
    let latin = body_text(process(common::build_test_app(), text, "thai1", "latin").await).await;
    let chained = body_text(process(common::build_test_app(), &latin, "latin", "kana").await).await;

    assert_eq!(direct, chained);
    assert_eq!(direct, "ブッダン サラナン");
}

// ---------------------------------------------------------------------------
// Test: lossy pair returns the explanatory sentinel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn thai_colloquial_to_pintu_is_refused() {
    let response = process(common::build_test_app(), "นะโม", "thai1", "thai2").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, LOSSY);
}

// ---------------------------------------------------------------------------
// Test: unregistered pairs and unknown tokens return the not-found sentinel
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unregistered_pair_returns_sentinel_consistently() {
    for _ in 0..3 {
        let response = process(common::build_test_app(), "dhamma", "kana", "latin").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, NOT_FOUND);
    }
}

#[tokio::test]
async fn latin_to_colloquial_is_not_registered() {
    let response = process(common::build_test_app(), "dhamma", "latin", "thai1").await;

    assert_eq!(body_text(response).await, NOT_FOUND);
}

#[tokio::test]
async fn unknown_script_token_takes_not_found_path() {
    let response = process(common::build_test_app(), "dhamma", "latin", "sinhala").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, NOT_FOUND);

    let response = process(common::build_test_app(), "dhamma", "LATIN", "latin").await;
    assert_eq!(body_text(response).await, NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: malformed payloads are client errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn malformed_json_returns_400() {
    let response = post_raw(common::build_test_app(), "/process", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Invalid JSON data");
}

#[tokio::test]
async fn wrong_shape_returns_400() {
    let response = post_raw(
        common::build_test_app(),
        "/process",
        r#"{"text": 42, "inputSelection": "latin", "outputSelection": "latin"}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_raw(common::build_test_app(), "/process", r#"{"text": "a"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_body_returns_400() {
    let response = post_raw(common::build_test_app(), "/process", "").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bad_request_does_not_affect_later_requests() {
    let app = common::build_test_app();

    let bad = post_raw(app.clone(), "/process", "[]").await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let good = process(app, "dhamma", "latin", "thai2").await;
    assert_eq!(body_text(good).await, "ธมฺม");
}

// ---------------------------------------------------------------------------
// Test: determinism and isolation under concurrency
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_requests_are_byte_identical() {
    let app = common::build_test_app();
    let first = body_text(process(app.clone(), "saṅgha", "latin", "kana").await).await;
    let second = body_text(process(app, "saṅgha", "latin", "kana").await).await;

    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_interfere() {
    let app = common::build_test_app();
    let words = ["dhamma", "buddha", "mettā", "saṅgha", "nibbāna", "paññā"];
    let pairs = [("latin", "thai2"), ("latin", "kana")];

    let mut handles = Vec::new();
    for round in 0..8 {
        for (i, word) in words.iter().enumerate() {
            let (input, output) = pairs[(i + round) % pairs.len()];
            let app = app.clone();
            let word = word.to_string();
            handles.push(tokio::spawn(async move {
                let body = body_text(process(app, &word, input, output).await).await;
                (word, output, body)
            }));
        }
    }

    for handle in handles {
        let (word, output, body) = handle.await.unwrap();
        let expected = match output {
            "thai2" => translit::roman_to_thai(&word),
            _ => translit::roman_to_kana(&word),
        };
        assert_eq!(body, expected, "wrong result for {word} -> {output}");
    }
}
