use super::common::*;
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use std::sync::Arc;
use tower::ServiceExt;

use crate::scoring::router::{example_handler, process_handler};
use crate::scoring::{scoring_router, InterviewSubmission, ScoringError, SessionStatus};

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::post("/api/process")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("request builds")
}

#[tokio::test]
async fn process_handler_returns_result_for_valid_submission() {
    let engine = Arc::new(engine());

    let Json(result) = process_handler(State(engine), Ok(Json(early_termination())))
        .await
        .expect("scores");

    assert_eq!(result.status, SessionStatus::Terminated);
    assert_eq!(result.interview_id, "CAND-7");
}

#[tokio::test]
async fn process_handler_maps_engine_errors_to_bad_request() {
    let engine = Arc::new(engine());

    let err = process_handler(State(engine), Ok(Json(submission(Vec::new()))))
        .await
        .unwrap_err();
    assert_eq!(err, ScoringError::EmptyInput);

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("at least one attempt"));
}

#[tokio::test]
async fn process_route_scores_payloads() {
    let router = scoring_router(Arc::new(engine()));
    let body = serde_json::to_vec(&strong_performer()).expect("serializes");

    let response = router.oneshot(post_json(body)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["final_score"], 94);
    assert_eq!(payload["recommendation"], "strong hire");
    assert_eq!(payload["status"], "Completed");
    assert!(payload["termination_reason"].is_null());
    assert_eq!(payload["metrics"]["time_efficiency"], 100);
    assert_eq!(payload["questions"][0]["status"], "Passed");
    assert_eq!(payload["questions"][0]["time_limit"], 60.0);
    assert_eq!(payload["state_log"][0]["state"], "promote");
    assert_eq!(payload["performance_summary"]["total_questions"], 4);
}

#[tokio::test]
async fn process_route_rejects_unparseable_bodies() {
    let router = scoring_router(Arc::new(engine()));

    let response = router
        .oneshot(post_json("{ not json"))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("malformed interview record"));
}

#[tokio::test]
async fn process_route_rejects_invalid_fields() {
    let router = scoring_router(Arc::new(engine()));
    let mut input = borderline();
    input.questions[0].answer_quality = 1.5;
    let body = serde_json::to_vec(&input).expect("serializes");

    let response = router.oneshot(post_json(body)).await.expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("answer_quality"));
}

#[tokio::test]
async fn example_route_serves_a_scoreable_request() {
    let Json(example) = example_handler().await;
    assert!(engine().process(&example).is_ok());

    let router = scoring_router(Arc::new(engine()));
    let response = router
        .oneshot(
            Request::get("/api/example")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let served: InterviewSubmission = serde_json::from_value(payload).expect("request shape");
    assert_eq!(served, example);
}
