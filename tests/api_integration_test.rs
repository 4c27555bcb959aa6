use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use lucky_numbers::app::routes::{
    create_router, with_service_layers, BODY_LIMIT_BYTES, CALCULATE_PATH, HEALTH_PATH,
};
use lucky_numbers::LuckyService;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn router() -> Router {
    create_router(Arc::new(LuckyService::new()), Duration::from_secs(5))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

async fn post_with_content_type(body: String, content_type: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(Method::POST).uri(CALCULATE_PATH);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    send(router(), request.body(Body::from(body)).unwrap()).await
}

async fn post_json(body: String) -> (StatusCode, Value) {
    post_with_content_type(body, Some("application/json")).await
}

fn reference_submission() -> String {
    json!({"fullName": "Nguyen Van An", "birthDate": "1990-05-15", "gender": "male"}).to_string()
}

#[tokio::test]
async fn calculate_returns_success_envelope() {
    let (status, json) = post_json(
        json!({
            "fullName": "Nguyen Van An",
            "birthDate": "1990-05-15",
            "gender": "male",
            "age": 5,
            "houseDirection": "east",
            "profession": "Kỹ sư"
        })
        .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["fiveElements"]["element"], "Kim");
    assert_eq!(data["heavenlyStems"]["stem"], "Canh");
    assert_eq!(data["earthlyBranches"]["branch"], "Ngọ");
    assert_eq!(data["luckyNumbers"], json!([3, 1, 6, 7, 8, 5, 9]));
    assert_eq!(data["luckyColors"], json!(["Trắng", "Bạc", "Xám"]));
    assert_eq!(data["luckyDays"], json!(["Thứ 2", "Thứ 6"]));
    assert_eq!(data["luckyHours"], json!(["7h-9h", "15h-17h"]));
    assert_eq!(
        data["fengShuiAdvice"],
        "Nên đặt vật phẩm kim loại ở hướng Tây, tránh hướng Nam để tăng vận may."
    );
    assert_eq!(data["request"]["fullName"], "Nguyen Van An");
    assert_eq!(data["request"]["houseDirection"], "east");
    assert_eq!(data["request"]["profession"], "Kỹ sư");
    // age is re-derived, never echoed from the client
    assert!(data["request"]["age"].as_u64().unwrap() >= 35);
    assert!(data["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert!(data["createdAt"].is_string());
}

#[tokio::test]
async fn missing_full_name_is_client_error() {
    let (status, json) = post_json(json!({"birthDate": "1990-05-15", "gender": "male"}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({"success": false, "message": "Thiếu thông tin bắt buộc"})
    );
}

#[tokio::test]
async fn empty_strings_count_as_missing() {
    let (status, json) =
        post_json(json!({"fullName": "", "birthDate": "", "gender": ""}).to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Thiếu thông tin bắt buộc");
}

#[tokio::test]
async fn malformed_birth_date_is_rejected() {
    let (status, json) = post_json(
        json!({"fullName": "Nguyen Van An", "birthDate": "yesterday", "gender": "female"})
            .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Ngày sinh không hợp lệ");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (status, json) = post_json("{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Dữ liệu không hợp lệ");
}

#[tokio::test]
async fn female_result_uses_even_numbers() {
    let (status, json) = post_json(
        json!({"fullName": "Tran Thi Mai", "birthDate": "1996-01-02", "gender": "female"})
            .to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["fiveElements"]["element"], "Hỏa");
    // name 4, (4+6)%10 -> 10, Hỏa 2 3 7 9, female 2 4 6 8 10, 96%9 = 6
    assert_eq!(data["luckyNumbers"], json!([4, 10, 2, 3, 7, 9, 6]));
    assert_eq!(data["heavenlyStems"]["stem"], "Bính");
    assert_eq!(data["earthlyBranches"]["branch"], "Tý");
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(HEALTH_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn get_on_calculate_is_not_allowed() {
    let response = router()
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri(CALCULATE_PATH)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn body_is_parsed_without_json_content_type() {
    for content_type in [None, Some("text/plain;charset=UTF-8")] {
        let (status, json) = post_with_content_type(reference_submission(), content_type).await;

        assert_eq!(status, StatusCode::OK, "content type {:?}", content_type);
        assert_eq!(json["data"]["luckyNumbers"], json!([3, 1, 6, 7, 8, 5, 9]));
    }
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let body = json!({
        "fullName": "Nguyen Van An",
        "birthDate": "1990-05-15",
        "gender": "male",
        "profession": "x".repeat(BODY_LIMIT_BYTES)
    })
    .to_string();

    let (status, json) = post_json(body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({"success": false, "message": "Dữ liệu không hợp lệ"})
    );
}

async fn exploding_handler() -> &'static str {
    panic!("lookup table corrupted")
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

#[tokio::test]
async fn panics_become_generic_server_error() {
    let app = with_service_layers(
        Router::new().route("/boom", get(exploding_handler)),
        Duration::from_secs(5),
    );

    let (status, json) = send(app, Request::builder().uri("/boom").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json,
        json!({"success": false, "message": "Có lỗi xảy ra khi tính toán"})
    );
}

#[tokio::test]
async fn slow_requests_time_out_with_envelope() {
    let app = with_service_layers(
        Router::new().route("/slow", get(slow_handler)),
        Duration::from_millis(50),
    );

    let (status, json) = send(app, Request::builder().uri("/slow").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(
        json,
        json!({"success": false, "message": "Yêu cầu xử lý quá thời gian"})
    );
}
