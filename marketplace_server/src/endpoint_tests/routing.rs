use actix_web::{http::StatusCode, test::TestRequest};

use super::helpers::*;

#[actix_web::test]
async fn unknown_endpoint() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    for path in ["/v3/application/nothing-here", "/v3/application/shops/5001/widgets", "/nowhere"] {
        let (status, body) = call(&state, with_key(TestRequest::get().uri(path))).await.unwrap();
        assert_eq!(status, StatusCode::NOT_FOUND, "for {path}");
        assert_eq!(body, error_body("Endpoint not found"), "for {path}");
    }
}

#[actix_web::test]
async fn method_not_allowed() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let cases = [
        TestRequest::post().uri(&app_path("/listings/7001")),
        TestRequest::delete().uri(&app_path("/listings/active")),
        TestRequest::patch().uri(&app_path("/shops/5001")),
        TestRequest::put().uri(&app_path("/users/me")),
    ];
    for req in cases {
        let (status, body) = call(&state, with_alice(req)).await.unwrap();
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, error_body("Method not allowed"));
    }
    let (status, body) = call(&state, TestRequest::get().uri("/admin/reset")).await.unwrap();
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, error_body("POST only"));
}

#[actix_web::test]
async fn literal_segments_win_over_ids() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, json) = get_as_alice(&state, "/listings/active").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["count"].as_u64().unwrap() > 0);
    let (status, json) = get_as_alice(&state, "/shops/5001/listings/featured").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["results"].is_array());
    let (status, json) = get_as_alice(&state, "/users/me").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user_id"], 1001);
}

#[actix_web::test]
async fn invalid_path_ids() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let cases = [
        ("/listings/seven", "Invalid listing_id"),
        ("/shops/alice", "Invalid shop_id"),
        ("/shops/5001/sections/x", "Invalid shop_section_id"),
        ("/buyer-taxonomy/nodes/x/properties", "Invalid taxonomy_id"),
        ("/listings/7001/products/1/offerings/x", "Invalid offering_id"),
    ];
    for (path, msg) in cases {
        let (status, json) = get_as_alice(&state, path).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "for {path}");
        assert_eq!(json["error"], msg, "for {path}");
    }
}
