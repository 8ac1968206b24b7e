use actix_web::{http::StatusCode, test::TestRequest};
use serde_json::json;

use super::helpers::*;

#[actix_web::test]
async fn admin_reset_restores_fixtures() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::delete().uri(&app_path("/listings/7001")));
    let (status, _) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = get_as_alice(&state, "/listings/7001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = call(&state, TestRequest::post().uri("/admin/reset")).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"status":"reset"}"#);
    let (status, listing) = get_as_alice(&state, "/listings/7001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["images"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn find_shop_by_name() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, json) = get_as_alice(&state, "/shops?shop_name=BobsWoodworks").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 1);
    assert_eq!(json["results"][0]["shop_id"], 5002);
    let (status, json) = get_as_alice(&state, "/shops").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "shop_name parameter is required");
    let (status, json) = get_as_alice(&state, "/shops?shop_name=Nobody").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Shop not found");
}

#[actix_web::test]
async fn shop_update_and_vacation() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::put().uri(&app_path("/shops/5001"))).set_json(json!({"announcement": "Sale!"}));
    let (status, shop) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shop["announcement"], "Sale!");
    assert_eq!(shop["shop_name"], "AliceCrafts");

    let req = with_alice(TestRequest::put().uri(&app_path("/shops/5001/holiday-preferences")))
        .set_json(json!({"is_vacation": true, "vacation_message": "Back soon"}));
    let (status, prefs) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(prefs["is_vacation"], true);
    let (_, shop) = get_as_alice(&state, "/shops/5001").await;
    assert_eq!(shop["is_vacation"], true);
    assert_eq!(shop["vacation_message"], "Back soon");

    let (status, json) = get_as_alice(&state, "/shops/9999/holiday-preferences").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Shop not found");
}

#[actix_web::test]
async fn sections_and_policies() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (_, sections) = get_as_alice(&state, "/shops/5001/sections").await;
    assert_eq!(sections["count"], 3);
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/sections"))).set_json(json!({"title": "Rings"}));
    let (status, section) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(section["title"], "Rings");
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/sections"))).set_json(json!({"rank": 2}));
    let (status, json) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "title is required");
    let (status, json) = get_as_alice(&state, "/shops/5001/sections/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Section not found");

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/return-policies")))
        .set_json(json!({"accepts_returns": true, "accepts_exchanges": false, "return_deadline": 14}));
    let (status, policy) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let id = policy["return_policy_id"].as_i64().unwrap();
    let (status, fetched) = get_as_alice(&state, &format!("/shops/5001/return-policies/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["return_deadline"], 14);
}

#[actix_web::test]
async fn section_listings() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, page) = get_as_alice(&state, "/shops/5001/shop-sections/listings?shop_section_ids=6001,6002").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = page["results"].as_array().unwrap().iter().map(|l| l["listing_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![7001, 7002]);
}

#[actix_web::test]
async fn shipping_profiles_are_soft_deleted() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/shipping-profiles")))
        .set_json(json!({"title": "Express", "origin_country_iso": "US"}));
    let (status, profile) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(profile["profile_type"], "manual");
    assert_eq!(profile["user_id"], 1001);
    let id = profile["shipping_profile_id"].as_i64().unwrap();

    let path = app_path(&format!("/shops/5001/shipping-profiles/{id}"));
    let (status, _) = call(&state, with_alice(TestRequest::delete().uri(&path))).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, profile) = get_as_alice(&state, &format!("/shops/5001/shipping-profiles/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["is_deleted"], true);

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/shipping-profiles")))
        .set_json(json!({"title": "No origin"}));
    let (status, json) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "title and origin_country_iso are required");
}

#[actix_web::test]
async fn receipts_and_tracking() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, page) = get_as_alice(&state, "/shops/5001/receipts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 2);

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/receipts/9001/tracking")))
        .set_json(json!({"carrier_name": "usps", "tracking_code": "9400100000000000000000"}));
    let (status, receipt) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(receipt["is_shipped"], true);
    let shipments = receipt["shipments"].as_array().unwrap();
    assert_eq!(shipments.last().unwrap()["tracking_code"], "9400100000000000000000");

    let (_, transactions) = get_as_alice(&state, "/shops/5001/receipts/9001/transactions").await;
    assert_eq!(transactions["results"][0]["transaction_id"], 9201);
    let (status, transaction) = get_as_alice(&state, "/shops/5001/transactions/9201").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(transaction["receipt_id"], 9001);
    let (status, json) = get_as_alice(&state, "/shops/5001/receipts/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Receipt not found");

    let (_, ledger) = get_as_alice(&state, "/shops/5001/payment-account/ledger-entries").await;
    assert_eq!(ledger["count"], 2);
}

#[actix_web::test]
async fn user_addresses() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (_, addresses) = get_as_alice(&state, "/users/1001/addresses").await;
    assert_eq!(addresses["results"][0]["user_address_id"], 2001);
    let path = app_path("/users/1001/addresses/2001");
    let (status, _) = call(&state, with_alice(TestRequest::delete().uri(&path))).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, json) = call_json(&state, with_alice(TestRequest::delete().uri(&path))).await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Address not found");
    let (_, shops) = get_as_alice(&state, "/users/1002/shops").await;
    assert_eq!(shops["results"][0]["shop_name"], "BobsWoodworks");
}

#[actix_web::test]
async fn reference_data() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (_, carriers) = get_as_alice(&state, "/shipping-carriers").await;
    assert_eq!(carriers["count"], 5);
    let (_, nodes) = get_as_alice(&state, "/seller-taxonomy/nodes").await;
    assert_eq!(nodes["count"], 5);
    let (status, json) = get_as_alice(&state, "/buyer-taxonomy/nodes/3/properties").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Taxonomy not found");
    let (status, states) = get_as_alice(&state, "/shops/5001/readiness-state-definitions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(states["count"], 2);
}
