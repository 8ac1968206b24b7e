use actix_web::{http::StatusCode, test::TestRequest};
use serde_json::{json, Value};

use super::helpers::*;

fn new_listing() -> Value {
    json!({
        "title": "X",
        "quantity": 5,
        "price": 10.0,
        "who_made": "i_did",
        "when_made": "2020_2026",
        "taxonomy_id": 1207
    })
}

#[actix_web::test]
async fn listing_lifecycle() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings"))).set_json(new_listing());
    let (status, listing) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(listing["state"], "draft");
    assert_eq!(listing["shop_id"], 5001);
    assert_eq!(listing["user_id"], 1001);
    assert_eq!(listing["price"], json!({"amount": 1000, "divisor": 100, "currency_code": "USD"}));
    let id = listing["listing_id"].as_i64().unwrap();

    let req = with_alice(TestRequest::delete().uri(&app_path(&format!("/shops/5001/listings/{id}"))));
    let (status, body) = call(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = get_as_alice(&state, &format!("/listings/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Listing not found");
}

#[actix_web::test]
async fn create_listing_validation() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let mut incomplete = new_listing();
    incomplete["who_made"] = json!("");
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings"))).set_json(incomplete);
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields: title, quantity, price, who_made, when_made, taxonomy_id");

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings")))
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json");
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/42/listings"))).set_json(new_listing());
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shop not found");
}

#[actix_web::test]
async fn update_listing_fields() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::patch().uri(&app_path("/shops/5001/listings/7005")))
        .set_json(json!({"state": "active", "price": 12.5, "title": "Rose Gold Ring"}));
    let (status, listing) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["state"], "active");
    assert_eq!(listing["price"]["amount"], 1250);
    assert_eq!(listing["title"], "Rose Gold Ring");

    let req = with_alice(TestRequest::put().uri(&app_path("/shops/5001/listings/1"))).set_json(json!({}));
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Listing not found");
}

#[actix_web::test]
async fn listing_includes_images() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, listing) = get_as_alice(&state, "/listings/7001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["images"].as_array().unwrap().len(), 3);
    let (_, batch) = get_as_alice(&state, "/listings/batch?listing_ids=7001,7002,999").await;
    assert_eq!(batch["count"], 2);
    assert_eq!(batch["results"][0]["images"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn batch_needs_ids() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, body) = get_as_alice(&state, "/listings/batch").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "listing_ids parameter is required");
}

#[actix_web::test]
async fn shop_listings_pagination() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, page) = get_as_alice(&state, "/shops/5001/listings?limit=2&offset=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 5);
    let ids: Vec<i64> = page["results"].as_array().unwrap().iter().map(|l| l["listing_id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![7002, 7003]);

    let (_, page) = get_as_alice(&state, "/shops/5001/listings?offset=50").await;
    assert_eq!(page["count"], 5);
    assert!(page["results"].as_array().unwrap().is_empty());

    let (_, page) = get_as_alice(&state, "/shops/5001/listings?state=draft").await;
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["listing_id"], 7005);

    let (_, page) = get_as_alice(&state, "/shops/5001/listings/active").await;
    assert_eq!(page["count"], 4);
}

#[actix_web::test]
async fn inventory_is_idempotent() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, first) = get_as_alice(&state, "/listings/7001/inventory").await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = get_as_alice(&state, "/shops/5001/listings/7001/inventory").await;
    assert_eq!(first, second);
    let offering_id = first["products"][0]["offerings"][0]["offering_id"].as_i64().unwrap();

    let path = format!("/listings/7001/products/1/offerings/{offering_id}");
    let (status, offering) = get_as_alice(&state, &path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(offering["offering_id"], offering_id);
    let (status, body) = get_as_alice(&state, "/listings/7001/products/1/offerings/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Offering not found");
}

#[actix_web::test]
async fn active_listing_search() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, page) = get_as_alice(&state, "/listings/active?keywords=walnut").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["count"], 1);
    assert_eq!(page["results"][0]["listing_id"], 7010);

    let (_, page) = get_as_alice(&state, "/listings/active?limit=100").await;
    let results = page["results"].as_array().unwrap();
    assert!(results.iter().all(|l| l["state"] == "active"));
    assert!(results.iter().all(|l| l["listing_id"] != 7005));
}

#[actix_web::test]
async fn unknown_sort_values_give_id_order() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    for query in ["sort_on=bogus", "sort_on=price&sort_order=sideways", "sort_order=sideways"] {
        let (status, page) = get_as_alice(&state, &format!("/listings/active?limit=100&{query}")).await;
        assert_eq!(status, StatusCode::OK, "for {query}");
        let ids: Vec<i64> =
            page["results"].as_array().unwrap().iter().map(|l| l["listing_id"].as_i64().unwrap()).collect();
        assert!(ids.len() > 1, "for {query}");
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "for {query}: {ids:?}");
    }
    let (_, page) = get_as_alice(&state, "/listings/active?limit=100&sort_on=price&sort_order=asc").await;
    let prices: Vec<i64> =
        page["results"].as_array().unwrap().iter().map(|l| l["price"]["amount"].as_i64().unwrap()).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}");
}

#[actix_web::test]
async fn personalization_update() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::put().uri(&app_path("/shops/5001/listings/7002/personalization")))
        .set_json(json!({"is_personalizable": true, "personalization_instructions": "Initials only"}));
    let (status, body) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_personalizable"], true);
    assert_eq!(body["personalization_instructions"], "Initials only");
    let (_, body) = get_as_alice(&state, "/listings/7002/personalization").await;
    assert_eq!(body["personalization_instructions"], "Initials only");
}

#[actix_web::test]
async fn translations_are_echoed() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let (status, body) = get_as_alice(&state, "/shops/5001/listings/7001/translations/de").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["language"], "de");
    assert_eq!(body["title"], "Handmade Silver Pendant Necklace");

    let req = with_alice(TestRequest::put().uri(&app_path("/shops/5001/listings/7001/translations/fr")))
        .set_json(json!({"title": "Collier"}));
    let (_, body) = call_json(&state, req).await.unwrap();
    assert_eq!(body["title"], "Collier");
    assert_eq!(body["language"], "fr");
    // Not stored
    let (_, body) = get_as_alice(&state, "/shops/5001/listings/7001/translations/fr").await;
    assert_eq!(body["title"], "Handmade Silver Pendant Necklace");
}

#[actix_web::test]
async fn image_upload_and_delete() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings/7002/images?rank=4")))
        .set_form([("alt_text", "Side view")]);
    let (status, image) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(image["alt_text"], "Side view");
    assert_eq!(image["rank"], 4);
    let image_id = image["listing_image_id"].as_i64().unwrap();

    let path = format!("/shops/5001/listings/7002/images/{image_id}");
    let (status, _) = call(&state, with_alice(TestRequest::delete().uri(&app_path(&path)))).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = call_json(&state, with_alice(TestRequest::delete().uri(&app_path(&path)))).await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Image not found");
}

#[actix_web::test]
async fn file_and_video_uploads() {
    let _ = env_logger::try_init().ok();
    let state = seeded_state();
    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings/7004/files")));
    let (status, file) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(file["filename"], "file.pdf");
    assert_eq!(file["filetype"], "application/pdf");
    let (_, files) = get_as_alice(&state, "/shops/5001/listings/7004/files").await;
    assert_eq!(files["count"], 2);

    let req = with_alice(TestRequest::post().uri(&app_path("/shops/5001/listings/7001/videos")));
    let (status, video) = call_json(&state, req).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    let video_id = video["video_id"].as_i64().unwrap();
    let (status, _) = get_as_alice(&state, &format!("/listings/7001/videos/{video_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let path = app_path(&format!("/shops/5001/listings/7001/videos/{video_id}"));
    let (status, _) = call(&state, with_alice(TestRequest::delete().uri(&path))).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, body) = get_as_alice(&state, &format!("/listings/7001/videos/{video_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Video not found");
}
