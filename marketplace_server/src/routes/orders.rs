//! Receipts, transactions, payments and the shop's payment ledger. Every endpoint here needs a transactions scope.
use actix_web::{web, HttpRequest, HttpResponse};
use log::*;
use marketplace_engine::{db_types::ReceiptUpdate, MarketStore, Scope};

use crate::{
    data_objects::TrackingRequest,
    errors::ServerError,
    helpers::{json_body, list_response, page_response, pagination, path_id, query_params},
    route,
};

route!(shop_receipts => Get "/shops/{shop_id}/receipts" requires [Scope::TransactionsR]);
pub async fn shop_receipts(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.shop_receipts(shop_id, limit, offset)))
}

route!(get_receipt => Get "/shops/{shop_id}/receipts/{receipt_id}" requires [Scope::TransactionsR]);
pub async fn get_receipt(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let receipt_id = path_id(&req, "receipt_id")?;
    let receipt = store.receipt(receipt_id).ok_or_else(|| ServerError::not_found("Receipt"))?;
    Ok(HttpResponse::Ok().json(receipt))
}

route!(update_receipt => Put "/shops/{shop_id}/receipts/{receipt_id}" requires [Scope::TransactionsW]);
pub async fn update_receipt(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let receipt_id = path_id(&req, "receipt_id")?;
    let update = json_body::<ReceiptUpdate>(&body)?;
    let receipt = store.update_receipt(receipt_id, update).ok_or_else(|| ServerError::not_found("Receipt"))?;
    Ok(HttpResponse::Ok().json(receipt))
}

route!(receipt_payments => Get "/shops/{shop_id}/receipts/{receipt_id}/payments" requires [Scope::TransactionsR]);
pub async fn receipt_payments(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let receipt_id = path_id(&req, "receipt_id")?;
    Ok(list_response(store.receipt_payments(receipt_id)))
}

route!(receipt_transactions => Get "/shops/{shop_id}/receipts/{receipt_id}/transactions" requires [Scope::TransactionsR]);
pub async fn receipt_transactions(
    req: HttpRequest,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let receipt_id = path_id(&req, "receipt_id")?;
    Ok(list_response(store.receipt_transactions(receipt_id)))
}

route!(create_receipt_shipment => Post "/shops/{shop_id}/receipts/{receipt_id}/tracking" requires [Scope::TransactionsW]);
/// Adds a shipment to the receipt and marks it shipped. Responds with the updated receipt.
pub async fn create_receipt_shipment(
    req: HttpRequest,
    body: web::Bytes,
    store: web::Data<MarketStore>,
) -> Result<HttpResponse, ServerError> {
    let receipt_id = path_id(&req, "receipt_id")?;
    store.receipt(receipt_id).ok_or_else(|| ServerError::not_found("Receipt"))?;
    let tracking = json_body::<TrackingRequest>(&body)?;
    let receipt = store
        .add_receipt_shipment(receipt_id, &tracking.carrier_name, &tracking.tracking_code)
        .ok_or_else(|| ServerError::not_found("Receipt"))?;
    info!("Tracking code {} added to receipt {receipt_id}", tracking.tracking_code);
    Ok(HttpResponse::Created().json(receipt))
}

route!(shop_transactions => Get "/shops/{shop_id}/transactions" requires [Scope::TransactionsR]);
pub async fn shop_transactions(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.shop_transactions(shop_id, limit, offset)))
}

route!(get_transaction => Get "/shops/{shop_id}/transactions/{transaction_id}" requires [Scope::TransactionsR]);
pub async fn get_transaction(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let transaction_id = path_id(&req, "transaction_id")?;
    let transaction = store.transaction(transaction_id).ok_or_else(|| ServerError::not_found("Transaction"))?;
    Ok(HttpResponse::Ok().json(transaction))
}

route!(shop_payments => Get "/shops/{shop_id}/payments" requires [Scope::TransactionsR]);
pub async fn shop_payments(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    Ok(list_response(store.shop_payments(shop_id)))
}

route!(ledger_entries => Get "/shops/{shop_id}/payment-account/ledger-entries" requires [Scope::TransactionsR]);
pub async fn ledger_entries(req: HttpRequest, store: web::Data<MarketStore>) -> Result<HttpResponse, ServerError> {
    let shop_id = path_id(&req, "shop_id")?;
    let (limit, offset) = pagination(&query_params(&req));
    Ok(page_response(store.ledger_entries(shop_id, limit, offset)))
}
