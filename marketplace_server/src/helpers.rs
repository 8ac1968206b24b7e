use std::{collections::HashMap, str::FromStr};

use actix_web::{http::header::CONTENT_TYPE, web, HttpRequest, HttpResponse};
use log::trace;
use marketplace_engine::{Page, DEFAULT_PAGE_LIMIT};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ServerError;

pub type QueryParams = HashMap<String, String>;

/// The `{count, results}` wrapper used by every endpoint that returns a collection.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub count: usize,
    pub results: Vec<T>,
}

impl<T> From<Page<T>> for Envelope<T> {
    fn from(page: Page<T>) -> Self {
        Self { count: page.total, results: page.results }
    }
}

impl<T> From<Vec<T>> for Envelope<T> {
    fn from(results: Vec<T>) -> Self {
        Self { count: results.len(), results }
    }
}

/// 200 with one page of a collection; `count` is the size of the whole filtered collection.
pub fn page_response<T: Serialize>(page: Page<T>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::from(page))
}

/// 200 with an unpaginated collection.
pub fn list_response<T: Serialize>(items: Vec<T>) -> HttpResponse {
    HttpResponse::Ok().json(Envelope::from(items))
}

/// Parses the named path segment as an id. Anything that is not an integer is a 400 `Invalid {name}`.
pub fn path_id(req: &HttpRequest, name: &str) -> Result<i64, ServerError> {
    req.match_info().get(name).and_then(|s| s.parse::<i64>().ok()).ok_or_else(|| ServerError::invalid_path_id(name))
}

pub fn path_str<'r>(req: &'r HttpRequest, name: &str) -> &'r str {
    req.match_info().get(name).unwrap_or_default()
}

/// The query string as a map. A malformed query string is treated as empty.
pub fn query_params(req: &HttpRequest) -> QueryParams {
    web::Query::<QueryParams>::from_query(req.query_string()).map(web::Query::into_inner).unwrap_or_default()
}

/// A non-empty query value.
pub fn query_str<'q>(params: &'q QueryParams, key: &str) -> Option<&'q str> {
    params.get(key).map(String::as_str).filter(|s| !s.is_empty())
}

/// Parses a query value, falling back to `default` when it is missing or unparseable.
pub fn query_or<T: FromStr>(params: &QueryParams, key: &str, default: T) -> T {
    query_str(params, key).and_then(|s| s.parse::<T>().ok()).unwrap_or(default)
}

/// `limit` (default 25) and `offset` (default 0). Negative values are clamped to zero.
pub fn pagination(params: &QueryParams) -> (usize, usize) {
    let limit = query_or::<i64>(params, "limit", DEFAULT_PAGE_LIMIT as i64).max(0);
    let offset = query_or::<i64>(params, "offset", 0).max(0);
    (usize::try_from(limit).unwrap_or(DEFAULT_PAGE_LIMIT), usize::try_from(offset).unwrap_or_default())
}

/// Splits a comma separated list, trimming each item and dropping empty ones.
pub fn split_csv(value: &str) -> Vec<&str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Comma separated ids. Items that are not integers are skipped.
pub fn csv_ids(value: &str) -> Vec<i64> {
    split_csv(value).into_iter().filter_map(|s| s.parse().ok()).collect()
}

/// Deserializes a JSON request body. An empty or malformed body is a 400 `Invalid request body`.
pub fn json_body<T: DeserializeOwned>(body: &web::Bytes) -> Result<T, ServerError> {
    serde_json::from_slice(body).map_err(|e| {
        trace!("Could not deserialize request body. {e}");
        ServerError::invalid_body()
    })
}

/// Form values from the query string, overridden by those in a url-encoded body.
pub fn form_values(req: &HttpRequest, body: &web::Bytes) -> Result<QueryParams, ServerError> {
    let mut values = query_params(req);
    let is_form = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));
    if is_form && !body.is_empty() {
        let text = std::str::from_utf8(body).map_err(|_| ServerError::BadRequest("Invalid form data".into()))?;
        let form = web::Query::<QueryParams>::from_query(text)
            .map_err(|_| ServerError::BadRequest("Invalid form data".into()))?;
        values.extend(form.into_inner());
    }
    Ok(values)
}
