//! API utilities for frontend-backend communication
//!
//! [`HttpPricesApi`] is the `gloo-net` client behind the page handlers. The
//! per-endpoint calls live next to their handlers (`a001_price_item::api`,
//! `p001_public_prices::api`).

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::shared::config::Endpoints;

#[derive(Debug, Error, PartialEq)]
pub enum PriceApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Same-origin client for the price endpoints
#[derive(Debug, Clone)]
pub struct HttpPricesApi {
    endpoints: Endpoints,
}

impl HttpPricesApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

/// Checks the status and decodes the JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, PriceApiError> {
    if !response.ok() {
        return Err(PriceApiError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| PriceApiError::Decode(e.to_string()))
}

pub fn network_error(e: gloo_net::Error) -> PriceApiError {
    PriceApiError::Network(e.to_string())
}
