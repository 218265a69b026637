use contracts::projections::p001_public_prices::dto::PublicPricesResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{network_error, read_json, HttpPricesApi, PriceApiError};

#[allow(async_fn_in_trait)]
pub trait PublicPricesApi {
    /// `GET /prices/public/friend`
    async fn fetch_public_prices(&self) -> Result<PublicPricesResponse, PriceApiError>;
}

impl PublicPricesApi for HttpPricesApi {
    async fn fetch_public_prices(&self) -> Result<PublicPricesResponse, PriceApiError> {
        let url = self.endpoints().public_prices_url();

        let response = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }
}
