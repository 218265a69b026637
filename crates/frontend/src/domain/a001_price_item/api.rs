use contracts::domain::a001_price_item::dto::DeletePriceResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{network_error, read_json, HttpPricesApi, PriceApiError};

#[allow(async_fn_in_trait)]
pub trait PriceItemApi {
    /// `DELETE /prices/{id}`; success is a 2xx answer with a JSON body
    async fn delete_price(&self, id: &str) -> Result<DeletePriceResponse, PriceApiError>;
}

impl PriceItemApi for HttpPricesApi {
    async fn delete_price(&self, id: &str) -> Result<DeletePriceResponse, PriceApiError> {
        let url = self.endpoints().delete_price_url(id);

        let response = Request::delete(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;

        read_json(response).await
    }
}
