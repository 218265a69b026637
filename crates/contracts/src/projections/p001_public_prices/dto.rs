use serde::{Deserialize, Serialize};

/// Price item another group shares publicly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicPriceItem {
    /// Display label, untrusted
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub prix: f64,
}

/// Answer of `GET /prices/public/friend`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicPricesResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub items: Option<Vec<PublicPriceItem>>,
}

impl PublicPricesResponse {
    /// Items of the response; an absent list reads as empty.
    pub fn into_items(self) -> Vec<PublicPriceItem> {
        self.items.unwrap_or_default()
    }
}
