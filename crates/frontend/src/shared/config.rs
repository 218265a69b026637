//! Page configuration
//!
//! Every value has a built-in default. A page may override any subset with
//!
//! ```html
//! <script type="application/json" id="price-admin-config">
//!   { "messages": { "empty": "Rien à afficher." } }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::shared::dom::{is_css_identifier, Marker};

/// Id of the inline JSON block holding configuration overrides
pub const CONFIG_ELEMENT_ID: &str = "price-admin-config";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub markers: DomMarkers,
    pub endpoints: Endpoints,
    pub messages: Messages,
}

/// Markers the server-rendered template provides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomMarkers {
    pub delete_trigger_class: String,
    pub row_id_attribute: String,
    pub load_trigger_id: String,
    pub panel_id: String,
    pub status_id: String,
    pub rows_id: String,
}

impl Default for DomMarkers {
    fn default() -> Self {
        Self {
            delete_trigger_class: "js-delete".to_string(),
            row_id_attribute: "data-price-id".to_string(),
            load_trigger_id: "load-public-prices".to_string(),
            panel_id: "public-prices-panel".to_string(),
            status_id: "public-prices-status".to_string(),
            rows_id: "public-prices-rows".to_string(),
        }
    }
}

impl DomMarkers {
    pub fn delete_trigger(&self) -> Marker {
        Marker::Class(self.delete_trigger_class.clone())
    }

    pub fn price_row(&self) -> Marker {
        Marker::Attribute(self.row_id_attribute.clone())
    }

    pub fn load_trigger(&self) -> Marker {
        Marker::Id(self.load_trigger_id.clone())
    }

    /// Marker values that cannot be used in a selector
    pub fn invalid_values(&self) -> Vec<&str> {
        [
            &self.delete_trigger_class,
            &self.row_id_attribute,
            &self.load_trigger_id,
            &self.panel_id,
            &self.status_id,
            &self.rows_id,
        ]
        .into_iter()
        .map(String::as_str)
        .filter(|value| !is_css_identifier(value))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Prefix for every endpoint; empty means same origin
    pub api_base: String,
    /// `{id}` is replaced by the percent-encoded price id
    pub delete_price: String,
    pub public_prices: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            delete_price: "/prices/{id}".to_string(),
            public_prices: "/prices/public/friend".to_string(),
        }
    }
}

impl Endpoints {
    pub fn delete_price_url(&self, id: &str) -> String {
        let path = self
            .delete_price
            .replace("{id}", &urlencoding::encode(id));
        format!("{}{}", self.api_base, path)
    }

    pub fn public_prices_url(&self) -> String {
        format!("{}{}", self.api_base, self.public_prices)
    }
}

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub confirm_delete: String,
    pub delete_failed: String,
    pub loading: String,
    pub unavailable: String,
    pub empty: String,
    /// `{n}` is replaced by the item count
    pub item_count: String,
    pub load_failed: String,
    pub currency: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            confirm_delete: "Supprimer ce prix ?".to_string(),
            delete_failed: "Erreur suppression.".to_string(),
            loading: "Chargement…".to_string(),
            unavailable: "Service indisponible.".to_string(),
            empty: "Aucun prix public.".to_string(),
            item_count: "{n} item(s)".to_string(),
            load_failed: "Erreur de chargement.".to_string(),
            currency: "€".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses an override document; absent keys keep their defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Defaults merged with an optional override document.
    /// A blank or invalid document falls back to the defaults.
    pub fn with_overrides(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
            log::info!("Using default page configuration");
            return Self::default();
        };

        match Self::from_json(raw) {
            Ok(config) => {
                log::info!("Loaded page configuration from #{}", CONFIG_ELEMENT_ID);
                let invalid = config.markers.invalid_values();
                if !invalid.is_empty() {
                    log::warn!("markers are not valid CSS identifiers and will never match: {:?}", invalid);
                }
                config
            }
            Err(e) => {
                log::warn!("Invalid #{} block, using defaults: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}

/// Reads the configuration of the current document
pub fn load_config() -> PageConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    PageConfig::with_overrides(raw.as_deref())
}
