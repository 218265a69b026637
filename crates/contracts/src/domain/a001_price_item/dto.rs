use serde::{Deserialize, Serialize};

/// Answer of `DELETE /prices/{id}`
///
/// The backend answers `{"ok": true}` on success and
/// `{"ok": false, "error": "Not found"}` (404) when the item is missing or
/// belongs to another group. Both fields are optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePriceResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
}
