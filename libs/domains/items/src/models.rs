use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A priced catalog entry.
///
/// This is both the stored entity and the request body for create and
/// update: updates replace the whole item, so there is no separate
/// partial-update DTO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Item name (non-empty by convention, not enforced)
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Offer flag; absent serializes as `null`
    #[serde(default)]
    pub is_offer: Option<bool>,
}

/// An [`Item`] paired with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemRecord {
    pub id: i64,
    pub item: Item,
}

/// Query parameters for fetching a single item
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ItemQuery {
    /// Free-form query string, echoed back in the response
    pub q: Option<String>,
}

/// Response body for a successful create
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemCreated {
    /// Identifier assigned by the store
    pub id: i64,
    pub data: Item,
}

/// Response body for fetching a single item
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDetail {
    pub item_id: i64,
    /// The `q` query parameter, echoed back (`null` when absent)
    pub q: Option<String>,
    pub data: Item,
}

/// Response body for a successful update
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemUpdated {
    pub message: String,
    pub id: i64,
    pub data: Item,
}

/// Response body for a successful delete
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDeleted {
    pub message: String,
    pub id: i64,
}
