//! Response payloads for the restaurant endpoints.

use serde::Deserialize;

use crate::domain::restaurant::Restaurant;

/// One page of the paginated listing returned by `GET /api/restaurants`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPage {
    pub content: Vec<Restaurant>,
    #[serde(default)]
    pub total_pages: usize,
}
