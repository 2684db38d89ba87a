//! Typed access to the backend REST API.
//!
//! The traits are the seam the views depend on; [`http::HttpApi`] is the
//! production implementation, and tests substitute mocks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::user::User;
use crate::dto::auth::{GoogleAuthRequest, LoginRequest, SignupRequest};
use crate::dto::restaurant::RestaurantPage;

pub mod errors;
pub mod http;

pub use errors::{ApiError, ApiResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort key accepted by the paginated listing endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Name,
    Rating,
    Location,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Location => "location",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "rating" => Some(SortKey::Rating),
            "location" => Some(SortKey::Location),
            _ => None,
        }
    }
}

/// Parameters of a paginated listing request. The offset is a zero-based
/// page index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub offset: usize,
    pub page_size: usize,
    pub sort_by: SortKey,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortKey::Name,
        }
    }
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }
}

/// Session and account endpoints under `/api/auth`.
#[async_trait]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<()>;
    async fn signup(&self, request: &SignupRequest) -> ApiResult<()>;
    async fn google_login(&self, request: &GoogleAuthRequest) -> ApiResult<()>;
    async fn logout(&self) -> ApiResult<()>;
    async fn current_user(&self) -> ApiResult<User>;
}

/// Record endpoints under `/api/restaurants`.
#[async_trait]
pub trait RestaurantApi {
    async fn list(&self, query: &ListQuery) -> ApiResult<RestaurantPage>;
    async fn find_by_name(&self, name: &str) -> ApiResult<Restaurant>;
    async fn find_by_location(&self, location: &str) -> ApiResult<Vec<Restaurant>>;
    async fn create(&self, restaurant: &NewRestaurant) -> ApiResult<Restaurant>;
    async fn update(&self, restaurant: &UpdateRestaurant) -> ApiResult<Restaurant>;
    async fn delete(&self, id: Uuid) -> ApiResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults() {
        let query = ListQuery::new();
        assert_eq!(query.offset, 0);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(query.sort_by, SortKey::Name);
    }

    #[test]
    fn list_query_builder_chains() {
        let query = ListQuery::new()
            .offset(2)
            .page_size(25)
            .sort_by(SortKey::Rating);
        assert_eq!(query.offset, 2);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.sort_by, SortKey::Rating);
    }

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for key in [SortKey::Name, SortKey::Rating, SortKey::Location] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("cuisine"), None);
    }
}
