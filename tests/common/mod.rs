//! Mock API implementations and fixtures for isolating views in tests.

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use restaurant_admin::api::{ApiResult, AuthApi, ListQuery, RestaurantApi};
use restaurant_admin::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use restaurant_admin::domain::user::{Role, User};
use restaurant_admin::dto::auth::{GoogleAuthRequest, LoginRequest, SignupRequest};
use restaurant_admin::dto::restaurant::RestaurantPage;

mock! {
    pub Api {}

    #[async_trait]
    impl AuthApi for Api {
        async fn login(&self, request: &LoginRequest) -> ApiResult<()>;
        async fn signup(&self, request: &SignupRequest) -> ApiResult<()>;
        async fn google_login(&self, request: &GoogleAuthRequest) -> ApiResult<()>;
        async fn logout(&self) -> ApiResult<()>;
        async fn current_user(&self) -> ApiResult<User>;
    }

    #[async_trait]
    impl RestaurantApi for Api {
        async fn list(&self, query: &ListQuery) -> ApiResult<RestaurantPage>;
        async fn find_by_name(&self, name: &str) -> ApiResult<Restaurant>;
        async fn find_by_location(&self, location: &str) -> ApiResult<Vec<Restaurant>>;
        async fn create(&self, restaurant: &NewRestaurant) -> ApiResult<Restaurant>;
        async fn update(&self, restaurant: &UpdateRestaurant) -> ApiResult<Restaurant>;
        async fn delete(&self, id: Uuid) -> ApiResult<()>;
    }
}

pub fn admin() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Admin".into(),
        username: "admin".into(),
        role: Role::Admin,
    }
}

pub fn member() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Member".into(),
        username: "member".into(),
        role: Role::Member,
    }
}

pub fn restaurant(name: &str) -> Restaurant {
    Restaurant {
        id: Uuid::new_v4(),
        name: name.into(),
        rating: 4.0,
        location: "Bangkok".into(),
        created_at: None,
        updated_at: None,
    }
}

pub fn page(content: Vec<Restaurant>, total_pages: usize) -> RestaurantPage {
    RestaurantPage {
        content,
        total_pages,
    }
}
