//! `reqwest`-backed implementation of the API traits.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde_json::Value;
use uuid::Uuid;

use crate::api::errors::{ApiError, ApiResult};
use crate::api::{AuthApi, ListQuery, RestaurantApi};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::user::User;
use crate::dto::auth::{GoogleAuthRequest, LoginRequest, SignupRequest};
use crate::dto::restaurant::RestaurantPage;

/// Pre-configured HTTP client for the backend. The cookie store carries the
/// session cookie across calls; there are no retries and no interceptors
/// beyond credential attachment.
pub struct HttpApi {
    http: Client,
    base_url: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::Transport(format!("invalid base url: {err}")))?;
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self { http, base_url })
    }

    /// Joins path segments onto the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Transport("base url cannot carry a path".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Rejects non-2xx responses, keeping the decoded body for the caller.
    async fn accept(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::String(text));
        Err(ApiError::from_status(status.as_u16(), body))
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> ApiResult<()> {
        let url = self.endpoint(&["api", "auth", "login"])?;
        Self::accept(self.http.post(url).json(request).send().await?).await?;
        Ok(())
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<()> {
        let url = self.endpoint(&["api", "auth", "signup"])?;
        Self::accept(self.http.post(url).json(request).send().await?).await?;
        Ok(())
    }

    async fn google_login(&self, request: &GoogleAuthRequest) -> ApiResult<()> {
        let url = self.endpoint(&["api", "auth", "google"])?;
        Self::accept(self.http.post(url).json(request).send().await?).await?;
        Ok(())
    }

    async fn logout(&self) -> ApiResult<()> {
        let url = self.endpoint(&["api", "auth", "logout"])?;
        Self::accept(self.http.post(url).send().await?).await?;
        Ok(())
    }

    async fn current_user(&self) -> ApiResult<User> {
        let url = self.endpoint(&["api", "auth", "me"])?;
        let response = Self::accept(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl RestaurantApi for HttpApi {
    async fn list(&self, query: &ListQuery) -> ApiResult<RestaurantPage> {
        let url = self.endpoint(&["api", "restaurants"])?;
        let response = self
            .http
            .get(url)
            .query(&[
                ("offset", query.offset.to_string()),
                ("pageSize", query.page_size.to_string()),
                ("sortBy", query.sort_by.as_str().to_string()),
            ])
            .send()
            .await?;
        Ok(Self::accept(response).await?.json().await?)
    }

    async fn find_by_name(&self, name: &str) -> ApiResult<Restaurant> {
        let url = self.endpoint(&["api", "restaurants", "name", name])?;
        let response = Self::accept(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn find_by_location(&self, location: &str) -> ApiResult<Vec<Restaurant>> {
        let url = self.endpoint(&["api", "restaurants", "location", location])?;
        let response = Self::accept(self.http.get(url).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, restaurant: &NewRestaurant) -> ApiResult<Restaurant> {
        let url = self.endpoint(&["api", "restaurants"])?;
        let response = Self::accept(self.http.post(url).json(restaurant).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, restaurant: &UpdateRestaurant) -> ApiResult<Restaurant> {
        let url = self.endpoint(&["api", "restaurants"])?;
        let response = Self::accept(self.http.put(url).json(restaurant).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: Uuid) -> ApiResult<()> {
        let id = id.to_string();
        let url = self.endpoint(&["api", "restaurants", id.as_str()])?;
        Self::accept(self.http.delete(url).send().await?).await?;
        Ok(())
    }
}
