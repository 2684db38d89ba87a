use log::error;
use uuid::Uuid;

use crate::api::{ApiError, AuthApi, DEFAULT_PAGE_SIZE, ListQuery, RestaurantApi, SortKey};
use crate::domain::restaurant::{Restaurant, UpdateRestaurant};
use crate::domain::user::User;
use crate::navigation::{Effect, Route, SESSION_REDIRECT_DELAY, SUCCESS_BANNER_TTL};

/// Exclusive selector for which listing strategy feeds the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    #[default]
    All,
    Name,
    Location,
}

/// Pagination bookkeeping for the "show all" listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Zero-based page index.
    pub page: usize,
    pub page_size: usize,
    pub sort_by: SortKey,
    /// Total page count as reported by the last fetch.
    pub total_pages: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortKey::Name,
            total_pages: 0,
        }
    }
}

/// In-progress field values for the one row currently in edit mode. The
/// rating stays text until save parses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: Uuid,
    pub name: String,
    pub rating: String,
    pub location: String,
}

impl EditDraft {
    pub fn from_record(record: &Restaurant) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            rating: record.rating.to_string(),
            location: record.location.clone(),
        }
    }
}

/// State for the restaurant list view: session, table contents, pagination,
/// search inputs, banners, and the inline edit draft.
#[derive(Debug, Default)]
pub struct RestaurantsView {
    pub user: Option<User>,
    pub restaurants: Vec<Restaurant>,
    pub page: PageState,
    pub mode: SearchMode,
    pub name_query: String,
    pub location_query: String,
    pub edit: Option<EditDraft>,
    pub error: Option<String>,
    pub success: Option<String>,
    pub loading: bool,
}

impl RestaurantsView {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Resolves the session, then loads the first page when it holds. An
    /// unauthenticated session schedules a redirect to the login view.
    pub async fn mount<A>(&mut self, api: &A) -> Option<Effect>
    where
        A: AuthApi + RestaurantApi + ?Sized,
    {
        self.loading = true;
        match api.current_user().await {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                error!("Failed to fetch user info: {err}");
                self.error = Some("Not authenticated. Redirecting to login...".to_string());
                self.loading = false;
                return Some(Effect::NavigateAfter(Route::Login, SESSION_REDIRECT_DELAY));
            }
        }
        self.fetch_page(api).await;
        self.loading = false;
        None
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }

    /// Whether the Actions column (edit/delete) and the creation entry point
    /// are rendered at all.
    pub fn actions_enabled(&self) -> bool {
        self.is_admin()
    }

    /// Message for an empty table; administrators get a creation hint.
    pub fn empty_message(&self) -> &'static str {
        if self.is_admin() {
            "No restaurants found. Click \"Add Restaurant\" to create one!"
        } else {
            "No restaurants found."
        }
    }

    /// Fetches the current page. A no-op outside "show all" mode, which is
    /// what suppresses re-fetches while a search result is on screen.
    pub async fn fetch_page<A>(&mut self, api: &A)
    where
        A: RestaurantApi + ?Sized,
    {
        if self.mode != SearchMode::All {
            return;
        }
        let query = ListQuery::new()
            .offset(self.page.page)
            .page_size(self.page.page_size)
            .sort_by(self.page.sort_by);
        match api.list(&query).await {
            Ok(page) => {
                self.restaurants = page.content;
                self.page.total_pages = page.total_pages;
            }
            Err(err) => {
                error!("Failed to fetch restaurants: {err}");
                self.error = Some("Failed to load restaurants".to_string());
            }
        }
    }

    /// Moves to another page and re-fetches.
    pub async fn set_page<A>(&mut self, api: &A, page: usize)
    where
        A: RestaurantApi + ?Sized,
    {
        self.page.page = page;
        self.fetch_page(api).await;
    }

    /// Changing the page size restarts pagination from the first page.
    pub async fn set_page_size<A>(&mut self, api: &A, page_size: usize)
    where
        A: RestaurantApi + ?Sized,
    {
        self.page.page_size = page_size;
        self.page.page = 0;
        self.fetch_page(api).await;
    }

    /// Changing the sort key restarts pagination from the first page.
    pub async fn set_sort<A>(&mut self, api: &A, sort_by: SortKey)
    where
        A: RestaurantApi + ?Sized,
    {
        self.page.sort_by = sort_by;
        self.page.page = 0;
        self.fetch_page(api).await;
    }

    /// Looks up a single record by its exact name and shows it as a
    /// one-element list. Blank input is rejected without a network call.
    pub async fn search_by_name<A>(&mut self, api: &A)
    where
        A: RestaurantApi + ?Sized,
    {
        let name = self.name_query.trim().to_string();
        if name.is_empty() {
            self.error = Some("Please enter a restaurant name".to_string());
            return;
        }
        self.error = None;
        self.success = None;
        self.mode = SearchMode::Name;
        match api.find_by_name(&name).await {
            Ok(record) => self.restaurants = vec![record],
            Err(ApiError::NotFound { .. }) => {
                self.restaurants.clear();
                self.error = Some(format!("No restaurant found with name \"{name}\""));
            }
            Err(err) => {
                error!("Failed to search restaurants: {err}");
                self.restaurants.clear();
                self.error = Some(err.display_message("Failed to search restaurants"));
            }
        }
    }

    /// Lists every record at a location. Blank input is rejected without a
    /// network call.
    pub async fn search_by_location<A>(&mut self, api: &A)
    where
        A: RestaurantApi + ?Sized,
    {
        let location = self.location_query.trim().to_string();
        if location.is_empty() {
            self.error = Some("Please enter a location".to_string());
            return;
        }
        self.error = None;
        self.success = None;
        self.mode = SearchMode::Location;
        match api.find_by_location(&location).await {
            Ok(records) => self.restaurants = records,
            Err(err) => {
                error!("Failed to search restaurants: {err}");
                self.restaurants.clear();
                self.error = Some(format!("No restaurants found in \"{location}\""));
            }
        }
    }

    /// Resets both search inputs and returns to the paginated listing from
    /// its first page.
    pub async fn clear_search<A>(&mut self, api: &A)
    where
        A: RestaurantApi + ?Sized,
    {
        self.name_query.clear();
        self.location_query.clear();
        self.mode = SearchMode::All;
        self.page.page = 0;
        self.error = None;
        self.fetch_page(api).await;
    }

    /// Deletes a record after the host has confirmed the action, then
    /// refreshes whatever listing is on screen. Success banners are
    /// transient; failures stay until the next action.
    pub async fn delete<A>(&mut self, api: &A, id: Uuid) -> Option<Effect>
    where
        A: RestaurantApi + ?Sized,
    {
        match api.delete(id).await {
            Ok(()) => {
                self.error = None;
                self.success = Some("Restaurant deleted successfully".to_string());
                self.refresh(api).await;
                Some(Effect::ClearSuccessAfter(SUCCESS_BANNER_TTL))
            }
            Err(err) => {
                error!("Failed to delete restaurant: {err}");
                self.error = Some(err.display_message("Failed to delete restaurant"));
                None
            }
        }
    }

    /// Captures the row's current values as the edit draft. Starting an edit
    /// on another row replaces the draft: at most one row is editable.
    pub fn begin_edit(&mut self, record: &Restaurant) {
        self.edit = Some(EditDraft::from_record(record));
    }

    /// Drops the draft without issuing a request.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Sends the draft as a full-record update. The only local check is that
    /// the rating text parses as a decimal; a parse failure keeps the row in
    /// edit mode.
    pub async fn save_edit<A>(&mut self, api: &A) -> Option<Effect>
    where
        A: RestaurantApi + ?Sized,
    {
        let draft = self.edit.clone()?;
        let rating: f64 = match draft.rating.trim().parse() {
            Ok(rating) => rating,
            Err(_) => {
                self.error = Some("Rating must be a number".to_string());
                return None;
            }
        };
        let update = UpdateRestaurant::new(draft.id, draft.name, rating, draft.location);
        match api.update(&update).await {
            Ok(_) => {
                self.error = None;
                self.success = Some("Restaurant updated successfully".to_string());
                self.edit = None;
                self.refresh(api).await;
                Some(Effect::ClearSuccessAfter(SUCCESS_BANNER_TTL))
            }
            Err(err) => {
                error!("Failed to update restaurant: {err}");
                self.error = Some(err.display_message("Failed to update restaurant"));
                None
            }
        }
    }

    /// Ends the session. Navigation wins even when the request fails: the
    /// client-side effect is authoritative.
    pub async fn logout<A>(&mut self, api: &A) -> Effect
    where
        A: AuthApi + ?Sized,
    {
        if let Err(err) = api.logout().await {
            error!("Logout failed: {err}");
        }
        Effect::Navigate(Route::Login)
    }

    /// Re-fetches in paginated mode. Outside it the mutated row may have
    /// been the sole search hit, so fall back to clear-search semantics.
    async fn refresh<A>(&mut self, api: &A)
    where
        A: RestaurantApi + ?Sized,
    {
        if self.mode == SearchMode::All {
            self.fetch_page(api).await;
        } else {
            self.clear_search(api).await;
        }
    }
}
