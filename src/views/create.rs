use log::{error, info};
use validator::Validate;

use crate::api::RestaurantApi;
use crate::forms::restaurant::RestaurantForm;
use crate::navigation::{CREATE_REDIRECT_DELAY, Effect, Route};

const CREATE_FALLBACK: &str = "Failed to create restaurant. Please try again.";

/// Form state for the restaurant creation view.
#[derive(Debug, Default)]
pub struct CreateView {
    pub form: RestaurantForm,
    pub error: Option<String>,
    pub success: Option<String>,
    pub submitting: bool,
}

impl CreateView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts the new record, converting the rating text to a number at
    /// submit time. Success shows a banner and schedules the move back to
    /// the list view.
    pub async fn submit<A>(&mut self, api: &A) -> Option<Effect>
    where
        A: RestaurantApi + ?Sized,
    {
        self.error = None;
        self.success = None;

        if self.form.validate().is_err() {
            self.error = Some("Name, rating and location are required.".to_string());
            return None;
        }
        let record = match self.form.to_new_restaurant() {
            Ok(record) => record,
            Err(_) => {
                self.error = Some("Rating must be a number.".to_string());
                return None;
            }
        };

        self.submitting = true;
        let result = api.create(&record).await;
        self.submitting = false;

        match result {
            Ok(created) => {
                info!("Restaurant created: {}", created.name);
                self.success = Some("Restaurant created successfully! Redirecting...".to_string());
                Some(Effect::NavigateAfter(
                    Route::Restaurants,
                    CREATE_REDIRECT_DELAY,
                ))
            }
            Err(err) => {
                error!("Create restaurant error: {err}");
                self.error = Some(err.display_message(CREATE_FALLBACK));
                None
            }
        }
    }
}
