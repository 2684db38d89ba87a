use serde_json::json;

use restaurant_admin::api::ApiError;
use restaurant_admin::navigation::{Effect, REGISTER_REDIRECT_DELAY, Route};
use restaurant_admin::views::{LoginView, RegisterView};

mod common;

use common::MockApi;

fn filled_login() -> LoginView {
    let mut view = LoginView::new();
    view.form.username = "alice".into();
    view.form.password = "secret".into();
    view
}

fn filled_register() -> RegisterView {
    let mut view = RegisterView::new();
    view.form.username = "alice".into();
    view.form.password = "secret".into();
    view.form.name = "Alice".into();
    view
}

#[tokio::test]
async fn login_success_navigates_to_list() {
    let mut api = MockApi::new();
    api.expect_login()
        .withf(|request| request.username == "alice" && request.password == "secret")
        .times(1)
        .returning(|_| Ok(()));

    let mut view = filled_login();
    let effect = view.submit(&api).await;

    assert_eq!(effect, Some(Effect::Navigate(Route::Restaurants)));
    assert!(view.error.is_none());
    assert!(!view.submitting);
}

#[tokio::test]
async fn login_failure_shows_string_body_verbatim() {
    let mut api = MockApi::new();
    api.expect_login().returning(|_| {
        Err(ApiError::from_status(401, json!("Bad credentials")))
    });

    let mut view = filled_login();
    let effect = view.submit(&api).await;

    assert!(effect.is_none());
    assert_eq!(view.error.as_deref(), Some("Bad credentials"));
    assert!(!view.submitting);
}

#[tokio::test]
async fn login_failure_joins_object_body_values() {
    let mut api = MockApi::new();
    api.expect_login().returning(|_| {
        Err(ApiError::from_status(
            400,
            json!({"password": "Password is too short", "username": "Username is mandatory"}),
        ))
    });

    let mut view = filled_login();
    view.submit(&api).await;

    assert_eq!(
        view.error.as_deref(),
        Some("Password is too short, Username is mandatory")
    );
}

#[tokio::test]
async fn login_transport_failure_uses_generic_message() {
    let mut api = MockApi::new();
    api.expect_login()
        .returning(|_| Err(ApiError::Transport("connection refused".into())));

    let mut view = filled_login();
    view.submit(&api).await;

    assert_eq!(view.error.as_deref(), Some("Login failed. Please try again."));
}

#[tokio::test]
async fn blank_login_never_calls_the_backend() {
    // No expectations: any call would panic the mock.
    let api = MockApi::new();

    let mut view = LoginView::new();
    let effect = view.submit(&api).await;

    assert!(effect.is_none());
    assert!(view.error.is_some());
}

#[tokio::test]
async fn google_success_navigates_to_list() {
    let mut api = MockApi::new();
    api.expect_google_login()
        .withf(|request| request.credential == "id-token")
        .times(1)
        .returning(|_| Ok(()));

    let mut view = LoginView::new();
    let effect = view.google_sign_in(&api, "id-token").await;

    assert_eq!(effect, Some(Effect::Navigate(Route::Restaurants)));
}

#[tokio::test]
async fn google_failure_raises_blocking_alert() {
    let mut api = MockApi::new();
    api.expect_google_login()
        .returning(|_| Err(ApiError::from_status(400, json!({"error": "invalid token"}))));

    let mut view = LoginView::new();
    let effect = view.google_sign_in(&api, "id-token").await;

    assert_eq!(
        effect,
        Some(Effect::Alert("Google login failed: invalid token".into()))
    );
}

#[tokio::test]
async fn register_success_schedules_login_redirect() {
    let mut api = MockApi::new();
    api.expect_signup()
        .withf(|request| {
            request.username == "alice" && request.password == "secret" && request.name == "Alice"
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut view = filled_register();
    let effect = view.submit(&api).await;

    assert_eq!(
        effect,
        Some(Effect::NavigateAfter(Route::Login, REGISTER_REDIRECT_DELAY))
    );
    assert_eq!(
        view.success.as_deref(),
        Some("Registration successful! Redirecting to login...")
    );
    assert!(view.error.is_none());
}

#[tokio::test]
async fn register_failure_shows_string_body_verbatim() {
    let mut api = MockApi::new();
    api.expect_signup().returning(|_| {
        Err(ApiError::from_status(
            400,
            json!("Error: Username is already taken!"),
        ))
    });

    let mut view = filled_register();
    let effect = view.submit(&api).await;

    assert!(effect.is_none());
    assert_eq!(
        view.error.as_deref(),
        Some("Error: Username is already taken!")
    );
    assert!(view.success.is_none());
}

#[tokio::test]
async fn register_failure_prefers_message_field() {
    let mut api = MockApi::new();
    api.expect_signup().returning(|_| {
        Err(ApiError::from_status(
            400,
            json!({"message": "Username is already taken", "status": 400}),
        ))
    });

    let mut view = filled_register();
    view.submit(&api).await;

    assert_eq!(view.error.as_deref(), Some("Username is already taken"));
}
