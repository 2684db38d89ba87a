//! Client-side routes, view effects, and delayed-navigation scheduling.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Client routes. The root path redirects to [`Route::Login`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Restaurants,
    NewRestaurant,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Restaurants => "/restaurant",
            Route::NewRestaurant => "/restaurant/new",
        }
    }
}

/// Side effects a view transition asks its host to perform. Views mutate
/// their own state directly; anything that outlives the transition (moving
/// between views, timed banner clearing, a blocking alert) comes back as a
/// value so the host stays in charge of scheduling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Navigate(Route),
    NavigateAfter(Route, Duration),
    ClearSuccessAfter(Duration),
    Alert(String),
}

/// Delay before redirecting an unauthenticated session to the login view.
pub const SESSION_REDIRECT_DELAY: Duration = Duration::from_secs(2);
/// Delay between a successful registration and the move to the login view.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay between a successful creation and the move back to the list view.
pub const CREATE_REDIRECT_DELAY: Duration = Duration::from_secs(2);
/// How long delete/update success banners stay on screen.
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);

/// Runs delayed navigations on behalf of a view so that tearing the view
/// down aborts anything still pending instead of firing against a view that
/// no longer exists.
#[derive(Debug)]
pub struct NavigationScheduler {
    tx: UnboundedSender<Route>,
    rx: UnboundedReceiver<Route>,
    pending: Option<JoinHandle<()>>,
}

impl NavigationScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            pending: None,
        }
    }

    /// Schedules a navigation, replacing any navigation still pending.
    pub fn schedule(&mut self, route: Route, delay: Duration) {
        self.cancel();
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(route);
        }));
    }

    /// Aborts the pending navigation, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    /// Resolves once a scheduled navigation fires. Pends forever while
    /// nothing is scheduled, which makes it safe to poll inside `select!`.
    pub async fn fired(&mut self) -> Route {
        match self.rx.recv().await {
            Some(route) => route,
            // Unreachable while `self.tx` is alive; never resolve.
            None => std::future::pending().await,
        }
    }
}

impl Default for NavigationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NavigationScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}
