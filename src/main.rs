//! Interactive terminal runner for the restaurant directory admin client.
//!
//! Drives the view state machines over stdin commands, one screen per
//! client route. Configuration comes from the environment (optionally via a
//! `.env` file): `API_BASE_URL` and, for federated login, `GOOGLE_CLIENT_ID`.

use std::process::ExitCode;

use config::Config;
use dotenvy::dotenv;
use tokio::io::{self, AsyncBufReadExt, BufReader, Lines, Stdin};

use restaurant_admin::api::SortKey;
use restaurant_admin::api::http::HttpApi;
use restaurant_admin::domain::restaurant::Restaurant;
use restaurant_admin::models::config::ClientConfig;
use restaurant_admin::navigation::{Effect, NavigationScheduler, Route};
use restaurant_admin::views::restaurants::RestaurantsView;
use restaurant_admin::views::{CreateView, LoginView, RegisterView};

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = match Config::builder()
        .add_source(config::Environment::default())
        .build()
    {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Failed to read configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let client_config = match settings.try_deserialize::<ClientConfig>() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Failed to parse configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    let api = match HttpApi::new(&client_config.api_base_url) {
        Ok(api) => api,
        Err(err) => {
            log::error!("Failed to set up the API client: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&api).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("Input error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(api: &HttpApi) -> io::Result<()> {
    let mut input = BufReader::new(io::stdin()).lines();
    let mut route = Route::Login;
    loop {
        let next = match route {
            Route::Login => login_screen(api, &mut input).await?,
            Route::Register => register_screen(api, &mut input).await?,
            Route::Restaurants => restaurants_screen(api, &mut input).await?,
            Route::NewRestaurant => create_screen(api, &mut input).await?,
        };
        match next {
            Some(next) => route = next,
            None => return Ok(()),
        }
    }
}

async fn login_screen(api: &HttpApi, input: &mut Input) -> io::Result<Option<Route>> {
    let mut view = LoginView::new();
    println!("== Login ==");
    println!("commands: login <username> <password> | google <credential> | register | quit");
    while let Some(line) = input.next_line().await? {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let effect = match parts.as_slice() {
            ["login", username, password] => {
                view.form.username = (*username).to_string();
                view.form.password = (*password).to_string();
                view.submit(api).await
            }
            ["google", credential] => view.google_sign_in(api, credential).await,
            ["register"] => return Ok(Some(Route::Register)),
            ["quit"] => return Ok(None),
            [] => None,
            _ => {
                println!("unknown command");
                None
            }
        };
        if let Some(error) = &view.error {
            println!("error: {error}");
        }
        match effect {
            Some(Effect::Navigate(route)) => return Ok(Some(route)),
            Some(Effect::Alert(message)) => println!("!! {message}"),
            _ => {}
        }
    }
    Ok(None)
}

async fn register_screen(api: &HttpApi, input: &mut Input) -> io::Result<Option<Route>> {
    let mut view = RegisterView::new();
    let mut scheduler = NavigationScheduler::new();
    println!("== Register ==");
    println!("commands: register <username> <password> <name...> | back | quit");
    loop {
        tokio::select! {
            route = scheduler.fired() => return Ok(Some(route)),
            line = input.next_line() => {
                let Some(line) = line? else { return Ok(None) };
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.as_slice() {
                    ["register", username, password, name @ ..] if !name.is_empty() => {
                        view.form.username = (*username).to_string();
                        view.form.password = (*password).to_string();
                        view.form.name = name.join(" ");
                        if let Some(Effect::NavigateAfter(route, delay)) = view.submit(api).await {
                            scheduler.schedule(route, delay);
                        }
                    }
                    ["back"] => return Ok(Some(Route::Login)),
                    ["quit"] => return Ok(None),
                    [] => {}
                    _ => println!("unknown command"),
                }
                if let Some(error) = &view.error {
                    println!("error: {error}");
                }
                if let Some(success) = &view.success {
                    println!("{success}");
                }
            }
        }
    }
}

async fn restaurants_screen(api: &HttpApi, input: &mut Input) -> io::Result<Option<Route>> {
    let mut view = RestaurantsView::new();
    let mut scheduler = NavigationScheduler::new();
    if let Some(Effect::NavigateAfter(route, delay)) = view.mount(api).await {
        if let Some(error) = &view.error {
            println!("error: {error}");
        }
        scheduler.schedule(route, delay);
    }
    render(&view);
    println!(
        "commands: list | page <n> | size <n> | sort <name|rating|location> | \
         find <name...> | near <location...> | clear | add | edit <row> | \
         set <field> <value...> | save | cancel | delete <row> | logout | quit"
    );
    loop {
        tokio::select! {
            route = scheduler.fired() => return Ok(Some(route)),
            line = input.next_line() => {
                let Some(line) = line? else { return Ok(None) };
                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts.as_slice() {
                    ["list"] => {}
                    ["page", n] => {
                        if let Ok(page) = n.parse() {
                            view.set_page(api, page).await;
                        }
                    }
                    ["size", n] => {
                        if let Ok(page_size) = n.parse() {
                            view.set_page_size(api, page_size).await;
                        }
                    }
                    ["sort", key] => match SortKey::parse(key) {
                        Some(sort_by) => view.set_sort(api, sort_by).await,
                        None => println!("unknown sort key"),
                    },
                    ["find", name @ ..] => {
                        view.name_query = name.join(" ");
                        view.search_by_name(api).await;
                    }
                    ["near", location @ ..] => {
                        view.location_query = location.join(" ");
                        view.search_by_location(api).await;
                    }
                    ["clear"] => view.clear_search(api).await,
                    ["add"] if view.actions_enabled() => return Ok(Some(Route::NewRestaurant)),
                    ["edit", n] if view.actions_enabled() => match row(&view, n) {
                        Some(record) => view.begin_edit(&record),
                        None => println!("no such row"),
                    },
                    ["set", "name", value @ ..] => {
                        if let Some(draft) = view.edit.as_mut() {
                            draft.name = value.join(" ");
                        }
                    }
                    ["set", "rating", value] => {
                        if let Some(draft) = view.edit.as_mut() {
                            draft.rating = (*value).to_string();
                        }
                    }
                    ["set", "location", value @ ..] => {
                        if let Some(draft) = view.edit.as_mut() {
                            draft.location = value.join(" ");
                        }
                    }
                    ["save"] => {
                        let _ = view.save_edit(api).await;
                    }
                    ["cancel"] => view.cancel_edit(),
                    ["delete", n] if view.actions_enabled() => match row(&view, n) {
                        Some(record) => {
                            println!("Delete \"{}\"? (y/n)", record.name);
                            if let Some(answer) = input.next_line().await? {
                                if answer.trim().eq_ignore_ascii_case("y") {
                                    let _ = view.delete(api, record.id).await;
                                }
                            }
                        }
                        None => println!("no such row"),
                    },
                    ["logout"] => {
                        if let Effect::Navigate(route) = view.logout(api).await {
                            return Ok(Some(route));
                        }
                    }
                    ["quit"] => return Ok(None),
                    [] => {}
                    _ => println!("unknown command"),
                }
                render(&view);
                // Console output is already transient; drop the banner now
                // rather than keeping a timer per ClearSuccessAfter.
                view.success = None;
            }
        }
    }
}

async fn create_screen(api: &HttpApi, input: &mut Input) -> io::Result<Option<Route>> {
    let mut view = CreateView::new();
    let mut scheduler = NavigationScheduler::new();
    println!("== Add Restaurant ==");
    println!("commands: create <name>;<rating>;<location> | back | quit");
    loop {
        tokio::select! {
            route = scheduler.fired() => return Ok(Some(route)),
            line = input.next_line() => {
                let Some(line) = line? else { return Ok(None) };
                let line = line.trim();
                if line == "back" {
                    return Ok(Some(Route::Restaurants));
                }
                if line == "quit" {
                    return Ok(None);
                }
                if let Some(rest) = line.strip_prefix("create ") {
                    let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
                    match fields.as_slice() {
                        [name, rating, location] => {
                            view.form.name = (*name).to_string();
                            view.form.rating = (*rating).to_string();
                            view.form.location = (*location).to_string();
                            if let Some(Effect::NavigateAfter(route, delay)) =
                                view.submit(api).await
                            {
                                scheduler.schedule(route, delay);
                            }
                        }
                        _ => println!("expected: create <name>;<rating>;<location>"),
                    }
                } else if !line.is_empty() {
                    println!("unknown command");
                }
                if let Some(error) = &view.error {
                    println!("error: {error}");
                }
                if let Some(success) = &view.success {
                    println!("{success}");
                }
            }
        }
    }
}

fn row(view: &RestaurantsView, arg: &str) -> Option<Restaurant> {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| view.restaurants.get(index).cloned())
}

fn render(view: &RestaurantsView) {
    if let Some(user) = &view.user {
        let badge = if view.is_admin() { " [ADMIN]" } else { "" };
        println!("Welcome, {} ({}){badge}", user.name, user.username);
    }
    if let Some(error) = &view.error {
        println!("error: {error}");
    }
    if let Some(success) = &view.success {
        println!("{success}");
    }
    if view.restaurants.is_empty() {
        println!("{}", view.empty_message());
        return;
    }
    println!("{:<4} {:<30} {:>6}  {}", "#", "Name", "Rating", "Location");
    for (index, record) in view.restaurants.iter().enumerate() {
        let marker = match &view.edit {
            Some(draft) if draft.id == record.id => "*",
            _ => " ",
        };
        println!(
            "{marker}{:<3} {:<30} {:>6.1}  {}",
            index + 1,
            record.name,
            record.rating,
            record.location
        );
    }
    if let Some(draft) = &view.edit {
        println!(
            "editing: name=\"{}\" rating=\"{}\" location=\"{}\"",
            draft.name, draft.rating, draft.location
        );
    }
    println!(
        "page {} of {} (size {}, sort {})",
        view.page.page + 1,
        view.page.total_pages.max(1),
        view.page.page_size,
        view.page.sort_by.as_str()
    );
}
