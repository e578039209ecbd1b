use crate::api::{ApiError, Listing, ListingsApi, ListingsPage, ListingsQuery};
use crate::app::App;
use crate::browser::{session_cookie, BrowserState, SESSION_COOKIE};
use crate::config::AppConfig;
use crate::errors::ResultResp;
use crate::router::handle;
use astra::{Body, Request, Response};
use serde_json::json;
use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};

/// Scripted stand-in for the listings API. Responses are served in order; once the
/// script runs out every call returns `fallback`.
#[derive(Default)]
pub struct FakeListingsApi {
    responses: Mutex<VecDeque<Result<ListingsPage, ApiError>>>,
    fallback: ListingsPage,
    queries: Mutex<Vec<ListingsQuery>>,
}

impl FakeListingsApi {
    pub fn serving(page: ListingsPage) -> Arc<Self> {
        Arc::new(Self {
            fallback: page,
            ..Default::default()
        })
    }

    pub fn then(self: &Arc<Self>, result: Result<ListingsPage, ApiError>) -> Arc<Self> {
        self.responses.lock().unwrap().push_back(result);
        Arc::clone(self)
    }

    pub fn queries(&self) -> Vec<ListingsQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn last_query(&self) -> ListingsQuery {
        self.queries().pop().expect("no request was made")
    }
}

impl ListingsApi for Arc<FakeListingsApi> {
    fn fetch_listings(&self, query: &ListingsQuery) -> Result<ListingsPage, ApiError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.responses.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.fallback.clone()),
        }
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        marketplace_url: "https://es.wallapop.com".to_string(),
        static_dir: std::env::temp_dir().join("listing_browser_static_missing"),
        ..AppConfig::default()
    }
}

pub fn make_app(api: &Arc<FakeListingsApi>) -> App {
    App::new(test_config(), Box::new(Arc::clone(api)))
}

/// A listing with every optional field filled in.
pub fn full_listing() -> Listing {
    serde_json::from_value(json!({
        "web_slug": "piso-centro-123",
        "property_type": "apartment",
        "title": "Piso luminoso en el centro",
        "description": "Reformado.\nCerca del metro.",
        "price": 650.0,
        "images": ["https://img.example/1.jpg", "https://img.example/2.jpg"],
        "reserved": true,
        "location": { "city": "Vigo", "postal_code": "36201", "latitude": 42.23 },
        "type_attributes": { "operation": "rent", "rooms": 3, "bathrooms": 2, "surface": 85.5 },
        "distance_km": 4.2,
        "modified_at": "2024-03-05T10:15:00.123456"
    }))
    .expect("full listing fixture")
}

/// A listing with nothing but a title and a price.
pub fn bare_listing() -> Listing {
    serde_json::from_value(json!({
        "property_type": "house",
        "title": "Casa",
        "price": 900,
        "images": [],
        "location": null,
        "type_attributes": null,
        "distance_km": null
    }))
    .expect("bare listing fixture")
}

pub fn titled_listing(title: &str) -> Listing {
    Listing {
        title: Some(title.to_string()),
        price: Some(500.0),
        ..bare_listing()
    }
}

pub fn page_of(listings: Vec<Listing>, total: u64, pages: u32) -> ListingsPage {
    ListingsPage {
        listings,
        total,
        pages,
    }
}

/// `count` plainly titled listings ("Anuncio 0", "Anuncio 1", ...).
pub fn numbered_page(count: usize, total: u64, pages: u32) -> ListingsPage {
    let listings = (0..count)
        .map(|i| titled_listing(&format!("Anuncio {i}")))
        .collect();
    page_of(listings, total, pages)
}

pub fn get(path: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.uri_mut() = path.parse().unwrap();
    req
}

pub fn get_with_cookie(path: &str, session: &str) -> Request {
    let mut req = get(path);
    req.headers_mut().insert(
        "cookie",
        format!("{SESSION_COOKIE}={session}").parse().unwrap(),
    );
    req
}

/// Session id issued by a response's `Set-Cookie` header.
pub fn issued_session(resp: &Response) -> Option<String> {
    let header = resp.headers().get("set-cookie")?.to_str().ok()?;
    let pair = header.split(';').next()?;
    session_cookie(pair).map(str::to_string)
}

/// One browser tab: sends its session cookie and keeps whatever the server issues.
pub struct TestClient<'a> {
    app: &'a App,
    session: Option<String>,
}

impl<'a> TestClient<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app, session: None }
    }

    /// Continue a session issued earlier.
    pub fn resume(app: &'a App, session: impl Into<String>) -> Self {
        Self {
            app,
            session: Some(session.into()),
        }
    }

    pub fn get(&mut self, path: &str) -> ResultResp {
        let req = match &self.session {
            Some(session) => get_with_cookie(path, session),
            None => get(path),
        };
        let resp = handle(req, self.app)?;
        if let Some(session) = issued_session(&resp) {
            self.session = Some(session);
        }
        Ok(resp)
    }

    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// Snapshot of this client's browser state.
    pub fn state(&self) -> BrowserState {
        let session = self.session.as_deref().expect("client has no session yet");
        let state = self.app.sessions.get(session).expect("session is gone");
        let snapshot = state.lock().unwrap().clone();
        snapshot
    }
}

pub fn body_string(mut resp: Response) -> String {
    let mut body = Vec::new();
    resp.body_mut().reader().read_to_end(&mut body).unwrap();
    String::from_utf8(body).unwrap()
}

pub fn network_error() -> ApiError {
    ApiError::Network("connection refused".into())
}
