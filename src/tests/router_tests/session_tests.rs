// src/tests/router_tests/session_tests.rs

use crate::app::App;
use crate::browser::Sessions;
use crate::router::handle;
use crate::tests::utils::{
    get, get_with_cookie, issued_session, make_app, numbered_page, test_config, FakeListingsApi,
    TestClient,
};
use std::sync::Arc;
use std::time::Duration;

#[test]
fn first_visit_issues_session_cookie() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);

    let resp = handle(get("/"), &app)?;
    let header = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(header.starts_with("session="));
    assert!(header.contains("HttpOnly"));
    assert!(header.contains("Path=/"));

    let session = issued_session(&resp).expect("session id");
    let again = handle(get_with_cookie("/", &session), &app)?;
    assert!(issued_session(&again).is_none());
    assert_eq!(app.sessions.len(), 1);
    Ok(())
}

#[test]
fn each_client_keeps_its_own_filters() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);
    let mut alice = TestClient::new(&app);
    let mut bob = TestClient::new(&app);

    alice.get("/listings?min_price=500")?;
    bob.get("/")?;
    assert_ne!(alice.session(), bob.session());

    alice.get("/listings/page?page=2")?;
    let query = api.last_query();
    assert_eq!(query.page, 2);
    assert_eq!(query.filters.get("min_price"), Some("500"));

    assert_eq!(alice.state().filters.min_price.as_deref(), Some("500"));
    assert_eq!(bob.state().filters.min_price, None);
    assert_eq!(bob.state().store.current_page, 1);
    Ok(())
}

#[test]
fn page_counts_are_checked_per_session() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3))
        .then(Ok(numbered_page(20, 60, 3)))
        .then(Ok(numbered_page(1, 1, 1)));
    let app = make_app(&api);
    let mut alice = TestClient::new(&app);
    let mut bob = TestClient::new(&app);

    alice.get("/")?;
    bob.get("/listings?min_price=99999")?;

    assert_eq!(bob.get("/listings/page?page=3")?.status(), 204);
    assert_eq!(alice.get("/listings/page?page=3")?.status(), 200);
    Ok(())
}

#[test]
fn unknown_cookie_starts_a_fresh_session() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);

    let resp = handle(get_with_cookie("/", "forged"), &app)?;
    let session = issued_session(&resp).expect("new session");
    assert_ne!(session, "forged");
    assert!(app.sessions.get("forged").is_none());
    Ok(())
}

#[test]
fn least_recently_used_session_is_evicted() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = App::new(
        crate::config::AppConfig {
            max_sessions: 2,
            ..test_config()
        },
        Box::new(Arc::clone(&api)),
    );
    let mut first = TestClient::new(&app);
    let mut second = TestClient::new(&app);
    let mut third = TestClient::new(&app);

    first.get("/")?;
    second.get("/")?;
    first.get("/listings?min_rooms=2")?;
    third.get("/")?;

    assert_eq!(app.sessions.len(), 2);
    assert!(app.sessions.get(second.session().unwrap_or_default()).is_none());
    assert!(app.sessions.get(first.session().unwrap_or_default()).is_some());
    Ok(())
}

#[test]
fn idle_sessions_expire() -> Result<(), Box<dyn std::error::Error>> {
    let sessions = Sessions::new(10, Duration::ZERO);
    let first = sessions.resolve(None)?;
    std::thread::sleep(Duration::from_millis(5));

    let again = sessions.resolve(Some(&first.id))?;
    assert!(again.is_new);
    assert_ne!(again.id, first.id);
    assert_eq!(sessions.len(), 1);
    Ok(())
}

#[test]
fn session_cookie_is_found_among_others() {
    use crate::browser::session_cookie;

    assert_eq!(session_cookie("theme=dark; session=abc123; lang=es"), Some("abc123"));
    assert_eq!(session_cookie("session="), None);
    assert_eq!(session_cookie("sessions=abc"), None);
    assert_eq!(session_cookie(""), None);
}
