// src/tests/router_tests/listings_tests.rs

use crate::errors::ServerError;
use crate::tests::utils::{
    body_string, full_listing, issued_session, make_app, network_error, numbered_page, page_of,
    FakeListingsApi, TestClient,
};

#[test]
fn home_page_loads_first_page() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(page_of(vec![full_listing()], 1, 1));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    let resp = client.get("/")?;
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Piso luminoso en el centro"));
    assert!(body.contains("1 resultados encontrados"));
    assert!(body.contains(r#"id="filters""#));
    assert!(body.contains(r#"id="modal""#));

    let query = api.last_query();
    assert_eq!(query.page, 1);
    assert_eq!(query.filters.get("sort_by"), Some("price"));
    assert!(!query.filters.contains_key("max_distance"));
    Ok(())
}

#[test]
fn home_page_survives_api_failure() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(1, 1, 1)).then(Err(network_error()));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    let resp = client.get("/")?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Error al cargar los anuncios"));
    assert!(body.contains(r#"id="filters""#));
    Ok(())
}

#[test]
fn apply_filters_serializes_form() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(2, 2, 1));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    let resp = client.get(
        "/listings?property_type=house&min_price=500&max_price=&max_distance=40&sort=date-desc",
    )?;
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.starts_with(r#"<div id="results">"#));
    assert!(body.contains("2 resultados encontrados"));

    let query = api.last_query();
    assert_eq!(query.page, 1);
    assert_eq!(query.filters.get("property_type"), Some("house"));
    assert_eq!(query.filters.get("min_price"), Some("500"));
    assert!(!query.filters.contains_key("max_price"));
    assert!(!query.filters.contains_key("max_distance"));
    assert_eq!(query.filters.get("sort_by"), Some("date"));
    assert_eq!(query.filters.get("sort_order"), Some("desc"));

    let wire = query.to_query_string();
    assert!(wire.ends_with("&page=1&page_size=20"));
    Ok(())
}

#[test]
fn failed_apply_renders_inline_error() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);
    client.get("/")?;

    api.then(Err(network_error()));
    let body = body_string(client.get("/listings?min_price=100")?);

    assert!(body.contains("Error al cargar los anuncios"));
    assert!(!body.contains("listing-card"));
    // The previous page is still what the store holds.
    assert_eq!(client.state().store.total, 60);
    Ok(())
}

#[test]
fn page_navigation_keeps_filters() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    client.get("/listings?min_rooms=2&sort=price-desc")?;
    let resp = client.get("/listings/page?page=2")?;
    assert_eq!(resp.status(), 200);

    let query = api.last_query();
    assert_eq!(query.page, 2);
    assert_eq!(query.filters.get("min_rooms"), Some("2"));
    assert_eq!(query.filters.get("sort_order"), Some("desc"));
    assert_eq!(client.state().store.current_page, 2);
    Ok(())
}

#[test]
fn page_navigation_outside_range_is_noop() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);
    client.get("/")?;
    let calls = api.queries().len();

    for path in ["/listings/page?page=0", "/listings/page?page=4", "/listings/page?page=abc"] {
        let resp = client.get(path)?;
        assert_eq!(resp.status(), 204, "{path}");
    }

    assert_eq!(api.queries().len(), calls);
    assert_eq!(client.state().store.current_page, 1);
    Ok(())
}

#[test]
fn clear_filters_resets_form_and_reloads() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(20, 60, 3));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    client.get("/listings?min_price=900&max_distance=10&sort=distance-asc")?;
    client.get("/listings/page?page=3")?;

    let body = body_string(client.get("/filters/clear")?);
    assert!(body.contains(r#"id="filters""#));
    assert!(body.contains(r#"id="results""#));
    assert!(!body.contains(r#"value="900""#));

    let cleared = api.last_query();
    assert_eq!(cleared.page, 1);
    assert_eq!(cleared.filters.keys().collect::<Vec<_>>(), vec!["sort_by", "sort_order"]);

    client.get("/filters/clear")?;
    assert_eq!(api.last_query(), cleared);
    Ok(())
}

#[test]
fn unknown_route_is_not_found() {
    let api = FakeListingsApi::serving(numbered_page(0, 0, 0));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    match client.get("/nope") {
        Err(ServerError::NotFound) => {}
        Err(other) => panic!("expected NotFound, got {other}"),
        Ok(resp) => panic!("expected NotFound, got HTTP {}", resp.status()),
    }
}

#[test]
fn health_check() -> Result<(), Box<dyn std::error::Error>> {
    let api = FakeListingsApi::serving(numbered_page(0, 0, 0));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    let resp = client.get("/health")?;
    assert_eq!(resp.status(), 200);
    assert!(issued_session(&resp).is_none());
    assert_eq!(body_string(resp), "ok");
    assert!(api.queries().is_empty());
    assert_eq!(app.sessions.len(), 0);
    Ok(())
}

#[test]
fn static_paths_cannot_escape_root() {
    let api = FakeListingsApi::serving(numbered_page(0, 0, 0));
    let app = make_app(&api);
    let mut client = TestClient::new(&app);

    for path in ["/static/../Cargo.toml", "/static/", "/static/missing.css"] {
        assert!(client.get(path).is_err(), "{path}");
    }
}
