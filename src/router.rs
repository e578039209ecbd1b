use crate::app::App;
use crate::browser::{
    lock_state, run_fetch, session_cookie, set_cookie_value, BrowserState, FetchOutcome,
    FetchTrigger, Session,
};
use crate::domain::FilterForm;
use crate::errors::ServerError;
use crate::responses::{html_response, no_content, static_file, text_response, ResultResp};
use crate::templates::components::{carousel, listing_modal, modal_root, results, ResultsView};
use crate::templates::pages::{browser_panel, home_page};
use crate::views::{listing_view::escaped_images, ListingDetailVm};
use astra::{Request, Response};
use maud::Markup;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    // Routes that do not touch browser state.
    match (method, path) {
        ("GET", "/health") => return text_response("ok"),
        ("GET", p) if p.starts_with("/static/") => {
            return static_file(&app.config.static_dir, &p["/static/".len()..]);
        }
        _ => {}
    }

    let token = req
        .headers()
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .and_then(session_cookie);
    let session = app.sessions.resolve(token)?;
    let state = &*session.state;
    let params = parse_query(&req);

    let resp = match (method, path) {
        ("GET", "/") => home(app, state),
        ("GET", "/listings") => apply_filters(app, state, &params),
        ("GET", "/listings/page") => go_to_page(app, state, &params),
        ("GET", "/filters/clear") => clear_filters(app, state),
        ("GET", "/modal/close") => close_modal(state),
        ("GET", "/modal/carousel") => scroll_carousel(state, &params),
        ("GET", p) if p.starts_with("/listings/") => {
            let index = p["/listings/".len()..]
                .parse::<usize>()
                .map_err(|_| ServerError::NotFound)?;
            open_modal(app, state, index)
        }
        _ => Err(ServerError::NotFound),
    }?;

    if session.is_new {
        with_session_cookie(resp, &session)
    } else {
        Ok(resp)
    }
}

fn with_session_cookie(mut resp: Response, session: &Session) -> ResultResp {
    let value = set_cookie_value(&session.id)
        .parse()
        .map_err(|_| ServerError::InternalError)?;
    resp.headers_mut().insert("set-cookie", value);
    Ok(resp)
}

fn results_for<'a>(state: &'a BrowserState, outcome: &FetchOutcome) -> ResultsView<'a> {
    match outcome {
        FetchOutcome::Failed(_) => ResultsView::Error,
        FetchOutcome::Applied | FetchOutcome::Stale => ResultsView::Listings(&state.store),
    }
}

/// Full page with the first page of results for default filters.
fn home(app: &App, state: &Mutex<BrowserState>) -> ResultResp {
    let page = run_fetch(state, &*app.api, FetchTrigger::Initial, |state, outcome| {
        home_page(&state.filters, results_for(state, outcome), &app.htmx_src)
    })?;

    match page {
        Some(markup) => html_response(markup),
        None => Err(ServerError::InternalError),
    }
}

/// Run a fetch whose fragment is only worth sending if this request is still the latest.
fn fetch_fragment<F>(
    app: &App,
    state: &Mutex<BrowserState>,
    trigger: FetchTrigger,
    render: F,
) -> ResultResp
where
    F: FnOnce(&BrowserState, &FetchOutcome) -> Markup,
{
    let fragment = run_fetch(state, &*app.api, trigger, |state, outcome| {
        match outcome {
            FetchOutcome::Stale => None,
            _ => Some(render(state, outcome)),
        }
    })?;

    match fragment.flatten() {
        Some(markup) => html_response(markup),
        None => no_content(),
    }
}

fn apply_filters(app: &App, state: &Mutex<BrowserState>, params: &HashMap<String, String>) -> ResultResp {
    let form = FilterForm::from_params(params);
    fetch_fragment(app, state, FetchTrigger::ApplyFilters(form), |state, outcome| {
        results(results_for(state, outcome))
    })
}

fn clear_filters(app: &App, state: &Mutex<BrowserState>) -> ResultResp {
    fetch_fragment(app, state, FetchTrigger::ClearFilters, |state, outcome| {
        browser_panel(&state.filters, results_for(state, outcome))
    })
}

fn go_to_page(app: &App, state: &Mutex<BrowserState>, params: &HashMap<String, String>) -> ResultResp {
    let page = match params.get("page").and_then(|p| p.parse::<u32>().ok()) {
        Some(page) => page,
        None => return no_content(),
    };

    fetch_fragment(app, state, FetchTrigger::GoToPage(page), |state, outcome| {
        results(results_for(state, outcome))
    })
}

fn open_modal(app: &App, state: &Mutex<BrowserState>, index: usize) -> ResultResp {
    let mut state = lock_state(state)?;

    let listing = match state.store.get(index) {
        Some(listing) => listing,
        None => return no_content(),
    };
    let vm = ListingDetailVm::new(index, listing, &app.config.marketplace_url);
    let image_count = listing.images.len();

    state.modal.open(index, image_count);
    match state.modal.carousel() {
        Some(carousel) => html_response(listing_modal(&vm, carousel)),
        None => Err(ServerError::InternalError),
    }
}

fn close_modal(state: &Mutex<BrowserState>) -> ResultResp {
    lock_state(state)?.modal.close();
    html_response(modal_root())
}

fn scroll_carousel(state: &Mutex<BrowserState>, params: &HashMap<String, String>) -> ResultResp {
    let direction = params
        .get("direction")
        .and_then(|d| d.parse::<i32>().ok())
        .ok_or_else(|| ServerError::BadRequest("direction must be -1 or 1".into()))?;

    let mut state = lock_state(state)?;
    if !state.modal.scroll_carousel(direction) {
        return no_content();
    }

    let index = state.modal.open_index();
    let listing = index.and_then(|i| state.store.get(i));
    match (listing, state.modal.carousel()) {
        (Some(listing), Some(state_carousel)) => {
            html_response(carousel(&escaped_images(listing), state_carousel))
        }
        _ => no_content(),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
