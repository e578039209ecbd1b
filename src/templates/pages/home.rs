// templates/pages/home.rs

use crate::domain::FilterForm;
use crate::templates::{
    components::{filter_form, results, ResultsView},
    desktop_layout,
};
use maud::{html, Markup};

/// Filter form plus results. "Clear filters" swaps this whole panel.
pub fn browser_panel(form: &FilterForm, view: ResultsView<'_>) -> Markup {
    html! {
        (filter_form(form))
        (results(view))
    }
}

pub fn home_page(form: &FilterForm, view: ResultsView<'_>, htmx_src: &str) -> Markup {
    desktop_layout(
        "Alquileres",
        htmx_src,
        html! {
            div id="browser" {
                (browser_panel(form, view))
            }
        },
    )
}
