use crate::domain::PageLink;
use maud::{html, Markup};

const BTN: &str = "px-3 py-2 rounded";
const BTN_ACTIVE: &str = "bg-blue-600 text-white";
const BTN_IDLE: &str = "bg-gray-200 hover:bg-gray-300";
const BTN_NAV: &str = "bg-blue-600 text-white hover:bg-blue-700";
const BTN_DISABLED: &str = "bg-gray-200 text-gray-400 cursor-not-allowed";

fn page_button(target: Option<u32>, label: &str, classes: &str) -> Markup {
    html! {
        button
            class={(BTN) " " (classes)}
            disabled[target.is_none()]
            hx-get=[target.map(|page| format!("/listings/page?page={page}"))]
            hx-target="#results"
            hx-swap="outerHTML show:window:top"
        { (label) }
    }
}

pub fn pagination(links: &[PageLink]) -> Markup {
    html! {
        div id="pagination" {
            @if !links.is_empty() {
                div class="flex justify-center items-center gap-2 mt-6" {
                    @for link in links {
                        @match *link {
                            PageLink::Previous(target) => {
                                (page_button(target, "Prev", if target.is_some() { BTN_NAV } else { BTN_DISABLED }))
                            }
                            PageLink::Next(target) => {
                                (page_button(target, "Next", if target.is_some() { BTN_NAV } else { BTN_DISABLED }))
                            }
                            PageLink::Page { number, active } => {
                                (page_button(
                                    Some(number),
                                    &number.to_string(),
                                    if active { BTN_ACTIVE } else { BTN_IDLE },
                                ))
                            }
                            PageLink::Ellipsis => {
                                span class="ellipsis px-2" { "..." }
                            }
                        }
                    }
                }
            }
        }
    }
}
