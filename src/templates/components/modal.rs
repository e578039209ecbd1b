use crate::domain::Carousel;
use crate::templates::components::carousel;
use crate::views::ListingDetailVm;
use maud::{html, Markup};

/// Closed modal: an empty, hidden mount point.
pub fn modal_root() -> Markup {
    html! {
        div id="modal" class="hidden" {}
    }
}

/// Detail view of one listing. While this is mounted the page body does not scroll;
/// swapping it back to [`modal_root`] removes the lock with it.
pub fn listing_modal(vm: &ListingDetailVm, state: &Carousel) -> Markup {
    html! {
        div
            id="modal"
            class="fixed inset-0 bg-black/60 z-50 flex items-center justify-center p-4"
            hx-get="/modal/close"
            hx-trigger="click[target.id=='modal'], keyup[key=='Escape'] from:body"
            hx-swap="outerHTML"
        {
            style class="scroll-lock" { "body { overflow: hidden; }" }
            div id="modal-content" class="bg-white rounded-lg max-w-3xl w-full max-h-[90vh] overflow-y-auto" data-index=(vm.index) {
                div class="relative" {
                    (carousel(&vm.images, state))
                    button
                        class="modal-close absolute top-2 right-2 bg-white/90 rounded-full w-10 h-10 shadow hover:bg-white text-xl flex items-center justify-center"
                        hx-get="/modal/close"
                        hx-target="#modal"
                        hx-swap="outerHTML"
                    { "X" }
                }

                div class="p-6" {
                    div class="flex flex-wrap items-start justify-between gap-4 mb-4" {
                        div {
                            span class={"type-badge inline-block text-sm font-medium px-2 py-1 rounded mb-2 " (vm.badge.classes)} {
                                (vm.badge.label)
                            }
                            @if vm.reserved {
                                span class="reserved-badge inline-block bg-yellow-400 text-gray-900 text-sm font-medium px-2 py-1 rounded mb-2 ml-2" {
                                    "Reservado"
                                }
                            }
                            h2 class="text-xl font-bold text-gray-800" { (vm.title) }
                        }
                        p class="price text-3xl font-bold text-blue-600" {
                            (vm.price) "€" span class="text-base font-normal text-gray-500" { "/mes" }
                        }
                    }

                    @if !vm.facts.is_empty() {
                        div class="facts grid grid-cols-2 md:grid-cols-4 gap-4 mb-6 p-4 bg-gray-50 rounded-lg" {
                            @for fact in &vm.facts {
                                div class="fact text-center" {
                                    p class="text-2xl font-bold" { (fact.value) }
                                    p class="text-sm text-gray-500" { (fact.caption) }
                                }
                            }
                        }
                    }

                    @if let Some(description) = &vm.description {
                        div class="description mb-6" {
                            h3 class="font-semibold mb-2" { "Descripcion" }
                            p class="text-gray-600 whitespace-pre-line" { (description) }
                        }
                    }

                    @if let Some(location) = &vm.location {
                        div class="location mb-6" {
                            h3 class="font-semibold mb-2" { "Ubicacion" }
                            p class="text-gray-600" { (location) }
                        }
                    }

                    @if let Some(updated) = &vm.updated_on {
                        p class="updated text-sm text-gray-400 mb-6" { "Actualizado: " (updated) }
                    }

                    @match &vm.item_url {
                        Some(url) => {
                            a
                                class="item-link block w-full bg-blue-600 text-white text-center rounded-lg px-4 py-3 font-medium hover:bg-blue-700 transition"
                                href=(url)
                                target="_blank"
                                rel="noopener noreferrer"
                            { "Ver en Wallapop ->" }
                        }
                        None => {
                            a
                                class="item-link disabled block w-full bg-gray-300 text-gray-500 text-center rounded-lg px-4 py-3 font-medium cursor-not-allowed"
                                href="#"
                                aria-disabled="true"
                            { "Ver en Wallapop ->" }
                        }
                    }
                }
            }
        }
    }
}
