use crate::browser::ListingStore;
use crate::domain::pagination::page_links;
use crate::templates::components::{listing_card, listings_error, pagination};
use crate::views::ListingCardVm;
use maud::{html, Markup};

/// What the results area should show after a fetch.
pub enum ResultsView<'a> {
    Listings(&'a ListingStore),
    Error,
}

/// Stats line, card grid (or empty state) and pagination, swapped as one unit.
pub fn results(view: ResultsView<'_>) -> Markup {
    html! {
        div id="results" {
            @match view {
                ResultsView::Listings(store) => {
                    p id="stat-total" class="text-gray-600 mb-4" {
                        (store.total) " resultados encontrados"
                    }
                    @if store.listings.is_empty() {
                        div id="empty-state" class="text-center py-12 text-gray-500" {
                            p { "No se encontraron anuncios con estos filtros" }
                        }
                    } @else {
                        div id="listings" class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6" {
                            @for (index, listing) in store.listings.iter().enumerate() {
                                (listing_card(&ListingCardVm::new(index, listing)))
                            }
                        }
                    }
                    (pagination(&page_links(store.current_page, store.total_pages)))
                }
                ResultsView::Error => {
                    div id="listings" class="grid" {
                        (listings_error())
                    }
                }
            }
        }
    }
}
