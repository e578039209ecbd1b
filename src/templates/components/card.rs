use crate::views::{listing_view::CARD_IMAGE_ERROR, ListingCardVm};
use maud::{html, Markup};

pub fn listing_card(vm: &ListingCardVm) -> Markup {
    html! {
        div
            class="listing-card bg-white rounded-lg shadow overflow-hidden cursor-pointer hover:shadow-lg"
            hx-get=(format!("/listings/{}", vm.index))
            hx-target="#modal"
            hx-swap="outerHTML"
        {
            div class="relative" {
                img
                    src=(vm.image)
                    alt=(vm.title)
                    class="w-full h-48 object-cover"
                    loading="lazy"
                    onerror=(format!("this.onerror=null;this.src='{CARD_IMAGE_ERROR}'"));
                span class={"type-badge absolute top-2 left-2 text-xs font-medium px-2 py-1 rounded " (vm.badge.classes)} {
                    (vm.badge.label)
                }
                @if let Some(count) = vm.image_count {
                    span class="image-count absolute top-2 right-2 bg-black/60 text-white text-xs px-2 py-1 rounded" {
                        (count)
                    }
                }
                @if vm.reserved {
                    span class="reserved-badge absolute bottom-2 left-2 bg-yellow-400 text-gray-900 text-xs font-medium px-2 py-1 rounded" {
                        "Reservado"
                    }
                }
            }
            div class="p-4" {
                h3 class="font-semibold text-gray-800 line-clamp-1 mb-2" { (vm.title) }
                p class="price text-2xl font-bold text-blue-600 mb-2" {
                    (vm.price) "€" span class="text-sm font-normal text-gray-500" { "/mes" }
                }
                div class="facts flex flex-wrap gap-2 text-sm text-gray-600" {
                    @for fact in &vm.facts {
                        span class="fact" { (fact.value) " " (fact.unit) }
                    }
                }
            }
        }
    }
}
