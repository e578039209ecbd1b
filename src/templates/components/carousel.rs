use crate::domain::{Carousel, SafeText};
use crate::views::listing_view::DETAIL_IMAGE_ERROR;
use maud::{html, Markup};

/// Image strip of the open listing. Swapped as a whole when an arrow is clicked.
pub fn carousel(images: &[SafeText], state: &Carousel) -> Markup {
    html! {
        div id="carousel" class="relative" {
            div class="image-carousel overflow-hidden" {
                @if images.is_empty() {
                    div class="no-images w-full h-64 md:h-96 bg-gray-200 flex items-center justify-center text-gray-500" {
                        "Sin imagenes"
                    }
                } @else {
                    div
                        class="carousel-track flex transition-transform"
                        data-position=(state.position())
                        style=(format!("transform: translateX(-{}%);", state.offset_percent()))
                    {
                        @for (i, src) in images.iter().enumerate() {
                            img
                                src=(src)
                                alt=(format!("Imagen {}", i + 1))
                                class="w-full h-64 md:h-96 object-cover flex-shrink-0"
                                onerror=(format!("this.onerror=null;this.src='{DETAIL_IMAGE_ERROR}'"));
                        }
                    }
                }
            }
            @if state.has_controls() {
                button
                    class="carousel-prev absolute left-2 top-1/2 -translate-y-1/2 bg-white/90 rounded-full p-2 shadow hover:bg-white text-xl"
                    hx-get="/modal/carousel?direction=-1"
                    hx-target="#carousel"
                    hx-swap="outerHTML"
                { "<-" }
                button
                    class="carousel-next absolute right-2 top-1/2 -translate-y-1/2 bg-white/90 rounded-full p-2 shadow hover:bg-white text-xl"
                    hx-get="/modal/carousel?direction=1"
                    hx-target="#carousel"
                    hx-swap="outerHTML"
                { "->" }
                div class="photo-count absolute bottom-2 left-1/2 -translate-x-1/2 bg-black/60 text-white text-sm px-3 py-1 rounded-full" {
                    (state.len()) " fotos"
                }
            }
        }
    }
}
