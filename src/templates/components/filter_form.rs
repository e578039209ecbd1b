use crate::config::MAX_DISTANCE_KM;
use crate::domain::filters::{FilterForm, SORT_OPTIONS};
use maud::{html, Markup};

fn number_input(id: &str, name: &str, label: &str, value: Option<&str>) -> Markup {
    html! {
        div class="flex flex-col" {
            label for=(id) class="text-sm text-gray-600 mb-1" { (label) }
            input
                type="number"
                id=(id)
                name=(name)
                min="0"
                value=[value]
                class="border rounded px-2 py-1";
        }
    }
}

/// The filter sidebar. Submitting (button or Enter in any field) applies the filters.
pub fn filter_form(form: &FilterForm) -> Markup {
    let selected_type = form.property_type.as_deref().unwrap_or("");
    let distance = form
        .max_distance
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| format!("{MAX_DISTANCE_KM}"));

    html! {
        form
            id="filters"
            class="bg-white rounded-lg shadow p-4 mb-6 grid grid-cols-2 md:grid-cols-4 gap-4"
            hx-get="/listings"
            hx-target="#results"
            hx-swap="outerHTML"
            hx-sync="this:replace"
        {
            div class="flex flex-col" {
                label for="filter-type" class="text-sm text-gray-600 mb-1" { "Tipo" }
                select id="filter-type" name="property_type" class="border rounded px-2 py-1" {
                    option value="" selected[selected_type.is_empty()] { "Todos" }
                    option value="apartment" selected[selected_type == "apartment"] { "Pisos" }
                    option value="house" selected[selected_type == "house"] { "Casas" }
                }
            }

            (number_input("filter-min-price", "min_price", "Precio min", form.min_price.as_deref()))
            (number_input("filter-max-price", "max_price", "Precio max", form.max_price.as_deref()))
            (number_input("filter-min-rooms", "min_rooms", "Hab. min", form.min_rooms.as_deref()))
            (number_input("filter-max-rooms", "max_rooms", "Hab. max", form.max_rooms.as_deref()))
            (number_input("filter-min-bathrooms", "min_bathrooms", "Banos min", form.min_bathrooms.as_deref()))
            (number_input("filter-max-bathrooms", "max_bathrooms", "Banos max", form.max_bathrooms.as_deref()))

            div class="flex flex-col" {
                label for="filter-distance" class="text-sm text-gray-600 mb-1" {
                    "Distancia max: "
                    span id="distance-value" { (form.distance_label()) }
                }
                input
                    type="range"
                    id="filter-distance"
                    name="max_distance"
                    min="1"
                    max=(format!("{MAX_DISTANCE_KM}"))
                    value=(distance)
                    oninput="document.getElementById('distance-value').textContent = this.value + ' km'";
            }

            div class="flex flex-col" {
                label for="filter-sort" class="text-sm text-gray-600 mb-1" { "Ordenar" }
                select id="filter-sort" name="sort" class="border rounded px-2 py-1" {
                    @for (value, label) in SORT_OPTIONS {
                        option value=(value) selected[form.sort == *value] { (label) }
                    }
                }
            }

            div class="col-span-2 md:col-span-4 flex gap-2 justify-end" {
                button
                    type="button"
                    class="clear-filters px-4 py-2 rounded bg-gray-200 hover:bg-gray-300"
                    hx-get="/filters/clear"
                    hx-target="#browser"
                    hx-swap="innerHTML"
                { "Limpiar" }
                button type="submit" class="apply-filters px-4 py-2 rounded bg-blue-600 text-white hover:bg-blue-700" {
                    "Aplicar filtros"
                }
            }
        }
    }
}
