use crate::templates::components::modal_root;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, htmx_src: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
                script src=(htmx_src) defer {};
            }
            body class="bg-gray-100 min-h-screen" {
              header class="flex items-center justify-between px-6 py-3 bg-white shadow" {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#2563eb"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                      class="icon icon-tabler icon-tabler-home"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h1 class="text-xl font-bold text-gray-800" { (title) }
              }
                main class="container mx-auto px-4 py-6" {
                    (content)
                }
                (modal_root())
            }
        }
    }
}
