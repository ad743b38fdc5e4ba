use maud::{html, Markup, DOCTYPE};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const D3_JS: &str = "https://d3js.org/d3.v7.min.js";

/// Full document with Leaflet and D3 loaded; `scripts` are appended after `content`.
pub fn map_layout(title: &str, content: Markup, scripts: &[&str]) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(LEAFLET_CSS);
                style {
                    "body { font-family: system-ui, sans-serif; margin: 0; }"
                    "header { padding: 0.75rem 1.5rem; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }"
                    "main { padding: 1rem 1.5rem; }"
                }
                script src=(LEAFLET_JS) {}
                script src=(D3_JS) {}
            }
            body {
                header {
                    h3 { (title) }
                }
                main {
                    (content)
                }
                @for src in scripts {
                    script src=(src) {}
                }
            }
        }
    }
}
