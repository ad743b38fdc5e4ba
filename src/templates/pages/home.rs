// templates/pages/home.rs

use crate::templates::{map_container, map_layout};
use maud::{html, Markup};

/// Id the chloropleth script looks up.
pub const MAP_ELEMENT_ID: &str = "chloroplethPlot";
pub const MAP_SCRIPT: &str = "/static/js/chloropleth.js";

pub fn home_page() -> Markup {
    map_layout(
        "NYC Airbnb Prices by Borough",
        html! {
            p {
                "Boroughs are shaded by average nightly price. "
                "Each dot is a listing."
            }
            (map_container(MAP_ELEMENT_ID, 600))
        },
        &[MAP_SCRIPT],
    )
}
