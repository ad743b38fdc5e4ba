use maud::{html, Markup};

pub mod error;

pub use error::error_page;

/// The element the map script draws into.
pub fn map_container(id: &str, height_px: u32) -> Markup {
    html! {
        div id=(id) style=(format!("height: {height_px}px; width: 100%;")) {}
    }
}
