use crate::data::{AssetStore, MapData};
use crate::errors::ServerError;
use crate::responses::{asset_response, html_response, json_response, ResultResp};
use crate::templates;
use astra::Request;

const STATIC_PREFIX: &str = "/static/";

pub fn handle(req: Request, data: &MapData) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        // HEAD shares the GET handlers; hyper strips the body on the way out.
        ("GET" | "HEAD", "/") => html_response(templates::pages::home_page()),
        ("GET" | "HEAD", "/chloropleth") => json_response(&data.chloropleth),
        ("GET" | "HEAD", "/properties") => json_response(&data.properties),
        ("GET" | "HEAD", _) if path.starts_with(STATIC_PREFIX) => {
            static_asset(&data.assets, &path[STATIC_PREFIX.len()..])
        }

        (_, "/" | "/chloropleth" | "/properties") => {
            Err(ServerError::MethodNotAllowed(method.to_string()))
        }
        (_, _) if path.starts_with(STATIC_PREFIX) => {
            Err(ServerError::MethodNotAllowed(method.to_string()))
        }
        _ => Err(ServerError::NotFound),
    }
}

// Lookups only hit the in-memory store, so `..` never reaches the filesystem.
fn static_asset(assets: &AssetStore, key: &str) -> ResultResp {
    let asset = assets.get(key).ok_or(ServerError::NotFound)?;
    asset_response(asset)
}
