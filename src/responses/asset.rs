// responses/asset.rs
use crate::data::Asset;
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Return a preloaded static file.
pub fn asset_response(asset: &Asset) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", asset.content_type.as_ref())
        .body(Body::from(asset.bytes.clone()))
        .map_err(|_| ServerError::InternalError)
}
