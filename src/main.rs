use crate::config::Config;
use crate::data::MapData;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::{Request, Server};
use clap::Parser;

mod config;
mod data;
mod domain;
mod errors;
mod logger;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = Config::parse();
    logger::init(config.verbose);
    tracing::debug!("Config: {:?}", config);

    // Everything is loaded before binding; a partial data set is never served.
    let data = match MapData::load(&config) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("❌ Failed to load map data: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server at http://{}", config.addr);

    let server = Server::bind(config.addr).max_workers(config.workers.get());

    let result = server.serve(move |req: Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &data) {
            Ok(resp) => resp,
            Err(err) => {
                if err.status() >= 500 {
                    tracing::error!("{method} {path}: {err}");
                }
                error_to_response(&err)
            }
        };

        tracing::info!("{method} {path} -> {}", resp.status().as_u16());
        resp
    });

    if let Err(e) = result {
        tracing::error!("Server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Server shut down cleanly.");
}
