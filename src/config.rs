use clap::Parser;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "borough_map")]
#[command(about = "Serves NYC borough prices and listing points for the chloropleth map")]
pub struct Config {
    /// Listings CSV with neighbourhood_group, latitude, longitude and price columns
    #[arg(long, env = "BOROUGH_MAP_LISTINGS", default_value = "Airbnb_Open_Data_clean.csv")]
    pub listings: PathBuf,

    /// Borough boundaries as a GeoJSON FeatureCollection
    #[arg(long, env = "BOROUGH_MAP_BOROUGHS", default_value = "new-york-city-boroughs.geojson")]
    pub boroughs: PathBuf,

    #[arg(long, env = "BOROUGH_MAP_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    #[arg(long, env = "BOROUGH_MAP_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    #[arg(long, env = "BOROUGH_MAP_WORKERS", default_value = "8")]
    pub workers: NonZeroUsize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
