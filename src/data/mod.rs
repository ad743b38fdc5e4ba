pub mod assets;
pub mod boundaries;
pub mod context;
pub mod listings;
pub mod load_error;

pub use assets::{Asset, AssetStore};
pub use context::MapData;
pub use load_error::LoadError;
