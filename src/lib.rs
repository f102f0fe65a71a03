///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod animation;
pub mod config;
pub mod flip;
pub mod flip_tiles;
pub mod tile;
pub mod transform;

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Exports
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub use animation::{Spring, SpringConfig, StaggerConfig, StaggerDirection, Trail};
pub use config::FlipTilesConfig;
pub use flip::{FlipState, FlipToggle, FLIPPED_ANGLE, UNFLIPPED_ANGLE};
pub use flip_tiles::{FlipTiles, FLIP_TILES};
pub use tile::FlipTile;
pub use transform::{Face, FaceTransform, TileTransforms, DEFAULT_PERSPECTIVE};
