//! Image fragments and their construction.

pub use self::piece::{Material, Piece};
pub use self::piece_factory::{DensityModel, ImageFit, PieceFactory};
pub use self::texture::{Bitmap, BitmapError, SharedTexture, Texture};

mod piece;
mod piece_factory;
mod texture;
