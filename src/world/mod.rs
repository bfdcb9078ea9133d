//! The set of live pieces, collection-level cuts, and physics synchronization.

pub use self::config::CutConfig;
pub use self::cutter::{AddedPiece, CutReport, Cutter};
pub use self::physics::{PhysicsAdapter, PhysicsSync};
pub use self::piece_set::{PieceId, PieceSet};

mod config;
mod cutter;
mod physics;
mod piece_set;
