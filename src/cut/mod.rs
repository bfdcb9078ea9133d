//! Cutting pieces along strokes.
//!
//! A cut goes through the following steps, leaf-first:
//! 1. [`extend_stroke`] lengthens the raw stroke so that it can't stop
//!    partway into the piece.
//! 2. [`stroke_polygon_intersections`] finds where the extended stroke
//!    crosses the piece's outline, in stroke order.
//! 3. [`split_polygon_with_path`] builds the two hulls on each side of the
//!    stroke, between its first and last crossings.
//! 4. [`PieceFactory`](crate::piece::PieceFactory) turns each valid hull
//!    into a new piece.
//!
//! [`cut_piece`] chains these steps for a single piece.

pub use self::broad_phase::stroke_touches_polygon;
pub use self::cut_piece::{cut_piece, CutRejection, CutStage, PieceCut};
pub use self::edge_intersector::{stroke_polygon_intersections, IntersectionRecord};
pub use self::path_extender::{extend_stroke, extend_stroke_by};
pub use self::polygon_splitter::{split_polygon_with_path, PolygonSplit, SplitTolerances};

mod broad_phase;
mod cut_piece;
mod edge_intersector;
mod path_extender;
mod polygon_splitter;
