//! Shapes manipulated by the cutting pipeline.

pub use self::polygon::{Polygon, PolygonError, Winding};
pub use self::stroke::{Stroke, StrokeError, StrokeSampler};

mod polygon;
mod stroke;
