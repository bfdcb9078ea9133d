use crate::cut::SplitTolerances;
use crate::math::Real;
use crate::piece::DensityModel;

/// Parameters of a [`Cutter`](super::Cutter).
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use cleave2d::world::CutConfig;
///
/// // Ignore strokes made of fewer than 5 samples, like quick taps.
/// let config = CutConfig {
///     min_stroke_points: 5,
///     ..CutConfig::default()
/// };
/// assert_eq!(config.separation_impulse, 0.0005);
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CutConfig {
    /// Strokes with fewer points are ignored.
    pub min_stroke_points: usize,
    /// The magnitude of the impulse pushing a new piece away from its parent,
    /// per unit of area of the new piece.
    pub separation_impulse: Real,
    /// How new pieces get their density.
    pub density: DensityModel,
    /// Tolerances for the polygon splitting.
    pub tolerances: SplitTolerances,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            min_stroke_points: 2,
            separation_impulse: 0.0005,
            density: DensityModel::default(),
            tolerances: SplitTolerances::default(),
        }
    }
}
