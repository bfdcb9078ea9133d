use super::{Material, Piece, SharedTexture};
use crate::cut::PolygonSplit;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Polygon;
use crate::utils;
use arrayvec::ArrayVec;

/// How the density of a piece is seeded from its area.
///
/// Small pieces are made denser than large ones so that fragments don't
/// float around like feathers:
/// `density = base_density + spread_factor * (1 - min(area / area_cap, 1))`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use cleave2d::piece::DensityModel;
///
/// let model = DensityModel::default();
/// assert!((model.density_for_area(0.0) - 0.003).abs() < 1.0e-7);
/// assert_eq!(model.density_for_area(50_000.0), 0.001);
/// assert_eq!(model.density_for_area(1.0e9), 0.001);
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct DensityModel {
    /// The density of pieces with an area larger than `area_cap`.
    pub base_density: Real,
    /// The extra density given to a piece with a zero area.
    pub spread_factor: Real,
    /// The area above which pieces get the base density.
    pub area_cap: Real,
}

impl Default for DensityModel {
    fn default() -> Self {
        Self {
            base_density: 0.001,
            spread_factor: 0.002,
            area_cap: 50_000.0,
        }
    }
}

impl DensityModel {
    /// The density of a piece with the given area.
    ///
    /// This never increases with the area.
    pub fn density_for_area(&self, area: Real) -> Real {
        let ratio = if self.area_cap > 0.0 {
            (area.abs() / self.area_cap).min(1.0)
        } else {
            1.0
        };

        self.base_density + self.spread_factor * (1.0 - ratio)
    }
}

/// How a freshly loaded image is fitted into the canvas.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ImageFit {
    /// The width of the canvas.
    pub canvas_width: Real,
    /// The height of the canvas.
    pub canvas_height: Real,
    /// The largest fraction of the canvas an image may cover along its longest side.
    pub fill_ratio: Real,
}

impl Default for ImageFit {
    fn default() -> Self {
        Self {
            canvas_width: 1000.0,
            canvas_height: 700.0,
            fill_ratio: 0.8,
        }
    }
}

impl ImageFit {
    /// The center of the canvas.
    pub fn canvas_center(&self) -> Point<Real> {
        Point::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// The extents at which an image of `width × height` pixels is drawn.
    ///
    /// The aspect ratio is preserved and the image is never upscaled.
    /// Landscape images are constrained by the canvas width, the others by
    /// the canvas height.
    pub fn fitted_extents(&self, width: Real, height: Real) -> Vector<Real> {
        let aspect = width / height;

        if aspect > 1.0 {
            let w = (self.canvas_width * self.fill_ratio).min(width);
            Vector::new(w, w / aspect)
        } else {
            let h = (self.canvas_height * self.fill_ratio).min(height);
            Vector::new(h * aspect, h)
        }
    }
}

/// Builds new pieces from hulls, resized pieces, and images.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct PieceFactory {
    /// How new pieces get their density.
    pub density: DensityModel,
}

impl PieceFactory {
    /// A factory seeding densities with the given model.
    pub fn new(density: DensityModel) -> Self {
        Self { density }
    }

    /// Builds the piece with the outline `hull`, cut from `parent`.
    ///
    /// The `hull` is expressed in world-space, like the world polygon of
    /// `parent` it was split from. The new piece is anchored on the vertex
    /// center of the hull, with no rotation, and keeps showing the same part
    /// of the parent's texture.
    pub fn build(&self, hull: &Polygon, parent: &Piece) -> Piece {
        let center = utils::center(hull.vertices()).unwrap_or_else(Point::origin);
        let shape = hull.translated(&-center.coords);
        let position = Isometry::new(center.coords, 0.0);
        let texture_frame = position.inv_mul(&(parent.position * parent.texture_frame));

        Piece {
            density: self.density.density_for_area(shape.area()),
            shape,
            position,
            texture: parent.texture.clone(),
            texture_extents: parent.texture_extents,
            texture_frame,
            material: Material::FRAGMENT,
            is_static: false,
        }
    }

    /// Builds a piece from the raw world-space `hull` vertices, cut from `parent`.
    ///
    /// Returns `None` if the hull has fewer than three vertices or a
    /// non-finite vertex.
    pub fn build_from_vertices(&self, hull: &[Point<Real>], parent: &Piece) -> Option<Piece> {
        let hull = Polygon::new(hull.to_vec()).ok()?;
        Some(self.build(&hull, parent))
    }

    /// Builds the pieces for every valid hull of `split`.
    pub fn build_split(&self, split: PolygonSplit, parent: &Piece) -> ArrayVec<Piece, 2> {
        let mut result = ArrayVec::new();

        match split {
            PolygonSplit::Pair(a, b) => {
                result.push(self.build(&a, parent));
                result.push(self.build(&b, parent));
            }
            PolygonSplit::First(hull) | PolygonSplit::Second(hull) => {
                result.push(self.build(&hull, parent))
            }
            PolygonSplit::Degenerate | PolygonSplit::Untouched => {}
        }

        result
    }

    /// A copy of `piece` uniformly scaled by `factor` around its local origin.
    ///
    /// The texture is scaled along with the outline. The new piece is dynamic,
    /// has the same pose as `piece`, and a density seeded from its new area.
    /// Returns `None` if `factor` is not a finite, strictly positive number.
    pub fn resize(&self, piece: &Piece, factor: Real) -> Option<Piece> {
        let Some(shape) = piece.shape.scaled(factor) else {
            log::warn!("Ignoring invalid resize factor {}.", factor);
            return None;
        };

        let mut texture_frame = piece.texture_frame;
        texture_frame.translation.vector *= factor;

        Some(Piece {
            density: self.density.density_for_area(shape.area()),
            shape,
            position: piece.position,
            texture: piece.texture.clone(),
            texture_extents: piece.texture_extents * factor,
            texture_frame,
            material: Material::FRAGMENT,
            is_static: false,
        })
    }

    /// The static piece showing the whole of `texture`, fitted into the canvas.
    ///
    /// The piece is a rectangle centered on the canvas, with the base density.
    /// Returns `None` if the texture has a zero width or height.
    pub fn initial_piece(&self, texture: SharedTexture, fit: &ImageFit) -> Option<Piece> {
        let (width, height) = (texture.width(), texture.height());

        if width == 0 || height == 0 {
            log::warn!("Cannot build a piece from a {}x{} image.", width, height);
            return None;
        }

        let extents = fit.fitted_extents(width as Real, height as Real);
        let shape = Polygon::rectangle(extents / 2.0).ok()?;
        let position = Isometry::new(fit.canvas_center().coords, 0.0);
        log::debug!(
            "Fitted a {}x{} image to {}x{}.",
            width,
            height,
            extents.x,
            extents.y
        );

        Some(Piece {
            shape,
            position,
            texture,
            texture_extents: extents,
            texture_frame: Isometry::identity(),
            density: self.density.base_density,
            material: Material::IMAGE,
            is_static: true,
        })
    }
}
