use super::SharedTexture;
use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::Polygon;
use alloc::vec::Vec;

/// Surface properties handed to the physics engine along with a piece.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Material {
    /// The friction coefficient.
    pub friction: Real,
    /// The restitution coefficient.
    pub restitution: Real,
}

impl Material {
    /// The material of the piece built from a freshly loaded image.
    pub const IMAGE: Self = Self {
        friction: 0.1,
        restitution: 0.6,
    };

    /// The material of the pieces produced by a cut or a resize.
    pub const FRAGMENT: Self = Self {
        friction: 0.3,
        restitution: 0.6,
    };
}

/// A fragment of an image: a polygonal outline textured with part of a shared image.
///
/// The outline is expressed in the local frame of the piece, whose origin
/// is the vertex center of the outline. The pose of that frame in the world
/// is owned by the physics engine and only mirrored here.
///
/// A piece never changes shape. Cutting or resizing it produces new pieces.
#[derive(Clone, Debug)]
pub struct Piece {
    pub(crate) shape: Polygon,
    pub(crate) position: Isometry<Real>,
    pub(crate) texture: SharedTexture,
    pub(crate) texture_extents: Vector<Real>,
    pub(crate) texture_frame: Isometry<Real>,
    pub(crate) density: Real,
    pub(crate) material: Material,
    pub(crate) is_static: bool,
}

impl Piece {
    /// Creates a dynamic piece with the whole texture centered on its local origin.
    ///
    /// The `texture_extents` are the size, in world units, at which the texture
    /// is drawn.
    pub fn new(
        shape: Polygon,
        position: Isometry<Real>,
        texture: SharedTexture,
        texture_extents: Vector<Real>,
        density: Real,
    ) -> Self {
        Self {
            shape,
            position,
            texture,
            texture_extents,
            texture_frame: Isometry::identity(),
            density,
            material: Material::FRAGMENT,
            is_static: false,
        }
    }

    /// The outline of this piece, in its local frame.
    #[inline]
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    /// The pose of this piece in the world.
    #[inline]
    pub fn position(&self) -> &Isometry<Real> {
        &self.position
    }

    /// Sets the pose of this piece, usually from the physics engine.
    #[inline]
    pub fn set_position(&mut self, position: Isometry<Real>) {
        self.position = position;
    }

    /// The image drawn on this piece.
    #[inline]
    pub fn texture(&self) -> &SharedTexture {
        &self.texture
    }

    /// The size at which the whole texture is drawn, in world units.
    ///
    /// Cuts keep these extents unchanged, resizes scale them.
    #[inline]
    pub fn texture_extents(&self) -> Vector<Real> {
        self.texture_extents
    }

    /// The pose of the texture in the local frame of this piece.
    ///
    /// The texture is centered on its own origin, with its `x` axis along its rows.
    #[inline]
    pub fn texture_frame(&self) -> &Isometry<Real> {
        &self.texture_frame
    }

    /// The density of this piece.
    #[inline]
    pub fn density(&self) -> Real {
        self.density
    }

    /// The surface properties of this piece.
    #[inline]
    pub fn material(&self) -> Material {
        self.material
    }

    /// Is this piece pinned in place?
    #[inline]
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Pins this piece in place, or releases it.
    #[inline]
    pub fn set_static(&mut self, is_static: bool) {
        self.is_static = is_static;
    }

    /// The outline of this piece, in world-space.
    pub fn world_polygon(&self) -> Polygon {
        self.shape.transformed(&self.position)
    }

    /// The world-space AABB of this piece.
    pub fn aabb(&self) -> Aabb {
        self.shape.aabb(&self.position)
    }

    /// The area of this piece.
    pub fn area(&self) -> Real {
        self.shape.area()
    }

    /// The mass of this piece.
    pub fn mass(&self) -> Real {
        self.area() * self.density
    }

    /// Tests if the world-space point `pt` lies inside of this piece.
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        let local_pt = self.position.inverse_transform_point(pt);
        self.shape.contains_local_point(&local_pt)
    }

    /// The normalized texture coordinates of the point `local_pt`, given in the local frame.
    ///
    /// `(0, 0)` is the first pixel of the texture and `(1, 1)` its last one.
    /// Points outside of the texture get coordinates outside of `[0, 1]`.
    pub fn texture_uv(&self, local_pt: &Point<Real>) -> Point<Real> {
        let tex_pt = self.texture_frame.inverse_transform_point(local_pt);
        Point::new(
            tex_pt.x / self.texture_extents.x + 0.5,
            tex_pt.y / self.texture_extents.y + 0.5,
        )
    }

    /// The normalized texture coordinates of the world-space point `pt`.
    pub fn world_texture_uv(&self, pt: &Point<Real>) -> Point<Real> {
        self.texture_uv(&self.position.inverse_transform_point(pt))
    }

    /// The texture coordinates of each vertex of this piece's outline.
    pub fn vertex_uvs(&self) -> Vec<Point<Real>> {
        self.shape
            .vertices()
            .iter()
            .map(|pt| self.texture_uv(pt))
            .collect()
    }
}
