use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Deref;
use downcast_rs::{impl_downcast, DowncastSync};

/// An image drawn onto pieces.
///
/// The library never reads pixels: it only needs the extents of the image.
/// Decoding and drawing are left to the application, which can recover its
/// concrete texture type with [`SharedTexture::downcast_ref`].
pub trait Texture: DowncastSync {
    /// The width of this image, in pixels.
    fn width(&self) -> u32;
    /// The height of this image, in pixels.
    fn height(&self) -> u32;
}

impl_downcast!(sync Texture);

/// Error indicating that a bitmap could not be built from its pixel buffer.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum BitmapError {
    /// One of the extents is zero.
    #[error("a bitmap must have non-zero extents.")]
    EmptyBitmap,
    /// The buffer length doesn't match `4 * width * height`.
    #[error("expected {expected} bytes of RGBA data, found {found}.")]
    WrongBufferLength {
        /// The expected number of bytes.
        expected: usize,
        /// The actual number of bytes.
        found: usize,
    },
}

/// A plain RGBA8 image, stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    /// Builds a bitmap from its RGBA8 pixel data.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::EmptyBitmap);
        }

        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(BitmapError::WrongBufferLength {
                expected,
                found: rgba.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    /// A bitmap with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Result<Self, BitmapError> {
        let len = width as usize * height as usize;
        Self::new(width, height, color.repeat(len))
    }

    /// The raw RGBA8 data of this bitmap.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// The color of the pixel at column `x` and row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.rgba[i],
            self.rgba[i + 1],
            self.rgba[i + 2],
            self.rgba[i + 3],
        ])
    }
}

impl Texture for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// A reference-counted texture shared by every piece cut from the same image.
///
/// Cloning a `SharedTexture` only increments a reference count.
#[derive(Clone)]
pub struct SharedTexture(pub Arc<dyn Texture>);

impl Deref for SharedTexture {
    type Target = dyn Texture;
    fn deref(&self) -> &dyn Texture {
        &*self.0
    }
}

impl AsRef<dyn Texture> for SharedTexture {
    fn as_ref(&self) -> &dyn Texture {
        &*self.0
    }
}

impl fmt::Debug for SharedTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SharedTexture ( Arc<{}x{}> )",
            self.0.width(),
            self.0.height()
        )
    }
}

impl SharedTexture {
    /// Wraps any texture type into a `SharedTexture`.
    pub fn new(texture: impl Texture) -> Self {
        Self(Arc::new(texture))
    }

    /// Do `self` and `other` refer to the same image?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The concrete texture, if it has type `T`.
    pub fn downcast_ref<T: Texture>(&self) -> Option<&T> {
        (*self.0).downcast_ref()
    }

    /// The texture as a [`Bitmap`], if it is one.
    pub fn as_bitmap(&self) -> Option<&Bitmap> {
        self.downcast_ref()
    }
}
