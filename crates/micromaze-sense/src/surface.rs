//! The pixel surface a simulated sensor scans against.

use crate::error::SurfaceError;
use micromaze_core::PixelCoord;

/// A fixed-size 2-D grid of multi-channel pixels.
///
/// Background pixels have every channel at zero; any nonzero channel marks
/// an obstruction. Maze images are authored this way (white walls on black),
/// so the polarity must not be inverted.
pub trait OccupancySurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Channel values of `pixel`, or `None` outside the surface.
    fn channels(&self, pixel: PixelCoord) -> Option<&[u8]>;

    /// True iff `pixel` is inside the surface and has a nonzero channel.
    fn is_obstruction(&self, pixel: PixelCoord) -> bool {
        self.channels(pixel)
            .is_some_and(|values| values.iter().any(|&v| v != 0))
    }
}

/// Row-major, interleaved `u8` pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl PixelSurface {
    /// Wrap an existing buffer of `width * height * channels` bytes.
    ///
    /// This is the hand-off point from an image loader: a surface that
    /// fails here never reaches a session.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self, SurfaceError> {
        if width == 0 || height == 0 {
            return Err(SurfaceError::Empty { width, height });
        }
        if channels == 0 {
            return Err(SurfaceError::ZeroChannels);
        }
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(SurfaceError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// A fully open (all-zero) surface.
    pub fn blank(width: u32, height: u32, channels: usize) -> Result<Self, SurfaceError> {
        let len = width as usize * height as usize * channels;
        Self::from_raw(width, height, channels, vec![0; len])
    }

    /// Channels per pixel.
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    /// The raw interleaved buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, pixel: PixelCoord) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }
        Some((pixel.y as usize * self.width as usize + pixel.x as usize) * self.channels)
    }

    /// Set every channel of `pixel` to `value`. Out-of-surface pixels are
    /// ignored.
    pub fn paint(&mut self, pixel: PixelCoord, value: u8) {
        if let Some(o) = self.offset(pixel) {
            self.data[o..o + self.channels].fill(value);
        }
    }

    /// Set a single channel of `pixel`. Out-of-range writes are ignored.
    pub fn set_channel(&mut self, pixel: PixelCoord, channel: usize, value: u8) {
        if channel >= self.channels {
            return;
        }
        if let Some(o) = self.offset(pixel) {
            self.data[o + channel] = value;
        }
    }

    /// Paint the rectangle `[x, x + w) x [y, y + h)`, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, value: u8) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(y_end)..y_end {
            for px in x.min(x_end)..x_end {
                self.paint(PixelCoord::new(px, py), value);
            }
        }
    }
}

impl OccupancySurface for PixelSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn channels(&self, pixel: PixelCoord) -> Option<&[u8]> {
        self.offset(pixel).map(|o| &self.data[o..o + self.channels])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_validates_shape() {
        assert_eq!(
            PixelSurface::from_raw(0, 4, 3, vec![]),
            Err(SurfaceError::Empty {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            PixelSurface::from_raw(2, 2, 0, vec![]),
            Err(SurfaceError::ZeroChannels)
        );
        assert_eq!(
            PixelSurface::from_raw(2, 2, 3, vec![0; 11]),
            Err(SurfaceError::BufferLength {
                expected: 12,
                actual: 11
            })
        );
        assert!(PixelSurface::from_raw(2, 2, 3, vec![0; 12]).is_ok());
    }

    #[test]
    fn any_nonzero_channel_obstructs() {
        let mut s = PixelSurface::blank(3, 1, 3).unwrap();
        assert!(!s.is_obstruction(PixelCoord::new(0, 0)));
        s.set_channel(PixelCoord::new(1, 0), 2, 1);
        assert!(s.is_obstruction(PixelCoord::new(1, 0)));
        assert_eq!(s.channels(PixelCoord::new(1, 0)), Some(&[0u8, 0, 1][..]));
    }

    #[test]
    fn outside_is_not_an_obstruction() {
        let s = PixelSurface::blank(2, 2, 1).unwrap();
        assert_eq!(s.channels(PixelCoord::new(2, 0)), None);
        assert!(!s.is_obstruction(PixelCoord::new(0, 9)));
    }

    #[test]
    fn fill_rect_clips() {
        let mut s = PixelSurface::blank(4, 4, 1).unwrap();
        s.fill_rect(2, 2, 10, 10, 255);
        let painted = s.as_bytes().iter().filter(|&&b| b == 255).count();
        assert_eq!(painted, 4);
        assert!(s.is_obstruction(PixelCoord::new(3, 3)));
        assert!(!s.is_obstruction(PixelCoord::new(1, 3)));
    }
}
