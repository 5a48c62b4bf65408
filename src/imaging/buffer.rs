//! Owned RGBA pixel buffer and the compositing primitives transforms use.
//!
//! [`PixelBuffer`] is the unit every transform reads and writes: a dense
//! row-major RGBA8 byte array plus its dimensions. The surface operations
//! (fill, blit, crop, resample) are the whole drawing capability the engine
//! needs, so it stays portable across pixel sources.

use super::color::Rgb;
use image::imageops::FilterType;

/// In-memory RGBA raster, row-major, 8 bits per channel.
///
/// Invariant: `data.len() == width * height * 4`, enforced by every
/// constructor. A zero-size buffer is the explicit "no pixels" sentinel;
/// transforms pass it through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent-black buffer of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Buffer filled with an opaque color.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let mut buf = Self::new(width, height);
        buf.fill(color);
        buf
    }

    /// The zero-size sentinel.
    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    /// Wrap raw RGBA bytes. Returns `None` when the length does not match
    /// `width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() == (width as usize) * (height as usize) * 4 {
            Some(Self {
                width,
                height,
                data,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// True for the zero-size sentinel (either dimension 0).
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Aspect ratio (width / height). Derived on demand, never stored.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Fill the whole buffer with an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        for px in self.data.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = 255;
        }
    }

    /// Copy `src` into this buffer with its top-left corner at `(x, y)`.
    ///
    /// Source rows and columns falling outside this buffer are clipped.
    pub fn blit(&mut self, src: &PixelBuffer, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let copy_w = (src.width.min(self.width - x) as usize) * 4;
        let copy_h = src.height.min(self.height - y) as usize;
        for row in 0..copy_h {
            let src_start = row * src.width as usize * 4;
            let dst_start = ((y as usize + row) * self.width as usize + x as usize) * 4;
            self.data[dst_start..dst_start + copy_w]
                .copy_from_slice(&src.data[src_start..src_start + copy_w]);
        }
    }

    /// Read a region into a new buffer. The region is clipped to the bounds;
    /// a fully out-of-bounds region yields the empty sentinel.
    pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> PixelBuffer {
        if x >= self.width || y >= self.height {
            return PixelBuffer::empty();
        }
        let w = width.min(self.width - x);
        let h = height.min(self.height - y);
        let mut out = PixelBuffer::new(w, h);
        let row_bytes = w as usize * 4;
        for row in 0..h as usize {
            let src_start = ((y as usize + row) * self.width as usize + x as usize) * 4;
            out.data[row * row_bytes..(row + 1) * row_bytes]
                .copy_from_slice(&self.data[src_start..src_start + row_bytes]);
        }
        out
    }

    /// Resample to exactly `width` x `height` with Lanczos3.
    pub fn resample(&self, width: u32, height: u32) -> PixelBuffer {
        if self.is_empty() || width == 0 || height == 0 {
            return PixelBuffer::empty();
        }
        if width == self.width && height == self.height {
            return self.clone();
        }
        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("buffer length invariant");
        let resized = image::imageops::resize(&img, width, height, FilterType::Lanczos3);
        PixelBuffer {
            width,
            height,
            data: resized.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_satisfies_length_invariant() {
        let buf = PixelBuffer::new(3, 2);
        assert_eq!(buf.data().len(), 3 * 2 * 4);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_none());
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_some());
    }

    #[test]
    fn filled_sets_every_pixel_opaque() {
        let buf = PixelBuffer::filled(2, 2, Rgb { r: 10, g: 20, b: 30 });
        for px in buf.data().chunks_exact(4) {
            assert_eq!(px, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn empty_sentinel() {
        let buf = PixelBuffer::empty();
        assert!(buf.is_empty());
        assert_eq!(buf.data().len(), 0);
    }

    #[test]
    fn blit_copies_at_offset() {
        let mut canvas = PixelBuffer::filled(4, 4, Rgb::BLACK);
        let patch = PixelBuffer::filled(2, 2, Rgb::WHITE);
        canvas.blit(&patch, 1, 1);

        // Pixel (1,1) is white, (0,0) stays black.
        let at = |x: usize, y: usize| &canvas.data()[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(at(0, 0), &[0, 0, 0, 255]);
        assert_eq!(at(1, 1), &[255, 255, 255, 255]);
        assert_eq!(at(2, 2), &[255, 255, 255, 255]);
        assert_eq!(at(3, 3), &[0, 0, 0, 255]);
    }

    #[test]
    fn blit_clips_at_edges() {
        let mut canvas = PixelBuffer::filled(4, 4, Rgb::BLACK);
        let patch = PixelBuffer::filled(3, 3, Rgb::WHITE);
        canvas.blit(&patch, 3, 3); // only (3,3) lands inside
        let at = |x: usize, y: usize| &canvas.data()[(y * 4 + x) * 4..(y * 4 + x) * 4 + 4];
        assert_eq!(at(3, 3), &[255, 255, 255, 255]);
        assert_eq!(at(2, 3), &[0, 0, 0, 255]);
    }

    #[test]
    fn blit_fully_outside_is_noop() {
        let mut canvas = PixelBuffer::filled(2, 2, Rgb::BLACK);
        let before = canvas.clone();
        canvas.blit(&PixelBuffer::filled(2, 2, Rgb::WHITE), 5, 5);
        assert_eq!(canvas, before);
    }

    #[test]
    fn crop_reads_back_blitted_region() {
        let mut canvas = PixelBuffer::filled(6, 6, Rgb::BLACK);
        let patch = PixelBuffer::filled(2, 3, Rgb { r: 7, g: 8, b: 9 });
        canvas.blit(&patch, 2, 1);
        assert_eq!(canvas.crop(2, 1, 2, 3), patch);
    }

    #[test]
    fn crop_clips_to_bounds() {
        let buf = PixelBuffer::filled(4, 4, Rgb::WHITE);
        let region = buf.crop(3, 3, 10, 10);
        assert_eq!((region.width(), region.height()), (1, 1));
    }

    #[test]
    fn resample_identity_when_size_unchanged() {
        let buf = PixelBuffer::filled(5, 5, Rgb::WHITE);
        assert_eq!(buf.resample(5, 5), buf);
    }

    #[test]
    fn resample_changes_dimensions() {
        let buf = PixelBuffer::filled(100, 50, Rgb { r: 40, g: 80, b: 120 });
        let half = buf.resample(50, 25);
        assert_eq!((half.width(), half.height()), (50, 25));
        // A constant image stays constant under resampling.
        assert_eq!(&half.data()[0..3], &[40, 80, 120]);
    }

    #[test]
    fn resample_of_empty_is_empty() {
        assert!(PixelBuffer::empty().resample(10, 10).is_empty());
    }
}
