use crate::pixel::Pixel;

/// What a presenter needs to know to blit a [`Buffer`] as is.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BufferInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Row 0 is the top scanline.
    pub top_down: bool,
}

/// Owned, fixed-size grid of pixels, independent of any window resolution.
#[derive(Clone, Debug)]
pub struct Buffer {
    pixels: Vec<Pixel>,
    clear_color: Pixel,
    info: BufferInfo,
}

impl Buffer {
    /// A `width * height` buffer filled with the default clear color
    /// (`Pixel::hex(0)`). Either dimension may be zero.
    pub fn new(width: u32, height: u32) -> Self {
        let clear_color = Pixel::hex(0);
        let len = width as usize * height as usize;

        Self {
            pixels: vec![clear_color; len],
            clear_color,
            info: BufferInfo {
                width,
                height,
                bits_per_pixel: 32,
                top_down: true,
            },
        }
    }

    #[inline(always)] pub fn width(&self) -> u32 { self.info.width }
    #[inline(always)] pub fn height(&self) -> u32 { self.info.height }
    #[inline(always)] pub fn info(&self) -> BufferInfo { self.info }
    #[inline(always)] pub fn clear_color(&self) -> Pixel { self.clear_color }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn clear(&mut self) {
        let color = self.clear_color;
        for p in self.pixels.iter_mut() {
            *p = color;
        }
    }

    /// Takes effect on the next [`Buffer::clear`].
    pub fn set_clear_color(&mut self, color: Pixel) {
        self.clear_color = color;
    }

    /// Out-of-range writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, pixel: Pixel) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = pixel;
        }
    }

    #[inline]
    pub fn put_pixel_rgb(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8) {
        self.put_pixel(x, y, Pixel::rgb(r, g, b));
    }

    #[inline]
    pub fn put_pixel_rgba(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: u8) {
        self.put_pixel(x, y, Pixel::rgba(r, g, b, a));
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Row-major, `width` pixels per row, top row first.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Raw pointer to the first pixel for FFI blits.
    /// Valid for `width * height` reads while `self` is borrowed and unchanged.
    pub fn as_ptr(&self) -> *const Pixel {
        self.pixels.as_ptr()
    }

    /// Nearest-neighbour stretch of the whole buffer onto `dst`.
    ///
    /// `dst` is row-major with `dst_width * dst_height` pixels. An empty source
    /// leaves `dst` untouched.
    pub fn stretch_into(&self, dst: &mut [Pixel], dst_width: u32, dst_height: u32) {
        assert_eq!(
            dst.len(),
            dst_width as usize * dst_height as usize,
            "Destination length does not match {}x{}",
            dst_width, dst_height,
        );
        if self.is_empty() || dst.is_empty() {
            return;
        }

        let (src_w, src_h) = (self.width() as u64, self.height() as u64);
        let (dst_w, dst_h) = (dst_width as u64, dst_height as u64);
        for (dst_y, dst_row) in dst.chunks_exact_mut(dst_width as usize).enumerate() {
            let src_y = dst_y as u64 * src_h / dst_h;
            let src_row = &self.pixels[(src_y * src_w) as usize..][..src_w as usize];
            for (dst_x, dst_pixel) in dst_row.iter_mut().enumerate() {
                let src_x = dst_x as u64 * src_w / dst_w;
                *dst_pixel = src_row[src_x as usize];
            }
        }
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            Some(y as usize * self.width() as usize + x as usize)
        } else {
            None
        }
    }
}
