use bitvec::prelude::*;
#[cfg(feature = "embedded-graphics")]
use embedded_graphics::{pixelcolor::BinaryColor, prelude::*};

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;
pub(crate) const MEM_LENGTH: usize = WIDTH * HEIGHT / 8;
const ROW_LENGTH: usize = WIDTH / 8;

/// Pixel buffer of the 8x8 matrix
///
/// Stored as one byte per row, top to bottom. Bit `x` of row `y` is the pixel
/// at column `x`, so the least significant bit is the leftmost column. This is
/// the same layout the matrix driver expects in its digit registers and the
/// layout sprites are authored in.
///
/// Every accessor is bounds-checked and never fails: writes outside of the
/// matrix are dropped, reads outside of it see an unlit pixel.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Frame([u8; MEM_LENGTH]);

/// A shared view over a `Frame`
///
/// Rows are exposed as `BitSlice`s ordered `Lsb0`, so index `x` of a row is
/// column `x` of the matrix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FrameView<'a>(&'a [u8; MEM_LENGTH]);

impl<'a> FrameView<'a> {
    /// View the raw memory of a frame
    pub fn as_raw(&self) -> &[u8] {
        self.0
    }

    /// Create an owned copy of a frame
    pub fn copy_frame(self) -> Frame {
        Frame(*self.0)
    }

    /// Access frame's bits by indexes
    pub fn get_bit(&self, x: usize, y: usize) -> Option<&bool> {
        self.iter_rows_as_bitslices()
            .nth(y)
            .and_then(|row| row.get(x))
    }

    /// Get iterator over rows in a form of a `BitSlice`s
    pub fn iter_rows_as_bitslices(&self) -> impl Iterator<Item = &'a BitSlice<Lsb0, u8>> {
        self.0.chunks(ROW_LENGTH).map(|row| row.view_bits::<Lsb0>())
    }

    /// Iterate over every pixel as `(x, y, lit)`, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize, bool)> + 'a {
        self.iter_rows_as_bitslices()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &lit)| (x, y, lit)))
    }

    /// Number of lit pixels
    pub fn count_lit(&self) -> usize {
        self.0.iter().map(|row| row.count_ones() as usize).sum()
    }
}

impl Frame {
    pub fn new() -> Self {
        Self([0; MEM_LENGTH])
    }

    /// Get view over frame
    pub fn view(&self) -> FrameView<'_> {
        FrameView(&self.0)
    }

    /// Raw rows, top to bottom
    pub fn rows(&self) -> &[u8; MEM_LENGTH] {
        &self.0
    }

    /// Raw row `y`, or an empty row when `y` is out of range
    pub fn row(&self, y: usize) -> u8 {
        self.0.get(y).copied().unwrap_or(0)
    }

    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Light up (`true`) or blank (`false`) every pixel
    pub fn fill(&mut self, state: bool) {
        let value = if state { 0xFF } else { 0x00 };
        self.0.iter_mut().for_each(|row| *row = value);
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, state: bool) {
        if let Some(row) = self.iter_rows_as_bitslices_mut().nth(y) {
            if let Some(mut bit) = row.get_mut(x) {
                *bit = state;
            }
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        self.view().get_bit(x, y).copied().unwrap_or(false)
    }

    /// OR a sprite into the frame with its top-left corner at `(x, y)`
    ///
    /// `sprite` holds one byte per row in the same layout as the frame (bit
    /// `n` is column `n`). Only set sprite bits are drawn; pixels under unset
    /// bits keep their value. Parts of the sprite falling outside of the
    /// matrix are clipped, including negative offsets. Rows missing from
    /// `sprite` are treated as empty, columns past the eighth are never set.
    pub fn draw_sprite(&mut self, x: i32, y: i32, sprite: &[u8], width: u8, height: u8) {
        for (sy, row) in sprite.chunks(1).take(height as usize).enumerate() {
            let lit = row
                .view_bits::<Lsb0>()
                .iter()
                .take(width as usize)
                .enumerate()
                .filter(|(_, bit)| **bit)
                .map(|(sx, _)| sx);
            for sx in lit {
                // offsets near the i32 limits land off the matrix
                let (px, py) = (x.checked_add(sx as i32), y.checked_add(sy as i32));
                if let (Some(px), Some(py)) = (px, py) {
                    self.plot(px, py, true);
                }
            }
        }
    }

    /// `set_pixel` over signed coordinates
    pub(crate) fn plot(&mut self, x: i32, y: i32, state: bool) {
        if x >= 0 && y >= 0 {
            self.set_pixel(x as usize, y as usize, state);
        }
    }

    pub(crate) fn iter_rows_as_bitslices_mut(
        &mut self,
    ) -> impl Iterator<Item = &mut BitSlice<Lsb0, u8>> {
        self.0
            .chunks_mut(ROW_LENGTH)
            .map(|row| row.view_bits_mut::<Lsb0>())
    }
}

#[cfg(feature = "embedded-graphics")]
impl DrawTarget<BinaryColor> for Frame {
    type Error = core::convert::Infallible;

    fn draw_pixel(&mut self, item: Pixel<BinaryColor>) -> Result<(), Self::Error> {
        let Pixel(point, color) = item;
        self.plot(point.x, point.y, color == BinaryColor::On);
        Ok(())
    }

    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

#[cfg(test)]
impl Frame {
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}
