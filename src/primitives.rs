//! Low-level scalar and memory helpers used by the simulation and the renderer.
//!
//! They sit behind a trait so the game logic never depends on how they are
//! carried out. `NativePrimitives` is the plain Rust implementation.

pub trait Primitives {
    /// Returns `x - 1`. Wraps at `i32::MIN` instead of panicking.
    fn dec(&self, x: i32) -> i32;

    /// Returns `a + b`, clamped at `u32::MAX`.
    fn sat_add_u32(&self, a: u32, b: u32) -> u32;

    /// Writes `value` into the first `count` cells of `buffer`.
    /// A `count` past the end of the buffer is clamped to its length.
    fn fill(&self, buffer: &mut [char], value: char, count: usize);

    /// Same contract as `fill`, used for single canvas rows.
    fn fill_row(&self, row: &mut [char], ch: char, count: usize);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NativePrimitives;

impl Primitives for NativePrimitives {
    fn dec(&self, x: i32) -> i32 {
        x.wrapping_sub(1)
    }

    fn sat_add_u32(&self, a: u32, b: u32) -> u32 {
        a.saturating_add(b)
    }

    fn fill(&self, buffer: &mut [char], value: char, count: usize) {
        let n = count.min(buffer.len());
        buffer[..n].fill(value);
    }

    fn fill_row(&self, row: &mut [char], ch: char, count: usize) {
        let n = count.min(row.len());
        row[..n].fill(ch);
    }
}
