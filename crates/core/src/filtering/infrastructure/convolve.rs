use crate::shared::frame::CHANNELS;

/// Convolve a contiguous band of output rows with a 3x3 kernel.
///
/// `src` is the full input image (`width * height * 4` RGBA bytes); `out`
/// receives the rows starting at `y_start` and must be a whole number of
/// rows long. R, G and B are accumulated in `f32` against the nine
/// effective coefficients; alpha is copied from the source pixel untouched
/// so fully transparent neighbors never bleed color.
///
/// Border policy is clamp-to-edge: each neighbor coordinate is clamped to
/// the image bounds independently per axis. Channel values are rounded
/// half-away-from-zero (`f32::round`) and saturated to `0..=255` only at
/// the very end, so intermediate sums may exceed the byte range or go
/// negative without wrapping.
pub fn convolve_rows(
    src: &[u8],
    width: usize,
    height: usize,
    coefficients: &[f32; 9],
    y_start: usize,
    out: &mut [u8],
) {
    let row_bytes = width * CHANNELS;
    debug_assert_eq!(src.len(), row_bytes * height);
    debug_assert_eq!(out.len() % row_bytes, 0);
    debug_assert!(y_start + out.len() / row_bytes <= height);

    let max_x = width as isize - 1;
    let max_y = height as isize - 1;

    for (row, out_row) in out.chunks_exact_mut(row_bytes).enumerate() {
        let y = (y_start + row) as isize;
        for x in 0..width as isize {
            let mut acc = [0.0f32; 3];
            for dy in -1..=1isize {
                let sy = ((y + dy).clamp(0, max_y) as usize) * width;
                for dx in -1..=1isize {
                    let sx = (x + dx).clamp(0, max_x) as usize;
                    let weight = coefficients[((dy + 1) * 3 + dx + 1) as usize];
                    let sample = (sy + sx) * CHANNELS;
                    acc[0] += src[sample] as f32 * weight;
                    acc[1] += src[sample + 1] as f32 * weight;
                    acc[2] += src[sample + 2] as f32 * weight;
                }
            }
            let center = (y as usize * width + x as usize) * CHANNELS;
            let o = x as usize * CHANNELS;
            out_row[o] = acc[0].round().clamp(0.0, 255.0) as u8;
            out_row[o + 1] = acc[1].round().clamp(0.0, 255.0) as u8;
            out_row[o + 2] = acc[2].round().clamp(0.0, 255.0) as u8;
            out_row[o + 3] = src[center + 3];
        }
    }
}
