use ndarray::Array2;

/// Circular membership mask over a raster.
///
/// A pixel belongs to the mask iff its squared distance from `center` is
/// at most `radius^2`. `count` is the exact number of member pixels inside
/// the raster bounds and is the only denominator used for lit fractions.
#[derive(Clone, Debug)]
pub struct CircleMask {
    /// Membership, shape = (height, width).
    pub data: Array2<bool>,
    pub count: usize,
    /// (x, y) = (col, row) in raster coordinates. May lie outside the raster.
    pub center: (i64, i64),
    pub radius: u32,
}

impl CircleMask {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.data.get((row, col)).copied().unwrap_or(false)
    }

    /// True for member pixels with a 4-neighbour outside the circle.
    /// Raster edges do not count as boundary.
    pub fn is_boundary(&self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let (r, c) = (row as i64, col as i64);
        [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
            .iter()
            .any(|&(nr, nc)| !inside_circle(nc, nr, self.center, self.radius))
    }
}

/// Mask center: raster center (integer division) shifted by the offsets.
pub fn mask_center(width: usize, height: usize, offset_x: i32, offset_y: i32) -> (i64, i64) {
    (
        (width / 2) as i64 + offset_x as i64,
        (height / 2) as i64 + offset_y as i64,
    )
}

/// Build the mask for a `height` x `width` raster, clipping the disk to the bounds.
pub fn build_mask(height: usize, width: usize, center: (i64, i64), radius: u32) -> CircleMask {
    let mut data = Array2::<bool>::from_elem((height, width), false);
    let mut count = 0usize;

    let (cx, cy) = center;
    let r = radius as i64;
    let row_lo = (cy - r).max(0);
    let row_hi = (cy + r).min(height as i64 - 1);
    let col_lo = (cx - r).max(0);
    let col_hi = (cx + r).min(width as i64 - 1);

    for row in row_lo..=row_hi {
        for col in col_lo..=col_hi {
            if inside_circle(col, row, center, radius) {
                data[[row as usize, col as usize]] = true;
                count += 1;
            }
        }
    }

    CircleMask {
        data,
        count,
        center,
        radius,
    }
}

fn inside_circle(x: i64, y: i64, center: (i64, i64), radius: u32) -> bool {
    let dx = x - center.0;
    let dy = y - center.1;
    let r = radius as i64;
    dx * dx + dy * dy <= r * r
}
