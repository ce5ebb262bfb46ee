use glam::Vec2;

/// Interpolates from `a` towards `b` by `t`, rounding the result down.
///
/// `t` is clamped to `[0, 1]`, so the result always lies between `a` and `b`.
pub fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let t = t.clamp(0.0, 1.0);
    if a <= b {
        a + ((b - a) as f32 * t) as u8
    } else {
        a - ((a - b) as f32 * t).ceil() as u8
    }
}

/// The part of `center - half ..= center + half` that lies in `0..len`.
fn clip_span(center: i64, half: i64, len: usize) -> Option<std::ops::Range<usize>> {
    let last = i64::try_from(len).unwrap_or(i64::MAX) - 1;
    let start = center.saturating_sub(half).max(0);
    let end = center.saturating_add(half).min(last);
    (start <= end).then(|| start as usize..end as usize + 1)
}

/// Row-major grid of trail intensities. Index = `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailMap {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl TrailMap {
    pub fn new(width: usize, height: usize) -> Self {
        TrailMap {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    fn calculate_index(&self, x: i64, y: i64) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
            Some(y as usize * self.width + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.calculate_index(x, y).map(|idx| self.cells[idx])
    }

    pub fn set(&mut self, x: i64, y: i64, value: u8) -> bool {
        if let Some(idx) = self.calculate_index(x, y) {
            self.cells[idx] = value;
            true
        } else {
            false
        }
    }

    /// Mean of the 3x3 neighborhood around `index`, center included.
    ///
    /// Out-of-grid neighbors are skipped but the sum is still divided by 9,
    /// so border cells decay faster than interior ones.
    pub fn neighborhood_mean(&self, index: usize) -> u8 {
        let x = (index % self.width) as i64;
        let y = (index / self.width) as i64;

        let mut sum: u16 = 0;
        for offset_y in -1..=1 {
            for offset_x in -1..=1 {
                if let Some(value) = self.get(x + offset_x, y + offset_y) {
                    sum += value as u16;
                }
            }
        }
        (sum / 9) as u8
    }

    /// Blurs the map towards the neighborhood mean by `rate`, then evaporates.
    ///
    /// Runs in place in increasing index order: neighbors already visited in this
    /// pass contribute their new value, later ones their old value. The resulting
    /// raster-order drift is part of the model.
    pub fn diffuse(&mut self, rate: f32, evaporation: u8) {
        for index in 0..self.cells.len() {
            let mean = self.neighborhood_mean(index);
            let blurred = lerp(self.cells[index], mean, rate);
            self.cells[index] = blurred.saturating_sub(evaporation);
        }
    }

    /// Sum of the square window of half-width `half_size` centered on `(cx, cy)`.
    /// Cells outside the grid contribute nothing.
    pub fn window_sum(&self, cx: i64, cy: i64, half_size: usize) -> u32 {
        let half = i64::try_from(half_size).unwrap_or(i64::MAX);
        let (Some(xs), Some(ys)) = (
            clip_span(cx, half, self.width),
            clip_span(cy, half, self.height),
        ) else {
            return 0;
        };

        let mut sum: u32 = 0;
        for y in ys {
            let row = &self.cells[y * self.width..(y + 1) * self.width];
            for &value in &row[xs.clone()] {
                sum += value as u32;
            }
        }
        sum
    }

    /// Overwrites the cell under `position` with `value`. Repeated deposits on one
    /// cell are idempotent. Returns `false` if the position is off the grid.
    pub fn deposit(&mut self, position: Vec2, value: u8) -> bool {
        let x = position.x as i64;
        let y = position.y as i64;
        self.set(x, y, value)
    }
}
