//! Seeded tile colors.
//!
//! Each tile rank gets a color sampled from three phase-shifted sine waves
//! (one per channel) whose center and amplitude drift with each full cycle,
//! so boards with many ranks keep getting new colors. All randomness comes
//! from a seeded `ChaCha8Rng`, which makes a palette reproducible from
//! `(dim, seed)`.

use std::f64::consts::PI;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::fb::Rgb;
use crate::types::{tile_rank, Cell};

/// Background for empty cells.
pub const EMPTY_TILE: Rgb = Rgb::new(58, 56, 66);

const DARK_TEXT: Rgb = Rgb::new(24, 24, 30);
const LIGHT_TEXT: Rgb = Rgb::new(245, 245, 245);

/// Manhattan RGB distance under which a new color is nudged away from an
/// earlier one.
const MIN_COLOR_DISTANCE: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct TilePalette {
    cycle_len: u32,
    offset: u32,
    centers: [f64; 3],
    widths: [f64; 3],
    phases: [f64; 3],
    depth_center: [f64; 3],
    depth_width: [f64; 3],
    noise: Vec<f64>,
    /// Colors for ranks `1..=colors.len()`.
    colors: Vec<Rgb>,
}

impl TilePalette {
    /// Build a palette for a `dim x dim` board.
    ///
    /// Colors for every rank reachable on the board (`1..=dim*dim + 1`) are
    /// computed up front.
    pub fn new(dim: usize, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let area = dim.saturating_mul(dim).max(1);

        let cycle_len = (dim as f64 + 1.0 + rng.gen::<f64>() * area as f64).floor();
        let cycle_len = (cycle_len as u32).max(1);
        let offset = rng.gen_range(0..cycle_len);

        let centers = random_triple(&mut rng, 30.0, 280.0);
        let widths = random_triple(&mut rng, 10.0, 80.0);
        let mut phases = accumulate(random_triple(&mut rng, 1.0, 8.0));
        phases.shuffle(&mut rng);
        let depth_center = random_triple(&mut rng, 0.0, 100.0);
        let depth_width = random_triple(&mut rng, 0.0, 100.0);
        let noise = (0..area * 3).map(|_| rng.gen_range(-30.0..30.0)).collect();

        let mut palette = Self {
            cycle_len,
            offset,
            centers,
            widths,
            phases,
            depth_center,
            depth_width,
            noise,
            colors: Vec::with_capacity(area + 1),
        };

        for rank in 1..=(area as u32 + 1) {
            let raw = palette.raw(rank);
            let color = fuzz(raw, &palette.colors, &mut rng);
            palette.colors.push(to_rgb(color));
        }
        palette
    }

    /// Color for a tile rank (`log2` of the tile value). Rank 0 is empty.
    pub fn color(&self, rank: u32) -> Rgb {
        if rank == 0 {
            return EMPTY_TILE;
        }
        match self.colors.get(rank as usize - 1) {
            Some(c) => *c,
            None => to_rgb(self.raw(rank)),
        }
    }

    pub fn tile_color(&self, value: u32) -> Rgb {
        self.color(tile_rank(value))
    }

    pub fn cell_color(&self, cell: Cell) -> Rgb {
        cell.map_or(EMPTY_TILE, |v| self.tile_color(v))
    }

    fn raw(&self, rank: u32) -> [f64; 3] {
        let pos = (rank - 1).saturating_add(self.offset);
        std::array::from_fn(|ch| self.channel(pos, ch))
    }

    fn channel(&self, pos: u32, ch: usize) -> f64 {
        let len = f64::from(self.cycle_len);
        let step = 2.0 * PI / len;
        let depth = f64::from(pos / self.cycle_len);
        let center = self.centers[ch] + depth * self.depth_center[ch];
        let width = self.widths[ch] + depth * self.depth_width[ch];
        let noise = self.noise[(pos as usize * 3 + ch) % self.noise.len()];
        ((f64::from(pos) * step + self.phases[ch]).sin() * width + center + noise).rem_euclid(255.0)
    }
}

/// Readable text color on top of `bg`.
pub fn text_color(bg: Rgb) -> Rgb {
    if bg.luma() > 150 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

fn random_triple(rng: &mut ChaCha8Rng, min: f64, max: f64) -> [f64; 3] {
    std::array::from_fn(|_| rng.gen_range(min..max))
}

/// Exclusive prefix sums.
fn accumulate(values: [f64; 3]) -> [f64; 3] {
    [0.0, values[0], values[0] + values[1]]
}

fn fuzz(mut rgb: [f64; 3], seen: &[Rgb], rng: &mut ChaCha8Rng) -> [f64; 3] {
    for other in seen {
        let distance = (rgb[0] - f64::from(other.r)).abs()
            + (rgb[1] - f64::from(other.g)).abs()
            + (rgb[2] - f64::from(other.b)).abs();
        if distance < MIN_COLOR_DISTANCE {
            for c in rgb.iter_mut() {
                *c = (*c + rng.gen_range(30.0..50.0)).rem_euclid(255.0);
            }
        }
    }
    rgb
}

fn to_rgb(c: [f64; 3]) -> Rgb {
    Rgb::new(c[0] as u8, c[1] as u8, c[2] as u8)
}
