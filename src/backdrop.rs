use rand::Rng;

/// Decorative layer behind every screen: a field of drifting glyphs
/// (shapes, operators, digits) whose positions come from a seeded
/// generator so each theme always looks the same. Purely cosmetic; no
/// interaction with quiz logic.

/// Mulberry32-style mixer. Deterministic per seed; good enough for
/// ornament placement, not a general-purpose RNG.
#[derive(Clone, Copy, Debug)]
pub struct SeededRand {
    state: u32,
}

impl SeededRand {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next sample in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    fn in_range(&mut self, range: (f64, f64)) -> f64 {
        range.0 + self.next_f64() * (range.1 - range.0)
    }
}

/// Stable positive seed derived from a theme name.
pub fn theme_seed(name: &str) -> u32 {
    let mut h: i32 = 0;
    for c in name.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as i32);
    }
    h.unsigned_abs().wrapping_add(1).max(1)
}

pub type Position = [f64; 3];

/// Sample `count` positions inside the given ranges, rejecting samples
/// closer than `min_radius` to the origin in the x/y plane. After
/// `count * 20` rejections the remainder is filled without the radius
/// constraint, so the result never has fewer than `count` entries.
pub fn generate_positions(
    count: usize,
    x_range: (f64, f64),
    y_range: (f64, f64),
    z_range: (f64, f64),
    seed: u32,
    min_radius: f64,
) -> Vec<Position> {
    let mut rand = SeededRand::new(seed);
    let mut positions: Vec<Position> = Vec::with_capacity(count);
    let max_tries = count * 20;
    let mut tries = 0;
    while positions.len() < count && tries < max_tries {
        tries += 1;
        let x = rand.in_range(x_range);
        let y = rand.in_range(y_range);
        let z = rand.in_range(z_range);
        if min_radius > 0.0 && x * x + y * y < min_radius * min_radius {
            continue;
        }
        positions.push([x, y, z]);
    }
    // Fill the remainder unconstrained if the radius starved the sampler.
    let mut rng = rand::thread_rng();
    while positions.len() < count {
        positions.push([
            rng.gen_range(x_range.0..x_range.1),
            rng.gen_range(y_range.0..y_range.1),
            rng.gen_range(z_range.0..z_range.1),
        ]);
    }
    positions
}

/// One drifting ornament.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub pos: Position,
    pub drift: (f64, f64),
    pub symbol: char,
    pub color_index: usize,
}

/// World-space extents the glyph field lives in; the renderer maps these
/// onto the terminal area and uses depth for dimming.
pub const X_RANGE: (f64, f64) = (-12.0, 12.0);
pub const Y_RANGE: (f64, f64) = (-7.0, 7.0);
pub const Z_RANGE: (f64, f64) = (-12.0, -6.0);

const SHAPE_SYMBOLS: [char; 3] = ['■', '●', '◆'];
const OPERATOR_SYMBOLS: [char; 4] = ['+', '-', '×', ':'];

#[derive(Debug, Clone)]
pub struct Backdrop {
    pub glyphs: Vec<Glyph>,
}

impl Backdrop {
    /// Build the glyph field for a theme. The same theme (or explicit
    /// seed) always produces the same field.
    pub fn new(theme: &str, seed_override: Option<u32>) -> Self {
        let base = seed_override.unwrap_or_else(|| theme_seed(theme));
        let mut glyphs = Vec::new();

        let spawn = |count: usize,
                     seed: u32,
                     min_radius: f64,
                     symbol_at: &dyn Fn(usize) -> char,
                     glyphs: &mut Vec<Glyph>| {
            let positions =
                generate_positions(count, X_RANGE, Y_RANGE, Z_RANGE, seed, min_radius);
            let mut drift_rand = SeededRand::new(seed ^ 0x5F37_59DF);
            for (i, pos) in positions.into_iter().enumerate() {
                glyphs.push(Glyph {
                    pos,
                    drift: (
                        (drift_rand.next_f64() - 0.5) * 0.12,
                        (drift_rand.next_f64() - 0.5) * 0.08,
                    ),
                    symbol: symbol_at(i),
                    color_index: (drift_rand.next_f64() * 8.0) as usize % 8,
                });
            }
        };

        // Seed offsets keep the ornament families decorrelated per theme.
        spawn(8, base.wrapping_add(11), 3.0, &|i| SHAPE_SYMBOLS[i % 3], &mut glyphs);
        spawn(6, base.wrapping_add(23), 2.5, &|_| '○', &mut glyphs);
        spawn(4, base.wrapping_add(37), 3.5, &|_| '◎', &mut glyphs);
        spawn(
            14,
            base.wrapping_add(53),
            2.0,
            &|i| OPERATOR_SYMBOLS[i % OPERATOR_SYMBOLS.len()],
            &mut glyphs,
        );
        spawn(
            10,
            base.wrapping_add(77),
            2.5,
            &|i| char::from_digit((i % 10) as u32, 10).unwrap_or('0'),
            &mut glyphs,
        );

        Self { glyphs }
    }

    /// Advance the drift animation by one tick, wrapping at the field edges.
    pub fn advance(&mut self) {
        for glyph in &mut self.glyphs {
            glyph.pos[0] = wrap(glyph.pos[0] + glyph.drift.0, X_RANGE);
            glyph.pos[1] = wrap(glyph.pos[1] + glyph.drift.1, Y_RANGE);
        }
    }
}

fn wrap(v: f64, range: (f64, f64)) -> f64 {
    let span = range.1 - range.0;
    if v < range.0 {
        v + span
    } else if v > range.1 {
        v - span
    } else {
        v
    }
}
