/// Procedural elevation for the terrain grid
///
/// Every term is continuous and bounded, so neighbouring samples never jump:
/// - low/mid/high sine octaves over the normalised grid
/// - a short-wavelength ripple in raw grid units
/// - a radial hill at the grid centre, tapered with smooth-step
/// - seeded Perlin fBm for small-scale detail
///
/// The sum is clamped to `floor`, so the surface never dips below that plane.
use noise::{NoiseFn, Perlin};
use std::f32::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct HeightProfile {
    /// Perlin permutation seed
    pub seed: u32,
    /// Elevation added at the centre of the radial hill
    pub hill_height: f32,
    /// Hill radius as a fraction of the larger half-extent of the grid
    pub hill_radius: f32,
    /// Amplitudes of the 1, 2 and 4 cycle sine octaves
    pub wave_amplitudes: [f32; 3],
    pub ripple_amplitude: f32,
    /// Ripple frequency in radians per grid cell
    pub ripple_frequency: f32,
    pub detail_amplitude: f32,
    /// Perlin input scale per grid cell for the first detail octave
    pub detail_scale: f64,
    pub detail_octaves: u32,
    /// Lowest elevation the surface may take
    pub floor: f32,
}

impl Default for HeightProfile {
    fn default() -> Self {
        Self {
            seed: 12345,
            hill_height: 4.0,
            hill_radius: 0.8,
            wave_amplitudes: [3.0, 1.5, 0.5],
            ripple_amplitude: 1.0,
            ripple_frequency: 0.15,
            detail_amplitude: 0.6,
            detail_scale: 0.09,
            detail_octaves: 3,
            floor: -3.0,
        }
    }
}

impl HeightProfile {
    /// Upper bound on |elevation| before the floor clamp.
    pub fn amplitude_bound(&self) -> f32 {
        let waves: f32 = self.wave_amplitudes.iter().map(|a| a.abs()).sum();
        let detail: f32 = (0..self.detail_octaves)
            .map(|o| self.detail_amplitude.abs() * 0.5f32.powi(o as i32))
            .sum();
        self.hill_height.abs() + waves + 2.0 * self.ripple_amplitude.abs() + detail
    }
}

/// Height sampler bound to one grid size.
/// Output depends only on `(x, z)`, the grid size and the profile.
pub struct HeightField {
    width: usize,
    depth: usize,
    profile: HeightProfile,
    perlin: Perlin,
}

impl HeightField {
    pub fn new(width: usize, depth: usize, profile: HeightProfile) -> Self {
        let perlin = Perlin::new(profile.seed);
        Self {
            width,
            depth,
            profile,
            perlin,
        }
    }

    pub fn profile(&self) -> &HeightProfile {
        &self.profile
    }

    /// Elevation at grid cell `(x, z)`.
    pub fn sample(&self, x: usize, z: usize) -> f32 {
        let x = x as f32;
        let z = z as f32;
        let p = &self.profile;

        let y = self.waves(x, z) + self.ripple(x, z) + self.hill(x, z) + self.detail(x, z);
        y.max(p.floor)
    }

    #[inline]
    fn waves(&self, x: f32, z: f32) -> f32 {
        let fx = x / self.width as f32;
        let fz = z / self.depth as f32;

        let mut frequency = 1.0;
        let mut y = 0.0;
        for amplitude in self.profile.wave_amplitudes {
            y += (fx * TAU * frequency).sin() * (fz * TAU * frequency).cos() * amplitude;
            frequency *= 2.0;
        }
        y
    }

    #[inline]
    fn ripple(&self, x: f32, z: f32) -> f32 {
        let f = self.profile.ripple_frequency;
        ((x * f).sin() + (z * f).cos()) * self.profile.ripple_amplitude
    }

    #[inline]
    fn hill(&self, x: f32, z: f32) -> f32 {
        let cx = (self.width as f32 - 1.0) * 0.5;
        let cz = (self.depth as f32 - 1.0) * 0.5;
        let radius = (cx.max(cz).max(1.0) * self.profile.hill_radius).max(f32::EPSILON);

        let dx = x - cx;
        let dz = z - cz;
        let d = (dx * dx + dz * dz).sqrt() / radius;
        self.profile.hill_height * (1.0 - smoothstep(0.0, 1.0, d))
    }

    #[inline]
    fn detail(&self, x: f32, z: f32) -> f32 {
        let p = &self.profile;
        let mut scale = p.detail_scale;
        let mut amplitude = p.detail_amplitude;
        let mut y = 0.0;
        for _ in 0..p.detail_octaves {
            let n = self.perlin.get([x as f64 * scale, z as f64 * scale]) as f32;
            y += n.clamp(-1.0, 1.0) * amplitude;
            scale *= 2.0;
            amplitude *= 0.5;
        }
        y
    }
}

/// Hermite smooth-step of `x` between `edge0` and `edge1`, clamped to [0, 1].
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
