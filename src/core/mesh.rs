//! Procedural geometry for the backdrop: the hero icosphere and the seeded
//! ring of depth particles.

use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;

/// Hero sphere radius in world units.
pub const HERO_RADIUS: f32 = 1.65;
/// Midpoint subdivision passes applied to the base icosahedron.
pub const HERO_SUBDIVISIONS: u32 = 4;

/// Number of particles on the depth ring.
pub const PARTICLE_COUNT: usize = 260;
/// Inner ring radius; the band extends [`PARTICLE_RING_SPAN`] beyond it.
pub const PARTICLE_RING_INNER: f32 = 7.0;
pub const PARTICLE_RING_SPAN: f32 = 14.0;
/// Vertical spread of the ring (total, centered on y = 0).
pub const PARTICLE_Y_SPREAD: f32 = 7.0;
pub const PARTICLE_SCALE_MIN: f32 = 0.6;
pub const PARTICLE_SCALE_SPAN: f32 = 1.6;

/// Interleaved vertex: position xyz followed by unit normal xyz.
pub const HERO_VERTEX_FLOATS: usize = 6;

/// Builds a unit-normal icosphere of the given radius.
///
/// Returns interleaved `[px, py, pz, nx, ny, nz]` vertex data and a u32
/// triangle index list. Shared edge midpoints are deduplicated so vertex
/// count stays at `10 * 4^n + 2`.
pub fn icosphere(radius: f32, subdivisions: u32) -> (Vec<f32>, Vec<u32>) {
    let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let mut positions: Vec<Vec3> = [
        [-1.0, phi, 0.0],
        [1.0, phi, 0.0],
        [-1.0, -phi, 0.0],
        [1.0, -phi, 0.0],
        [0.0, -1.0, phi],
        [0.0, 1.0, phi],
        [0.0, -1.0, -phi],
        [0.0, 1.0, -phi],
        [phi, 0.0, -1.0],
        [phi, 0.0, 1.0],
        [-phi, 0.0, -1.0],
        [-phi, 0.0, 1.0],
    ]
    .iter()
    .map(|p| Vec3::from_slice(p).normalize())
    .collect();

    let mut faces: Vec<[u32; 3]> = vec![
        [0, 11, 5],
        [0, 5, 1],
        [0, 1, 7],
        [0, 7, 10],
        [0, 10, 11],
        [1, 5, 9],
        [5, 11, 4],
        [11, 10, 2],
        [10, 7, 6],
        [7, 1, 8],
        [3, 9, 4],
        [3, 4, 2],
        [3, 2, 6],
        [3, 6, 8],
        [3, 8, 9],
        [4, 9, 5],
        [2, 4, 11],
        [6, 2, 10],
        [8, 6, 7],
        [9, 8, 1],
    ];

    for _ in 0..subdivisions {
        let mut midpoints: FnvHashMap<(u32, u32), u32> = FnvHashMap::default();
        let mut next = Vec::with_capacity(faces.len() * 4);
        for [a, b, c] in faces {
            let ab = midpoint(&mut positions, &mut midpoints, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, c, a);
            next.push([a, ab, ca]);
            next.push([b, bc, ab]);
            next.push([c, ca, bc]);
            next.push([ab, bc, ca]);
        }
        faces = next;
    }

    let mut vertices = Vec::with_capacity(positions.len() * HERO_VERTEX_FLOATS);
    for p in &positions {
        let scaled = *p * radius;
        vertices.extend_from_slice(&[scaled.x, scaled.y, scaled.z, p.x, p.y, p.z]);
    }
    let indices = faces.iter().flatten().copied().collect();
    (vertices, indices)
}

fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut FnvHashMap<(u32, u32), u32>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&i) = cache.get(&key) {
        return i;
    }
    let mid = ((positions[a as usize] + positions[b as usize]) * 0.5).normalize();
    let i = positions.len() as u32;
    positions.push(mid);
    cache.insert(key, i);
    i
}

/// One depth particle: ring position and sprite scale.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub scale: f32,
}

/// Seeded ring of depth particles surrounding the hero.
pub fn particle_ring(seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..PARTICLE_COUNT)
        .map(|_| {
            let r = PARTICLE_RING_INNER + rng.gen::<f32>() * PARTICLE_RING_SPAN;
            let a = rng.gen::<f32>() * std::f32::consts::TAU;
            let y = (rng.gen::<f32>() - 0.5) * PARTICLE_Y_SPREAD;
            Particle {
                position: Vec3::new(a.cos() * r, y, a.sin() * r),
                scale: PARTICLE_SCALE_MIN + rng.gen::<f32>() * PARTICLE_SCALE_SPAN,
            }
        })
        .collect()
}
