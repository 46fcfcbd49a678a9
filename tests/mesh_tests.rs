// Host-side tests for the procedural geometry.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/mesh.rs"]
mod mesh;

use mesh::*;

#[test]
fn icosphere_vertex_count_follows_the_subdivision_formula() {
    // 10 * 4^n + 2 unique vertices when edge midpoints are shared
    for n in 0..3u32 {
        let (vertices, indices) = icosphere(1.0, n);
        let vertex_count = vertices.len() / HERO_VERTEX_FLOATS;
        assert_eq!(vertex_count, 10 * 4usize.pow(n) + 2, "subdiv {}", n);
        assert_eq!(indices.len(), 20 * 4usize.pow(n) * 3, "subdiv {}", n);
    }
}

#[test]
fn icosphere_vertices_sit_on_the_sphere_with_unit_normals() {
    let radius = 1.65;
    let (vertices, indices) = icosphere(radius, 2);
    let count = vertices.len() / HERO_VERTEX_FLOATS;
    for i in 0..count {
        let v = &vertices[i * HERO_VERTEX_FLOATS..(i + 1) * HERO_VERTEX_FLOATS];
        let p = glam::Vec3::new(v[0], v[1], v[2]);
        let n = glam::Vec3::new(v[3], v[4], v[5]);
        assert!((p.length() - radius).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-4);
        // normal points along the position for a sphere
        assert!(p.normalize().dot(n) > 0.9999);
    }
    for &i in &indices {
        assert!((i as usize) < count);
    }
}

#[test]
fn particle_ring_respects_its_bounds() {
    let particles = particle_ring(7);
    assert_eq!(particles.len(), PARTICLE_COUNT);
    for p in &particles {
        let radial = (p.position.x * p.position.x + p.position.z * p.position.z).sqrt();
        assert!(radial >= PARTICLE_RING_INNER - 1e-3);
        assert!(radial <= PARTICLE_RING_INNER + PARTICLE_RING_SPAN + 1e-3);
        assert!(p.position.y.abs() <= PARTICLE_Y_SPREAD / 2.0 + 1e-3);
        assert!(p.scale >= PARTICLE_SCALE_MIN - 1e-6);
        assert!(p.scale <= PARTICLE_SCALE_MIN + PARTICLE_SCALE_SPAN + 1e-6);
    }
}

#[test]
fn particle_ring_is_deterministic_per_seed() {
    let a = particle_ring(42);
    let b = particle_ring(42);
    let c = particle_ring(43);
    for (pa, pb) in a.iter().zip(&b) {
        assert_eq!(pa.position, pb.position);
        assert_eq!(pa.scale, pb.scale);
    }
    assert!(a.iter().zip(&c).any(|(pa, pc)| pa.position != pc.position));
}
