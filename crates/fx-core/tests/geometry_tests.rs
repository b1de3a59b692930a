// Host-side tests for the procedural geometry generators.

use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

#[test]
fn point_cloud_length_is_three_per_point() {
    let mut rng = StdRng::seed_from_u64(1);
    let palette = Palette::from_hex(&[CYAN, PINK]);
    for count in [0usize, 1, 7, 700, 4000] {
        let buf = generate_point_cloud(count, VolumeBounds::cube(40.0), &palette, &mut rng);
        assert_eq!(buf.positions.len(), 3 * count);
        assert_eq!(buf.colors.as_ref().map(|c| c.len()), Some(3 * count));
        assert_eq!(buf.len(), count);
    }
}

#[test]
fn point_cloud_without_palette_has_no_colors() {
    let mut rng = StdRng::seed_from_u64(2);
    let buf = generate_point_cloud(50, VolumeBounds::cube(10.0), &Palette::empty(), &mut rng);
    assert_eq!(buf.positions.len(), 150);
    assert!(buf.colors.is_none());
}

#[test]
fn point_cloud_zero_count_is_empty_not_error() {
    let mut rng = StdRng::seed_from_u64(3);
    let buf = generate_point_cloud(0, VolumeBounds::cube(40.0), &Palette::from_hex(&[CYAN]), &mut rng);
    assert!(buf.is_empty());
    assert_eq!(buf.colors, Some(Vec::new()));
}

#[test]
fn point_cloud_stays_inside_bounds() {
    let mut rng = StdRng::seed_from_u64(4);
    let bounds = VolumeBounds::new(40.0, 10.0, 2.0);
    let buf = generate_point_cloud(2000, bounds, &Palette::empty(), &mut rng);
    for i in 0..buf.len() {
        assert!(bounds.contains(buf.position(i)), "point {i} outside bounds");
    }
}

#[test]
fn point_cloud_same_seed_is_byte_identical() {
    let palette = Palette::from_hex(&[CYAN]);
    let a = generate_point_cloud(700, VolumeBounds::new(40.0, 40.0, 40.0), &palette, &mut StdRng::seed_from_u64(42));
    let b = generate_point_cloud(700, VolumeBounds::new(40.0, 40.0, 40.0), &palette, &mut StdRng::seed_from_u64(42));
    let bits = |v: &[f32]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.positions), bits(&b.positions));
    assert_eq!(
        bits(a.colors.as_deref().unwrap()),
        bits(b.colors.as_deref().unwrap())
    );

    let c = generate_point_cloud(700, VolumeBounds::new(40.0, 40.0, 40.0), &palette, &mut StdRng::seed_from_u64(43));
    assert_ne!(bits(&a.positions), bits(&c.positions));
}

#[test]
fn point_cloud_colors_come_from_palette() {
    let palette = Palette::from_hex(&[CYAN, VIOLET]);
    let buf = generate_point_cloud(300, VolumeBounds::cube(5.0), &palette, &mut StdRng::seed_from_u64(5));
    let mut seen = [false; 2];
    for i in 0..buf.len() {
        let c = buf.color(i).unwrap();
        let idx = palette.colors().iter().position(|p| *p == c);
        assert!(idx.is_some(), "color {c:?} not in palette");
        seen[idx.unwrap()] = true;
    }
    assert!(seen[0] && seen[1], "both palette entries should appear in 300 draws");
}

#[test]
fn helix_points_lie_on_radius() {
    for turns in [0.5_f32, 1.0, 6.0] {
        let buf = generate_helix_strand(20, turns, 8.0, 80.0, 0.3, Rgb::from_hex(CYAN));
        assert!(!buf.is_empty());
        for i in 0..buf.len() {
            let p = buf.position(i);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 8.0).abs() < 1e-4, "sample {i} radius {r}");
        }
    }
}

#[test]
fn helix_height_spans_half_extents() {
    let buf = generate_helix_strand(20, 6.0, 8.0, 80.0, 0.0, Rgb::WHITE);
    assert_eq!(buf.len(), 120);
    let first = buf.position(0);
    let last = buf.position(buf.len() - 1);
    assert!((first.y + 40.0).abs() < 1e-4);
    assert!(last.y < 40.0 && last.y > 38.0);
    for i in 1..buf.len() {
        assert!(buf.position(i).y > buf.position(i - 1).y, "height must increase");
    }
}

#[test]
fn helix_phase_offset_produces_opposite_strand() {
    let a = generate_helix_strand(20, 6.0, 8.0, 80.0, 0.0, Rgb::WHITE);
    let b = generate_helix_strand(20, 6.0, 8.0, 80.0, PI, Rgb::WHITE);
    for i in 0..a.len() {
        let (pa, pb) = (a.position(i), b.position(i));
        assert!((pa.x + pb.x).abs() < 1e-3);
        assert!((pa.z + pb.z).abs() < 1e-3);
        assert!((pa.y - pb.y).abs() < 1e-6);
    }
}

#[test]
fn helix_strand_colors_are_uniform() {
    let color = Rgb::from_hex(VIOLET);
    let buf = generate_helix_strand(10, 2.0, 1.0, 4.0, 0.0, color);
    for i in 0..buf.len() {
        assert_eq!(buf.color(i), Some(color));
    }
}

#[test]
fn spiral_disc_respects_radii_and_thickness() {
    let mut rng = StdRng::seed_from_u64(9);
    let buf = generate_spiral_disc(1500, 12.0, 20.0, 4.0, &Palette::from_hex(&[CYAN, PINK]), &mut rng);
    assert_eq!(buf.positions.len(), 4500);
    for i in 0..buf.len() {
        let p = buf.position(i);
        let r = (p.x * p.x + p.z * p.z).sqrt();
        assert!(r >= 12.0 - 1e-3 && r < 20.0 + 1e-3, "radius {r}");
        assert!(p.y.abs() <= 2.0, "jitter {}", p.y);
    }
}

#[test]
fn spiral_disc_zero_count() {
    let buf = generate_spiral_disc(0, 12.0, 20.0, 4.0, &Palette::empty(), &mut StdRng::seed_from_u64(0));
    assert!(buf.is_empty());
    assert!(buf.colors.is_none());
}

#[test]
fn scatter_placements_within_ranges() {
    let mut rng = StdRng::seed_from_u64(11);
    let placements = scatter_placements(20, VolumeBounds::cube(60.0), (1.0, 3.0), &mut rng);
    assert_eq!(placements.len(), 20);
    for t in &placements {
        assert!(VolumeBounds::cube(60.0).contains(t.position));
        assert!(t.scale.x >= 1.0 && t.scale.x <= 3.0);
        assert_eq!(t.scale.x, t.scale.y);
        for a in t.rotation.to_array() {
            assert!((0.0..=PI).contains(&a));
        }
    }
}

#[test]
fn size_attribute_in_unit_range() {
    let sizes = generate_size_attribute(700, &mut StdRng::seed_from_u64(12));
    assert_eq!(sizes.len(), 700);
    assert!(sizes.iter().all(|s| (0.0..1.0).contains(s)));
}
