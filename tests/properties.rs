//! Behavioural properties of the reveal engine, exercised through the public API.

use approx::assert_relative_eq;
use rstest::rstest;
use thermal_reveal::compositor::compose;
use thermal_reveal::diffuse::{diffuse_decay, neighbour_average};
use thermal_reveal::inject::{HeatStamp, inject_heat};
use thermal_reveal::{FrameBuffer, HeatGrid, PointerState, RevealConfig, RevealEngine};

fn config(cell_size: f32, radius: u32) -> RevealConfig {
    RevealConfig { cell_size, influence_radius: radius, ..RevealConfig::default() }
}

fn engine(w: f32, h: f32, config: RevealConfig) -> RevealEngine<FrameBuffer> {
    let mut e = RevealEngine::new(w, h, config).unwrap_or_else(|err| panic!("{err}"));
    e.set_image(FrameBuffer::filled(64, 48, 0x00AA_BBCC));
    e
}

/// Deterministic wandering pointer path (a Lissajous curve over the container).
fn wander(t: usize, w: f32, h: f32) -> (f32, f32) {
    let t = t as f32 * 0.07;
    (w * 0.5 * (1.0 + (3.0 * t).sin()), h * 0.5 * (1.0 + (2.0 * t).cos()))
}

#[test]
fn heat_stays_in_unit_range() {
    let cfg = RevealConfig { diffusion: 0.9, decay: 1.0, ..config(8.0, 6) };
    let mut e = engine(160.0, 120.0, cfg);
    for t in 0..400 {
        let (x, y) = wander(t, 160.0, 120.0);
        e.pointer_move(x, y);
        if t % 97 == 0 {
            e.pointer_leave();
        }
        e.step();
        assert!(
            e.grid().cells().iter().all(|&h| (0.0..=1.0).contains(&h)),
            "out of range at tick {t}"
        );
    }
}

#[test]
fn idle_field_fades_to_exact_zero_and_stays_there() {
    let mut e = engine(100.0, 100.0, config(10.0, 3));
    for t in 0..30 {
        let (x, y) = wander(t, 100.0, 100.0);
        e.pointer_move(x, y);
        e.step();
    }
    e.pointer_leave();
    assert!(!e.grid().is_cold());

    let mut max = e.grid().max_heat();
    let mut ticks = 0;
    while !e.grid().is_cold() {
        e.step();
        let now = e.grid().max_heat();
        assert!(now <= max, "peak rose from {max} to {now}");
        max = now;
        ticks += 1;
        assert!(ticks < 10_000, "never cooled down");
    }
    for _ in 0..50 {
        assert!(e.step().is_empty());
        assert!(e.grid().is_cold());
    }
}

#[test]
fn without_diffusion_every_cell_fades_monotonically() {
    let cfg = RevealConfig { diffusion: 0.0, decay: 0.9, ..config(10.0, 2) };
    let mut e = engine(60.0, 60.0, cfg);
    e.pointer_move(30.0, 30.0);
    e.step();
    e.pointer_leave();

    let mut prev = e.grid().clone();
    while !prev.is_cold() {
        e.step();
        for (before, after) in prev.cells().iter().zip(e.grid().cells()) {
            assert!(after <= before);
        }
        prev = e.grid().clone();
    }
}

#[test]
fn single_hot_cell_diffuses_symmetrically() {
    let n = 5;
    let mut g = HeatGrid::new(n, n);
    g.set(2, 2, 1.0);
    let mut next = HeatGrid::new(n, n);
    diffuse_decay(&g, &mut next, 0.15, 0.98);

    let last = n as i64 - 1;
    let at = |c: i64, r: i64| next.get(c, r).unwrap_or(f32::NAN);
    for r in 0..=last {
        for c in 0..=last {
            let h = at(c, r);
            assert_relative_eq!(h, at(last - c, r));
            assert_relative_eq!(h, at(c, last - r));
            assert_relative_eq!(h, at(r, c));
        }
    }
}

#[rstest]
#[case::corner(0, 0, 2)]
#[case::edge(2, 0, 3)]
#[case::interior(2, 2, 4)]
fn neighbour_count_depends_on_position(#[case] col: i64, #[case] row: i64, #[case] expected: usize) {
    let mut g = HeatGrid::new(4, 4);
    for r in 0..4 {
        for c in 0..4 {
            g.set(c, r, 0.6);
        }
    }
    let (avg, count) = neighbour_average(&g, col, row).unwrap_or_default();
    assert_eq!(count, expected);
    assert_relative_eq!(avg, 0.6, epsilon = 1e-6);
}

#[test]
fn threshold_gates_drawing() {
    let threshold = 0.25;
    let eps = 0.05;
    let mut g = HeatGrid::new(2, 1);
    g.set(0, 0, threshold);
    g.set(1, 0, threshold + eps);

    let mut out = Vec::new();
    compose(&g, Some((20, 10)), (20.0, 10.0), 10.0, threshold, &mut out);
    assert_eq!(out.len(), 1);
    assert_relative_eq!(out[0].dest.x, 10.0);
    assert_relative_eq!(out[0].alpha, eps / (1.0 - threshold), epsilon = 1e-6);

    let mut full = HeatGrid::new(1, 1);
    full.set(0, 0, 1.0);
    compose(&full, Some((10, 10)), (10.0, 10.0), 10.0, 0.0, &mut out);
    assert_eq!(out[0].alpha, 1.0);
}

#[rstest]
#[case(100.0, 100.0)]
#[case(37.0, 213.0)]
#[case(0.0, 50.0)]
#[case(-10.0, -10.0)]
fn resize_wipes_all_heat(#[case] w: f32, #[case] h: f32) {
    let mut e = engine(100.0, 100.0, config(10.0, 4));
    for t in 0..20 {
        let (x, y) = wander(t, 100.0, 100.0);
        e.pointer_move(x, y);
        e.step();
    }
    assert!(!e.grid().is_cold());

    e.pointer_leave();
    e.resize(w, h);
    assert!(e.grid().is_cold());
    assert!(e.step().is_empty());
    assert!(e.grid().is_cold());
}

#[test]
fn repeated_identical_resize_is_stable() {
    let mut e = engine(50.0, 30.0, config(10.0, 2));
    for _ in 0..3 {
        e.resize(50.0, 30.0);
        assert_eq!((e.grid().cols(), e.grid().rows()), (5, 3));
        assert!(e.grid().is_cold());
    }
}

#[test]
fn four_by_four_scenario() {
    // 40x40 container, 10 px cells, radius 1: only the pointer cell is heated.
    let mut g = HeatGrid::for_container(40.0, 40.0, 10.0).unwrap_or_else(|| panic!("grid"));
    assert_eq!((g.cols(), g.rows()), (4, 4));
    let pointer = PointerState { x: 20.0, y: 20.0, active: true };
    inject_heat(&mut g, &pointer, 10.0, &HeatStamp::new(1));

    assert_eq!(g.get(2, 2), Some(0.5));
    for (c, r) in [(1, 2), (3, 2), (2, 1), (2, 3), (1, 1), (3, 1), (1, 3), (3, 3)] {
        assert_eq!(g.get(c, r), Some(0.0));
    }

    let mut next = HeatGrid::new(4, 4);
    diffuse_decay(&g, &mut next, 0.15, 0.98);
    let centre = next.get(2, 2).unwrap_or_default();
    assert!(centre < 0.5 && centre > 0.4, "centre = {centre}");

    // Same tick through the engine.
    let mut e = engine(40.0, 40.0, RevealConfig { diffusion: 0.15, decay: 0.98, ..config(10.0, 1) });
    e.pointer_move(20.0, 20.0);
    e.step();
    assert_relative_eq!(e.grid().get(2, 2).unwrap_or_default(), centre);
}

#[test]
fn pointer_outside_the_container_is_silent() {
    let mut e = engine(40.0, 40.0, config(10.0, 2));
    e.pointer_move(-500.0, 900.0);
    assert!(e.step().is_empty());
    assert!(e.grid().is_cold());
}

#[test]
fn draw_requests_map_tiles_through_cover_transform() {
    // 64x48 image into 100x100: scale = 100/48, centred horizontally.
    // Radius 0 and a 0.3 threshold leave only the pointer cell visible.
    let mut e = engine(100.0, 100.0, RevealConfig { threshold: 0.3, ..config(10.0, 0) });
    e.pointer_move(55.0, 5.0);
    let requests = e.step().to_vec();
    assert_eq!(requests.len(), 1);

    let scale: f32 = 100.0 / 48.0;
    let x_offset = (100.0 - 64.0 * scale) / 2.0;
    let r = requests[0];
    assert_relative_eq!(r.dest.x, 50.0);
    assert_relative_eq!(r.dest.y, 0.0);
    assert_relative_eq!(r.src.x, (50.0 - x_offset) / scale, epsilon = 1e-4);
    assert_relative_eq!(r.src.y, 0.0, epsilon = 1e-4);
    assert_relative_eq!(r.src.w, 10.0 / scale, epsilon = 1e-5);
}
