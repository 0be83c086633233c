// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layout properties of the 96-square board: every polygon is a sound
//! quadrilateral, neighbours share edges, the sectors are tiled without
//! gaps, and hit testing agrees with the polygons.

use egui::Pos2;
use trichess_core::{Color, Position};
use trichess_ui_egui::geometry::{sector_frames, BoardGeometry, SURFACE_SIZE};

const EPS: f32 = 1e-2;

fn lerp(a: Pos2, b: Pos2, t: f32) -> Pos2 {
    Pos2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
}

fn shoelace_area(points: &[Pos2]) -> f32 {
    let mut twice = 0.0;
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        twice += a.x * b.y - b.x * a.y;
    }
    (twice / 2.0).abs()
}

#[test]
fn every_square_is_a_sound_convex_quad() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    for pos in Position::all() {
        let poly = geometry.square(pos);
        assert!(
            shoelace_area(&poly.corners) > 100.0,
            "degenerate square at {pos}"
        );
        // Consistent turn direction at every corner means the quad is
        // convex, hence simple.
        let mut signs = Vec::new();
        for i in 0..4 {
            let a = poly.corners[i];
            let b = poly.corners[(i + 1) % 4];
            let c = poly.corners[(i + 2) % 4];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            signs.push(cross > 0.0);
        }
        assert!(
            signs.iter().all(|&s| s == signs[0]),
            "non-convex square at {pos}"
        );
    }
}

#[test]
fn neighbours_share_edges_exactly() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    for pos in Position::all() {
        let poly = geometry.square(pos);
        if pos.file() + 1 < 8 {
            let east = geometry.square(Position::new(pos.sector(), pos.rank(), pos.file() + 1));
            assert!(close(poly.corners[1], east.corners[0]), "base seam at {pos}");
            assert!(close(poly.corners[2], east.corners[3]), "top seam at {pos}");
        }
        if pos.rank() + 1 < 4 {
            let fwd = geometry.square(Position::new(pos.sector(), pos.rank() + 1, pos.file()));
            assert!(close(poly.corners[3], fwd.corners[0]), "rank seam at {pos}");
            assert!(close(poly.corners[2], fwd.corners[1]), "rank seam at {pos}");
        }
    }
}

#[test]
fn squares_tile_each_half_sector_without_gaps() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    let frames = sector_frames(SURFACE_SIZE);
    for sector in Color::ALL {
        let frame = &frames[sector.index()];
        let halves = [
            ([frame.left, frame.center], 0u8..4),
            ([frame.center, frame.right], 4u8..8),
        ];
        for (flanks, files) in halves {
            let outline = [
                flanks[0].from,
                flanks[1].from,
                flanks[1].to,
                flanks[0].to,
            ];
            let half_area = shoelace_area(&outline);
            let mut squares_area = 0.0;
            for rank in 0..4 {
                for file in files.clone() {
                    let pos = Position::new(sector, rank, file);
                    squares_area += shoelace_area(&geometry.square(pos).corners);
                }
            }
            let gap = (half_area - squares_area).abs();
            assert!(
                gap < half_area * 1e-3,
                "tiling gap of {gap} px^2 in {sector} sector"
            );
        }
    }
}

#[test]
fn interior_points_resolve_to_their_own_square() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    for pos in Position::all() {
        let poly = geometry.square(pos);
        let mut samples = vec![poly.centre];
        for corner in poly.corners {
            samples.push(lerp(poly.centre, corner, 0.6));
        }
        for sample in samples {
            assert_eq!(geometry.square_at(sample), Some(pos), "sample in {pos}");
        }
    }
}

#[test]
fn highlight_quads_stay_inside_their_square() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    for pos in Position::all() {
        let poly = geometry.square(pos);
        for corner in poly.highlight {
            assert_eq!(geometry.square_at(corner), Some(pos), "inset of {pos}");
        }
    }
}

#[test]
fn points_off_the_board_resolve_to_none() {
    let geometry = BoardGeometry::new(SURFACE_SIZE);
    for point in [
        Pos2::new(2.0, 2.0),
        Pos2::new(SURFACE_SIZE - 2.0, 2.0),
        Pos2::new(2.0, SURFACE_SIZE - 2.0),
        Pos2::new(SURFACE_SIZE - 2.0, SURFACE_SIZE - 2.0),
        Pos2::new(SURFACE_SIZE / 2.0, 10.0),
        Pos2::new(-5.0, -5.0),
    ] {
        assert_eq!(geometry.square_at(point), None, "at {point:?}");
    }
}
