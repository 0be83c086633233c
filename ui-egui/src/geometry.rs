// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screen-space layout of the three-sector board.
//!
//! Each sector is an 8x4 fan of quadrilaterals generated by linear
//! interpolation between three boundary lines (left flank, center line,
//! right flank). The three frames are plain coordinate tables computed
//! from the surface size; the 120-degree sector rotations are encoded
//! in those coordinates, so no trigonometry is needed per square.

use egui::Pos2;
use trichess_core::position::{BOARD_SQUARES, RANKS};
use trichess_core::Position;

/// Edge length of the fixed square drawing surface, in pixels.
pub const SURFACE_SIZE: f32 = 800.0;

fn lerp(a: Pos2, b: Pos2, t: f32) -> Pos2 {
    Pos2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// A boundary line segment of a sector.
#[derive(Debug, Clone, Copy)]
pub struct Flank {
    pub from: Pos2,
    pub to: Pos2,
}

impl Flank {
    fn at(&self, t: f32) -> Pos2 {
        lerp(self.from, self.to, t)
    }
}

/// The three boundary lines a sector's squares are interpolated from.
#[derive(Debug, Clone, Copy)]
pub struct SectorFrame {
    pub left: Flank,
    pub center: Flank,
    pub right: Flank,
}

/// Flank coordinate table for every sector, from the surface size.
///
/// `h` is a tenth of the surface, `v` is `h * sqrt(3)`; the endpoints
/// lie on the hex-like board outline.
pub fn sector_frames(size: f32) -> [SectorFrame; 3] {
    let h = size / 10.0;
    let v = h * 3.0f32.sqrt();
    let flank = |x1: f32, y1: f32, x2: f32, y2: f32| Flank {
        from: Pos2::new(x1 * h, y1 * v),
        to: Pos2::new(x2 * h, y2 * v),
    };
    [
        // Blue: top edge of the board, ranks growing downward
        SectorFrame {
            left: flank(7.0, 1.0, 8.0, 2.0),
            center: flank(5.0, 1.0, 5.0, 3.0),
            right: flank(3.0, 1.0, 2.0, 2.0),
        },
        // Green: lower right
        SectorFrame {
            left: flank(7.0, 5.0, 5.0, 5.0),
            center: flank(8.0, 4.0, 5.0, 3.0),
            right: flank(9.0, 3.0, 8.0, 2.0),
        },
        // Red: lower left
        SectorFrame {
            left: flank(1.0, 3.0, 2.0, 2.0),
            center: flank(2.0, 4.0, 5.0, 3.0),
            right: flank(3.0, 5.0, 5.0, 5.0),
        },
    ]
}

/// A square's screen polygon: corners in sector orientation (lower
/// left, lower right, upper right, upper left), the centroid, and the
/// concentric quad used to outline legal destinations.
#[derive(Debug, Clone)]
pub struct SquarePoly {
    pub corners: [Pos2; 4],
    pub centre: Pos2,
    pub highlight: [Pos2; 4],
}

impl SquarePoly {
    fn new(frame: &SectorFrame, rank: u8, file: u8) -> Self {
        // Files 0..4 span left flank to center line, files 4..8 span
        // center line to right flank.
        let (left, right) = if file < 4 {
            (&frame.left, &frame.center)
        } else {
            (&frame.center, &frame.right)
        };
        let base_t = rank as f32 / RANKS as f32;
        let top_t = (rank + 1) as f32 / RANKS as f32;
        let base = (left.at(base_t), right.at(base_t));
        let top = (left.at(top_t), right.at(top_t));

        let near = (file % 4) as f32 / 4.0;
        let far = (file % 4 + 1) as f32 / 4.0;
        let corners = [
            lerp(base.0, base.1, near),
            lerp(base.0, base.1, far),
            lerp(top.0, top.1, far),
            lerp(top.0, top.1, near),
        ];
        let centre = Pos2::new(
            corners.iter().map(|c| c.x).sum::<f32>() / 4.0,
            corners.iter().map(|c| c.y).sum::<f32>() / 4.0,
        );
        let highlight = corners.map(|c| lerp(centre, c, 0.75));
        Self {
            corners,
            centre,
            highlight,
        }
    }

    /// Crossing-number point-in-polygon test. The strict/non-strict
    /// comparison pair keeps shared vertices from being counted twice.
    pub fn contains(&self, p: Pos2) -> bool {
        let mut inside = false;
        let mut j = 3;
        for i in 0..4 {
            let a = self.corners[i];
            let b = self.corners[j];
            if (a.y > p.y) != (b.y > p.y)
                && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Polygons for all 96 squares, computed once per surface size.
pub struct BoardGeometry {
    squares: Vec<SquarePoly>,
}

impl BoardGeometry {
    pub fn new(size: f32) -> Self {
        let frames = sector_frames(size);
        let squares = Position::all()
            .map(|pos| {
                SquarePoly::new(&frames[pos.sector().index()], pos.rank(), pos.file())
            })
            .collect();
        Self { squares }
    }

    pub fn square(&self, pos: Position) -> &SquarePoly {
        &self.squares[pos.ordinal()]
    }

    /// Resolve a pointer location to the square containing it.
    ///
    /// Squares tile without overlap, so the first hit is the only one.
    pub fn square_at(&self, p: Pos2) -> Option<Position> {
        (0..BOARD_SQUARES)
            .find(|&i| self.squares[i].contains(p))
            .and_then(Position::from_ordinal)
    }
}
