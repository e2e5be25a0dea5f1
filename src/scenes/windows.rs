use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use super::buildings::Building;

pub const WINDOW_SIZE: f32 = 1.5;
pub const WINDOW_SPACING: f32 = 3.0;
pub const FIRST_ROW: f32 = 2.0;
pub const MARGIN: f32 = 1.5;
/// Just proud of the cube face (which sits at local z = 0.5)
pub const FACE_DEPTH: f32 = 0.51;
pub const THICKNESS: f32 = 0.1;
/// One in `LIT_ODDS` windows is lit
pub const LIT_ODDS: u32 = 3;

#[derive(Debug, Clone, Default)]
pub struct WindowTiles {
    pub lit: Vec<Mat4>,
    pub dark: Vec<Mat4>,
}

impl WindowTiles {
    pub fn len(&self) -> usize {
        self.lit.len() + self.dark.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn extend(&mut self, other: WindowTiles) {
        self.lit.extend(other.lit);
        self.dark.extend(other.dark);
    }
}

/// Window centres in building-local units: x across the face measured from
/// its centre, y up from the ground. Row-major, bottom row first.
pub fn window_cells(width: f32, height: f32) -> Vec<Vec2> {
    let rows = std::iter::successors(Some(FIRST_ROW), |y| Some(y + WINDOW_SPACING))
        .take_while(|&y| y < height - 2.0);

    rows.flat_map(|y| {
        std::iter::successors(Some(-width / 2.0 + MARGIN), |x| Some(x + WINDOW_SPACING))
            .take_while(move |&x| x < width / 2.0 - MARGIN)
            .map(move |x| Vec2::new(x, y))
    })
    .collect()
}

/// Thin quad on the building's +Z face for one cell.
///
/// The building transform already scales by (w, h, w), so the local offset
/// and size are divided back out to stay in world units.
pub fn window_transform(building: &Building, cell: Vec2) -> Mat4 {
    let (w, h) = (building.width, building.height);
    building.transform
        * Mat4::from_translation(Vec3::new(cell.x / w, (cell.y - h / 2.0) / h, FACE_DEPTH))
        * Mat4::from_scale(Vec3::new(WINDOW_SIZE / w, WINDOW_SIZE / h, THICKNESS))
}

/// Tiles every cell, drawing once per window to decide lit or dark
pub fn tile_windows<R: Rng + ?Sized>(building: &Building, rng: &mut R) -> WindowTiles {
    let mut tiles = WindowTiles::default();
    for cell in window_cells(building.width, building.height) {
        let transform = window_transform(building, cell);
        if rng.gen_range(0..LIT_ODDS) == 0 {
            tiles.lit.push(transform);
        } else {
            tiles.dark.push(transform);
        }
    }
    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::CubicBezier;
    use crate::scenes::buildings::place_building;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_narrowest_lowest_building_has_two_windows() {
        let cells = window_cells(4.0, 10.0);
        assert_eq!(cells, vec![Vec2::new(-0.5, 2.0), Vec2::new(-0.5, 5.0)]);
    }

    #[test]
    fn test_widest_tallest_building_grid() {
        // 14 rows (y = 2 .. 41) by 2 columns (x = -2.5, 0.5)
        let cells = window_cells(8.0, 46.0);
        assert_eq!(cells.len(), 28);
        assert_eq!(cells[1], Vec2::new(0.5, 2.0));
        assert_eq!(cells.last().copied(), Some(Vec2::new(0.5, 41.0)));
    }

    #[test]
    fn test_cells_stay_inside_margins() {
        for width in 4..9 {
            for cell in window_cells(width as f32, 30.0) {
                assert!(cell.x >= -(width as f32) / 2.0 + MARGIN);
                assert!(cell.x < width as f32 / 2.0 - MARGIN);
                assert!(cell.y < 28.0);
            }
        }
    }

    #[test]
    fn test_window_sits_on_front_face() {
        let anchor = CubicBezier::road().sample(20).next().unwrap();
        let building = place_building(0, &anchor, 5.0, 4.0, 10.0);
        let window = window_transform(&building, Vec2::new(-0.5, 2.0));
        let centre = window.w_axis.truncate();

        // Height above ground is the cell's y
        assert!((centre.y - 2.0).abs() < 1e-4);
        // Front face points along +X at t = 0, sitting just past half the width
        let local = centre - building.centre();
        assert!((local.x - FACE_DEPTH * 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_every_cell_is_lit_or_dark() {
        let anchor = CubicBezier::road().sample(20).next().unwrap();
        let building = place_building(0, &anchor, 5.0, 8.0, 46.0);
        let mut rng = StdRng::seed_from_u64(3);
        let tiles = tile_windows(&building, &mut rng);
        assert_eq!(tiles.len(), 28);
        assert!(!tiles.lit.is_empty());
        assert!(!tiles.dark.is_empty());
    }
}
