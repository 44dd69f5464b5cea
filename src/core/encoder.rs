//! Encodes a local timestamp into an 8x8 grid of 3-bit color cells.
//!
//! Each scalar (hour, minute, second, scaled milliseconds, year offset,
//! month, day, weekday, moon age) is split into 3-bit groups, one group per
//! cell, least-significant group first. A 3-bit value maps to a color with
//! red carrying bit 0, green bit 1 and blue bit 2.

use crate::domain::model::LocalMoment;

/// Cells per grid axis.
pub const GRID_SIDE: u32 = 8;

/// One assigned cell: position in the grid plus its 3-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u32,
    pub y: u32,
    pub value: u8,
}

/// Fixed 8x8 grid of 3-bit cells. Assignments are kept in draw order
/// because the renderer's fill convention makes overdraw order-sensitive;
/// unassigned cells read as 0 (black).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellGrid {
    cells: Vec<Cell>,
}

impl CellGrid {
    fn set(&mut self, x: u32, y: u32, value: u8) {
        assert!(x < GRID_SIDE && y < GRID_SIDE, "cell out of grid");
        assert!(value < 8, "cell value must fit in 3 bits");
        self.cells.push(Cell { x, y, value });
    }

    /// Value of a cell, 0 if never assigned.
    pub fn value_at(&self, x: u32, y: u32) -> u8 {
        self.cells
            .iter()
            .rev()
            .find(|c| c.x == x && c.y == y)
            .map(|c| c.value)
            .unwrap_or(0)
    }

    /// Assigned cells in draw order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// RGB color of a 3-bit cell value.
pub fn cell_color(value: u8) -> [u8; 3] {
    [
        if value & (1 << 0) != 0 { 255 } else { 0 },
        if value & (1 << 1) != 0 { 255 } else { 0 },
        if value & (1 << 2) != 0 { 255 } else { 0 },
    ]
}

/// Deterministically encodes a moment into the fixed cell layout.
///
/// Row 0 carries the time of day, row 1 the date and weekday, row 2 the
/// moon age. The layout and bit splits are load-bearing: existing consumers
/// decode the image pixel-by-pixel.
pub fn encode(moment: &LocalMoment) -> CellGrid {
    let year = moment.year - 1900;
    let month = moment.month - 1;
    let day = moment.day;
    let hour = moment.hour;
    let minute = moment.minute;
    let second = moment.second;
    let ms = moment.millisecond * 64 / 1000;
    let weekday = moment.iso_weekday % 7;
    let moon_age = moon_age(moment.year, month, day);

    let mut grid = CellGrid::default();

    grid.set(0, 0, (hour & 0b111) as u8);
    grid.set(1, 0, (hour >> 3) as u8);
    grid.set(2, 0, (minute & 0b111) as u8);
    grid.set(3, 0, (minute >> 3) as u8);
    grid.set(4, 0, (second & 0b111) as u8);
    grid.set(5, 0, (second >> 3) as u8);
    grid.set(6, 0, (ms & 0b111) as u8);
    grid.set(7, 0, (ms >> 3) as u8);

    grid.set(0, 1, (year & 0b111) as u8);
    grid.set(1, 1, ((year >> 3) & 0b111) as u8);
    grid.set(2, 1, ((year >> 6) & 0b111) as u8);
    grid.set(3, 1, (month & 0b111) as u8);
    grid.set(4, 1, (month >> 3) as u8);
    grid.set(5, 1, (day & 0b111) as u8);
    grid.set(6, 1, (day >> 3) as u8);
    grid.set(7, 1, weekday as u8);

    grid.set(0, 2, moon_age & 0b111);
    grid.set(1, 2, moon_age >> 3);

    grid
}

/// Metonic-cycle approximation of the moon's age in days, always in [0, 30).
/// Intentionally not astronomically exact; the exact arithmetic is part of
/// the output format.
fn moon_age(year: i32, month_zero_based: u32, day: u32) -> u8 {
    let cycle = (year - 2009).rem_euclid(19);
    ((cycle * 11 + (month_zero_based as i32 + 2) + (day as i32 + 1)) % 30) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
        iso_weekday: u32,
    ) -> LocalMoment {
        LocalMoment {
            year,
            month,
            day,
            hour,
            minute,
            second,
            millisecond,
            iso_weekday,
        }
    }

    #[test]
    fn encode_is_deterministic() {
        let m = moment(2023, 6, 15, 14, 30, 45, 123, 4);
        assert_eq!(encode(&m), encode(&m));
    }

    #[test]
    fn encodes_reference_moment() {
        // 2023-06-15 14:30:45, a Thursday
        let grid = encode(&moment(2023, 6, 15, 14, 30, 45, 0, 4));

        // year_offset = 123 = 0b001_111_011
        assert_eq!(grid.value_at(0, 1), 0b011);
        assert_eq!(grid.value_at(1, 1), 0b111);
        assert_eq!(grid.value_at(2, 1), 0b001);
        // month0 = 5, day = 15
        assert_eq!(grid.value_at(3, 1), 5);
        assert_eq!(grid.value_at(4, 1), 0);
        assert_eq!(grid.value_at(5, 1), 0b111);
        assert_eq!(grid.value_at(6, 1), 1);
        // hour = 14 = 0b001_110
        assert_eq!(grid.value_at(0, 0), 0b110);
        assert_eq!(grid.value_at(1, 0), 1);
        // minute = 30, second = 45
        assert_eq!(grid.value_at(2, 0), 30 & 0b111);
        assert_eq!(grid.value_at(3, 0), 30 >> 3);
        assert_eq!(grid.value_at(4, 0), 45 & 0b111);
        assert_eq!(grid.value_at(5, 0), 45 >> 3);
        // Thursday -> weekday0 = 4
        assert_eq!(grid.value_at(7, 1), 4);
    }

    #[test]
    fn hour_23_high_cell_is_green() {
        let grid = encode(&moment(2023, 6, 15, 23, 0, 0, 0, 4));
        assert_eq!(grid.value_at(1, 0), 23 >> 3);
        assert_eq!(cell_color(grid.value_at(1, 0)), [0, 255, 0]);
    }

    #[test]
    fn sunday_maps_to_zero() {
        let grid = encode(&moment(2023, 6, 18, 0, 0, 0, 0, 7));
        assert_eq!(grid.value_at(7, 1), 0);
    }

    #[test]
    fn ms_scaled_stays_in_six_bits() {
        for ms in [0, 1, 499, 500, 998, 999] {
            let grid = encode(&moment(2023, 6, 15, 0, 0, 0, ms, 4));
            let scaled = grid.value_at(6, 0) as u32 | ((grid.value_at(7, 0) as u32) << 3);
            assert_eq!(scaled, ms * 64 / 1000);
            assert!(scaled <= 63);
        }
    }

    #[test]
    fn moon_age_always_below_thirty() {
        for year in 1990..2100 {
            for month in 1..=12 {
                for day in [1, 15, 28, 31] {
                    let grid = encode(&moment(year, month, day, 0, 0, 0, 0, 1));
                    let age = grid.value_at(0, 2) | (grid.value_at(1, 2) << 3);
                    assert!(age < 30, "moon age {} out of range", age);
                }
            }
        }
    }

    #[test]
    fn moon_age_matches_reference_formula() {
        // Same arithmetic as the historical implementation, 1-based month.
        let grid = encode(&moment(2023, 6, 15, 0, 0, 0, 0, 4));
        let expected = (((2023 - 2009) % 19) * 11 + (6 + 1) + (15 + 1)) % 30;
        let age = (grid.value_at(0, 2) | (grid.value_at(1, 2) << 3)) as i32;
        assert_eq!(age, expected);
    }

    #[test]
    fn unassigned_cells_read_black() {
        let grid = encode(&moment(2023, 6, 15, 14, 30, 45, 0, 4));
        for x in 2..8 {
            assert_eq!(grid.value_at(x, 2), 0);
        }
        for y in 3..8 {
            for x in 0..8 {
                assert_eq!(grid.value_at(x, y), 0);
            }
        }
    }

    #[test]
    fn cell_colors_cover_all_eight() {
        assert_eq!(cell_color(0), [0, 0, 0]);
        assert_eq!(cell_color(1), [255, 0, 0]);
        assert_eq!(cell_color(2), [0, 255, 0]);
        assert_eq!(cell_color(3), [255, 255, 0]);
        assert_eq!(cell_color(4), [0, 0, 255]);
        assert_eq!(cell_color(5), [255, 0, 255]);
        assert_eq!(cell_color(6), [0, 255, 255]);
        assert_eq!(cell_color(7), [255, 255, 255]);
    }
}
