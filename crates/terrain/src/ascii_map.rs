//! Text rendering of a generated tile map.
//!
//! Maps are built on demand from `&TileMap`; nothing here runs per frame.
//! - **Plain**: one character per tile
//! - **ANSI**: two 24-bit coloured spaces per tile, for terminals

use std::fmt::Write;

use crate::tiles::{TileMap, TileType, TILE_CATALOG};

pub fn tile_char(tile: TileType) -> char {
    match tile {
        TileType::DeepWater => '~',
        TileType::ShallowWater => '-',
        TileType::Sand => '.',
        TileType::Grassland => '"',
        TileType::Forest => 'T',
        TileType::Rock => '^',
        TileType::Snow => '*',
    }
}

/// One line per row, no trailing newline after the last row.
pub fn render_ascii(map: &TileMap) -> String {
    let mut out = String::with_capacity((map.width + 1) * map.height);
    for (i, row) in map.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|&t| tile_char(t)));
    }
    out
}

/// Rows of background-coloured cells, colour reset at the end of each line.
pub fn render_ansi(map: &TileMap) -> String {
    let mut out = String::new();
    for (i, row) in map.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for &tile in row {
            let [r, g, b] = tile.rgb();
            // Writing into a String cannot fail
            let _ = write!(out, "\x1b[48;2;{r};{g};{b}m  ");
        }
        out.push_str("\x1b[0m");
    }
    out
}

/// One line per distinct catalog class, in catalog order.
pub fn legend() -> String {
    let mut out = String::new();
    let mut seen: Vec<TileType> = Vec::new();
    for tile in TILE_CATALOG {
        if seen.contains(&tile) {
            continue;
        }
        seen.push(tile);
        let _ = writeln!(
            out,
            "{}  {:<14}{}",
            tile_char(tile),
            tile.label(),
            tile.css_name()
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::height_grid::HeightGrid;

    fn sample_map() -> TileMap {
        let mut heights = HeightGrid::new(3, 2);
        let values = [0.5, 2.2, 7.9, 5.0, 6.4, 3.3];
        for (i, v) in values.iter().enumerate() {
            heights.set(i % 3, i / 3, *v);
        }
        TileMap::classify(&heights)
    }

    #[test]
    fn test_tile_chars_are_unique() {
        let chars: Vec<char> = TileType::ALL.iter().map(|&t| tile_char(t)).collect();
        for (i, c) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(c), "duplicate char {c}");
        }
    }

    #[test]
    fn test_render_ascii_layout() {
        assert_eq!(render_ascii(&sample_map()), "~.*\nT^\"");
    }

    #[test]
    fn test_render_ansi_resets_each_line() {
        let out = render_ansi(&sample_map());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.ends_with("\x1b[0m"));
            assert_eq!(line.matches("\x1b[48;2;").count(), 3);
        }
        assert!(out.starts_with("\x1b[48;2;0;0;139m  "));
    }

    #[test]
    fn test_legend_lists_each_class_once() {
        let legend = legend();
        assert_eq!(legend.lines().count(), TileType::ALL.len());
        assert_eq!(legend.matches("YellowGreen").count(), 1);
    }
}
