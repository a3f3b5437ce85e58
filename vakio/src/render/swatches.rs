use common::color::Hex;
use svg::{
    node::element::{Rectangle, Text},
    Document,
};

use crate::layout::{mosaic_layout, Cell};

const COLUMN: usize = 24;
const SQUARE: usize = 2 * COLUMN;
const ROW_GAP: usize = 8;
const LABEL_SPACE: usize = 120;
const FONT_SIZE: usize = 11;

/// A color with the text printed next to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled {
    pub label: String,
    pub hex: Hex,
}

/// A table of color squares in one or two rows, labels running diagonally
/// away from the table. With `colored_labels` each label is printed in its
/// own color.
pub fn document(bottom: &[Labeled], top: Option<&[Labeled]>, colored_labels: bool) -> Document {
    let keys = (0..bottom.len()).collect::<Vec<_>>();
    let top_keys = top.map(|top| (bottom.len()..bottom.len() + top.len()).collect::<Vec<_>>());
    let layout = mosaic_layout(&keys, top_keys.as_deref(), true);

    let swatches = bottom.iter().chain(top.into_iter().flatten()).collect::<Vec<_>>();
    let columns = layout.first().map_or(0, Vec::len);
    let width = columns * COLUMN + LABEL_SPACE;
    let height = layout.len() * SQUARE + (layout.len() - 1) * ROW_GAP + 2 * LABEL_SPACE;

    let mut document = Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width)
        .set("height", height)
        .set("font-family", "monospace")
        .set("font-size", FONT_SIZE);

    let last_row = layout.len() - 1;
    for (row, cells) in layout.iter().enumerate() {
        let y = LABEL_SPACE + row * (SQUARE + ROW_GAP);
        for (column, key) in key_starts(cells) {
            let swatch = swatches[key];
            let x = column * COLUMN;

            document = document.add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", SQUARE)
                    .set("height", SQUARE)
                    .set("fill", swatch.hex.to_string()),
            );

            let fill = if colored_labels {
                swatch.hex.to_string()
            } else {
                "#000000".to_owned()
            };
            let anchor_x = x + SQUARE / 2;
            let (anchor_y, angle) = if row == last_row {
                (y + SQUARE + FONT_SIZE, 45)
            } else {
                (y - FONT_SIZE / 2, -45)
            };

            document = document.add(
                Text::new(swatch.label.clone())
                    .set("x", anchor_x)
                    .set("y", anchor_y)
                    .set("fill", fill)
                    .set("transform", format!("rotate({angle} {anchor_x} {anchor_y})")),
            );
        }
    }

    document
}

/// First column of every key in a layout row.
fn key_starts(cells: &[Cell<usize>]) -> Vec<(usize, usize)> {
    cells
        .iter()
        .enumerate()
        .filter_map(|(column, cell)| match cell {
            Cell::Key(key) if column == 0 || cells[column - 1] != *cell => Some((column, *key)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(label: &str, hex: &str) -> Labeled {
        Labeled {
            label: label.to_owned(),
            hex: hex.parse().unwrap(),
        }
    }

    #[test]
    fn starts_of_spanned_keys() {
        let cells = [
            Cell::Spacer,
            Cell::Key(3),
            Cell::Key(3),
            Cell::Spacer,
            Cell::Key(4),
            Cell::Key(4),
        ];
        assert_eq!(key_starts(&cells), vec![(1, 3), (4, 4)]);
    }

    #[test]
    fn one_square_per_color() {
        let bottom = [labeled("red", "#fa4549"), labeled("green", "#2da44e")];
        let top = [labeled("blue", "#218bff")];
        let svg = document(&bottom, Some(top.as_slice()), true).to_string();

        assert_eq!(svg.matches("<rect").count(), 3);
        assert!(svg.contains("#218bff"));
        assert!(svg.contains(">green<") || svg.contains(">\ngreen\n<"));
    }

    #[test]
    fn black_labels() {
        let bottom = [labeled("red", "#fa4549")];
        let svg = document(&bottom, None, false).to_string();
        assert!(svg.contains("#000000"));
        assert_eq!(svg.matches("<text").count(), 1);
    }
}
