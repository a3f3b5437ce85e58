/// One column of a [`mosaic_layout`] row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell<K> {
    Key(K),
    Spacer,
}

const SPAN: usize = 2;

/// A centered two row grid in which every key spans two columns.
///
/// The shorter row is centered over the longer one. Its keys are separated by
/// a spacer column when that fits, and whatever padding is left over is split
/// between both ends. An odd spacer goes to the left when `pad_left` is set,
/// otherwise to the right. Rows are returned top first; without `top` only
/// the bottom row is returned.
pub fn mosaic_layout<K: Copy>(bottom: &[K], top: Option<&[K]>, pad_left: bool) -> Vec<Vec<Cell<K>>> {
    let top = match top {
        Some(top) if !top.is_empty() => top,
        _ => return vec![spanned(bottom)],
    };

    let flipped = top.len() >= bottom.len();
    let (long, short) = if flipped { (top, bottom) } else { (bottom, top) };

    let gaps = short.len().saturating_sub(1);
    let extra = SPAN * (long.len() - short.len());

    let long_row = spanned(long);
    let (mut short_row, remaining) = if extra >= gaps && !(short.len() == 2 && extra == 2) {
        let mut row = Vec::new();
        for (i, key) in short.iter().enumerate() {
            if i > 0 {
                row.push(Cell::Spacer);
            }
            row.extend([Cell::Key(*key); SPAN]);
        }
        (row, extra - gaps)
    } else {
        (spanned(short), extra)
    };

    let mut left = remaining / 2;
    let mut right = remaining - left;
    if pad_left && left < right {
        (left, right) = (right, left);
    }

    short_row.splice(0..0, [Cell::Spacer].repeat(left));
    short_row.extend([Cell::Spacer].repeat(right));

    if flipped {
        vec![long_row, short_row]
    } else {
        vec![short_row, long_row]
    }
}

fn spanned<K: Copy>(keys: &[K]) -> Vec<Cell<K>> {
    keys.iter().flat_map(|key| [Cell::Key(*key); SPAN]).collect()
}
