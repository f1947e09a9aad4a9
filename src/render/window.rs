//! Row windowing: which item covers which viewport row.
//!
//! The track is translated upward by `|position|` rows; the wrapper clips it
//! to the viewport. These functions compute the visible window as plain text
//! so the logic is testable without a terminal, and so the driver only has to
//! move the cursor and print.

use crate::dom::Dom;
use crate::layout::CarouselState;

/// The item (by doubled-track index) covering content row `content_y`.
///
/// `content_y` is the absolute row within the track, i.e. viewport row plus
/// `|position|`. Returns `None` for an empty track.
pub fn item_at(content_y: f64, item_height_px: f64, total_items: usize) -> Option<usize> {
    if total_items == 0 || item_height_px <= 0.0 {
        return None;
    }
    Some((content_y / item_height_px).floor() as usize % total_items)
}

/// Render the wrapper's visible window to one string per viewport row.
///
/// The first row each item occupies carries its text, truncated and padded to
/// the viewport width; its remaining rows are blank.
pub fn visible_lines(dom: &Dom, state: &CarouselState) -> Vec<String> {
    let width = state.viewport.width as usize;
    let height = state.viewport.height;
    let track: Vec<_> = state.items.iter().chain(state.clones.iter()).collect();
    let total = track.len();

    let mut lines = Vec::with_capacity(height as usize);
    for row in 0..height {
        let content_y = row as f64 + state.position.abs();
        let line = match item_at(content_y, state.item_height_px, total) {
            Some(index) => {
                let offset_in_item = content_y - (content_y / state.item_height_px).floor()
                    * state.item_height_px;
                if offset_in_item < 1.0 {
                    let text = dom
                        .get(*track[index])
                        .and_then(|data| data.text.as_deref())
                        .unwrap_or("");
                    pad_line(text, width)
                } else {
                    " ".repeat(width)
                }
            }
            None => " ".repeat(width),
        };
        lines.push(line);
    }
    lines
}

/// Truncate or pad `text` to exactly `width` characters.
fn pad_line(text: &str, width: usize) -> String {
    let mut line: String = text.chars().take(width).collect();
    let used = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - used));
    line
}
