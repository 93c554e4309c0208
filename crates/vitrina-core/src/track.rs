//! Carousel track geometry.
//!
//! Pure functions relating a horizontal scroll offset to card indices, so
//! the carousel controller can be exercised without a terminal.

/// Leading-edge offset of every card on the track
pub fn card_offsets(count: usize, card_width: u16, gap: u16) -> Vec<u16> {
    let stride = card_width as usize + gap as usize;
    (0..count).map(|i| (i * stride) as u16).collect()
}

/// Index of the card whose leading edge is closest to `offset`.
/// Ties resolve to the lower index; an empty track maps to 0.
pub fn nearest_index(offset: u16, offsets: &[u16]) -> usize {
    let mut nearest = 0;
    let mut min_diff = u16::MAX;
    for (idx, &card) in offsets.iter().enumerate() {
        let diff = offset.abs_diff(card);
        if diff < min_diff {
            min_diff = diff;
            nearest = idx;
        }
    }
    nearest
}

/// Clamp a signed index request into `[0, count - 1]`
pub fn clamp_index(index: isize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    index.clamp(0, count as isize - 1) as usize
}

/// Total track width occupied by `count` cards
pub fn track_width(count: usize, card_width: u16, gap: u16) -> u16 {
    if count == 0 {
        return 0;
    }
    let stride = card_width as usize + gap as usize;
    (stride * count - gap as usize) as u16
}

/// Maximum scroll offset for a track shown through a viewport
pub fn max_scroll(total_width: u16, viewport_width: u16) -> u16 {
    total_width.saturating_sub(viewport_width)
}
