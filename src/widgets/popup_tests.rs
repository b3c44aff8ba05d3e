//! Tests for widgets/popup

use super::*;

fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = rect(0, 1, 80, 3);
    let bounds = rect(0, 0, 80, 24);

    let popup = popup_below_anchor(anchor, bounds, 40, 6, 2);

    assert_eq!(popup, rect(2, 4, 40, 6));
}

#[test]
fn test_popup_below_anchor_clamps_width() {
    let anchor = rect(0, 1, 30, 3);
    let bounds = rect(0, 0, 30, 24);

    let popup = popup_below_anchor(anchor, bounds, 100, 6, 2);

    assert_eq!(popup.width, 26);
}

#[test]
fn test_popup_below_anchor_clamps_height_to_bounds() {
    let anchor = rect(0, 1, 80, 3);
    let bounds = rect(0, 0, 80, 8);

    let popup = popup_below_anchor(anchor, bounds, 40, 12, 0);

    assert_eq!(popup.y, 4);
    assert_eq!(popup.height, 4);
}

#[test]
fn test_popup_below_anchor_at_bottom_has_no_height() {
    let anchor = rect(0, 5, 80, 3);
    let bounds = rect(0, 0, 80, 8);

    let popup = popup_below_anchor(anchor, bounds, 40, 12, 0);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_inset_rect() {
    let inner = inset_rect(rect(2, 4, 40, 6), 1, 1);
    assert_eq!(inner, rect(3, 5, 38, 4));
}

#[test]
fn test_inset_rect_saturates() {
    let inner = inset_rect(rect(0, 0, 1, 1), 2, 2);
    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
