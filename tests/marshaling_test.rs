//! Buffer decoding and geometry conversions, independent of the OS

use proptest::prelude::*;
use window_bindings::windows::types::WideBuffer;
use window_bindings::windows::utils::{string_to_wide, wide_to_string};
use window_bindings::{Bounds, Point, Rect};

#[test]
fn test_full_buffer_without_terminator_is_bounded() {
    let mut buffer = WideBuffer::with_capacity(33_000);
    buffer.as_mut_slice().fill(u16::from(b'A'));

    let decoded = buffer.to_string_lossy();
    assert_eq!(decoded.len(), 33_000);
    assert!(decoded.chars().all(|c| c == 'A'));
}

#[test]
fn test_reported_length_past_capacity_is_clamped() {
    let mut buffer = WideBuffer::with_capacity(4);
    buffer.as_mut_slice().copy_from_slice(&[0x43, 0x3A, 0x5C, 0x78]);

    assert!(buffer.would_truncate(100));
    assert_eq!(buffer.set_used(100), 4);
    assert_eq!(buffer.to_string_lossy(), "C:\\x");
}

#[test]
fn test_decoding_stops_at_first_nul() {
    let mut buffer = WideBuffer::with_capacity(16);
    let text = string_to_wide("notepad");
    buffer.as_mut_slice()[..text.len()].copy_from_slice(&text);
    buffer.as_mut_slice()[10] = u16::from(b'z');

    assert_eq!(buffer.to_string_lossy(), "notepad");
}

#[test]
fn test_unpaired_surrogate_is_replaced() {
    let mut buffer = WideBuffer::with_capacity(3);
    buffer.as_mut_slice().copy_from_slice(&[0x61, 0xD800, 0x62]);
    assert_eq!(buffer.to_string_lossy(), "a\u{FFFD}b");
}

#[test]
fn test_window_rect_to_bounds() {
    let rect = Rect::new(100, 50, 740, 530);
    assert_eq!(Bounds::from_rect(&rect), Bounds::new(100, 50, 640, 480));
}

#[test]
fn test_inverted_rect_is_not_clamped() {
    let rect = Rect::new(500, 400, 100, 100);
    let bounds = Bounds::from_rect(&rect);
    assert_eq!(bounds.width, -400);
    assert_eq!(bounds.height, -300);
}

#[test]
fn test_content_bounds_take_screen_origin() {
    let client = Rect::new(0, 0, 800, 600);
    let origin = Point::new(1928, 31);
    assert_eq!(
        Bounds::from_client(origin, &client),
        Bounds::new(1928, 31, 800, 600)
    );
}

proptest! {
    #[test]
    fn prop_decode_never_exceeds_capacity(
        units in proptest::collection::vec(1u16..=u16::MAX, 0..512),
        reported in 0usize..2048,
    ) {
        let mut buffer = WideBuffer::with_capacity(units.len());
        buffer.as_mut_slice().copy_from_slice(&units);
        let used = buffer.set_used(reported);

        prop_assert!(used <= units.len());
        prop_assert!(buffer.as_units().len() <= used);
        prop_assert_eq!(buffer.to_string_lossy(), wide_to_string(&units[..used]));
    }

    #[test]
    fn prop_bounds_follow_rect_edges(
        left in any::<i32>(),
        top in any::<i32>(),
        right in any::<i32>(),
        bottom in any::<i32>(),
    ) {
        let bounds = Bounds::from_rect(&Rect::new(left, top, right, bottom));
        prop_assert_eq!(bounds.x, left);
        prop_assert_eq!(bounds.y, top);
        prop_assert_eq!(bounds.width, right.wrapping_sub(left));
        prop_assert_eq!(bounds.height, bottom.wrapping_sub(top));
    }
}
