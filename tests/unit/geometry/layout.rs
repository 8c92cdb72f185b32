use super::*;

fn row() -> StarLayout {
    StarLayout::new(Rect::new(0.0, 0.0, 20.0, 20.0), 5.0, 5)
}

#[test]
fn offsets_and_rects_step_by_pitch() {
    let l = row();
    assert_eq!(l.pitch(), 25.0);
    assert_eq!(l.offset(0), 0.0);
    assert_eq!(l.offset(3), 75.0);
    assert_eq!(l.star_rect(2), Rect::new(50.0, 0.0, 70.0, 20.0));
    assert_eq!(l.total_width(), 5.0 * 20.0 + 4.0 * 5.0);
}

#[test]
fn hit_test_maps_each_star_and_skips_gaps() {
    let l = row();
    for i in 0..5 {
        let c = l.star_center(i);
        assert_eq!(l.hit_test(c), Some(i));
    }
    // Gap between star 0 and star 1.
    assert_eq!(l.hit_test(Point::new(22.0, 10.0)), None);
    // Right edge belongs to the gap, left edge to the star.
    assert_eq!(l.hit_test(Point::new(20.0, 10.0)), None);
    assert_eq!(l.hit_test(Point::new(25.0, 10.0)), Some(1));
    // Outside vertically or past the last star.
    assert_eq!(l.hit_test(Point::new(10.0, 25.0)), None);
    assert_eq!(l.hit_test(Point::new(130.0, 10.0)), None);
}

#[test]
fn zero_spacing_edges_resolve_to_the_right_star() {
    let l = StarLayout::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0, 3);
    assert_eq!(l.hit_test(Point::new(10.0, 5.0)), Some(1));
}

#[test]
fn centered_row_is_symmetric_inside_bounds() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);
    let l = StarLayout::centered_in(bounds, 30.0, 10.0, 5);
    let left = l.star_rect(0).x0;
    let right = l.star_rect(4).x1;
    assert!((left - (200.0 - right)).abs() < 1e-9);
    assert!((l.reference.center().y - 25.0).abs() < 1e-9);
    assert_eq!(l.star_width(), 30.0);
}

#[test]
fn count_is_at_least_one() {
    let l = StarLayout::new(Rect::new(0.0, 0.0, 10.0, 10.0), 2.0, 0);
    assert_eq!(l.count, 1);
    assert_eq!(l.total_width(), 10.0);
}

#[test]
fn preferred_size_adds_padding() {
    let s = StarLayout::preferred_size(24.0, 4.0, 5, 3.0);
    assert_eq!(s.width, 24.0 * 5.0 + 4.0 * 4.0 + 6.0);
    assert_eq!(s.height, 30.0);
}
