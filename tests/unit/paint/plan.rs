use super::*;
use crate::render::surface::PaintStyle;

const EPS: f64 = 1e-9;

fn star(i: usize) -> Rect {
    let x0 = i as f64 * 25.0;
    Rect::new(x0, 0.0, x0 + 20.0, 20.0)
}

fn style(selectable: bool) -> StyleConfig {
    StyleConfig {
        selectable,
        base_color: Argb(0xFF80_8080),
        selected_color: Argb(0xFFFF_0000),
        stroke_width: 2.0,
        inner_radius_scale: 0.6,
    }
}

fn rating(current: f64, previous: f64) -> RatingState {
    RatingState { current, previous }
}

fn anim(target: usize, progress: f64) -> Option<AnimationState> {
    Some(AnimationState { target, progress })
}

fn star_paints(plan: &PaintPlan) -> Vec<Paint> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            PaintOp::Star(p) => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn regimes_partition_every_rating() {
    for count in 1..=6usize {
        for step in 0..=(count * 20) {
            let r = step as f64 / 20.0;
            for index in 0..count {
                let d = r - index as f64 - 1.0;
                let hits = [d >= 0.0, d <= -1.0, d > -1.0 && d < 0.0];
                assert_eq!(hits.iter().filter(|h| **h).count(), 1, "r={r} index={index}");
                let expected = if hits[0] {
                    FillRegime::Full
                } else if hits[1] {
                    FillRegime::Empty
                } else {
                    FillRegime::Partial
                };
                assert_eq!(FillRegime::classify(index, r), expected);
            }
        }
    }
}

#[test]
fn static_partial_fill_at_two_point_four() {
    let s = style(false);
    let r = rating(2.4, 0.0);
    let plans: Vec<PaintPlan> = (0..5).map(|i| resolve_star(i, star(i), r, None, &s)).collect();

    assert_eq!(plans[0].regime, FillRegime::Full);
    assert_eq!(plans[1].regime, FillRegime::Full);
    assert_eq!(plans[2].regime, FillRegime::Partial);
    assert_eq!(plans[3].regime, FillRegime::Empty);
    assert_eq!(plans[4].regime, FillRegime::Empty);

    for p in &plans[..2] {
        assert_eq!(star_paints(p), vec![Paint::fill_and_stroke(s.selected_color, 2.0)]);
        assert_eq!(p.rotation_deg, None);
        assert_eq!(p.clip, None);
    }

    let partial = &plans[2];
    assert!((partial.filled_fraction() - 0.4).abs() < EPS);
    let clip = partial.clip.unwrap();
    assert!((clip.x0 - (50.0 + 8.0)).abs() < EPS);
    assert_eq!(clip.x1, 70.0);
    assert_eq!((clip.y0, clip.y1), (0.0, 20.0));
    assert_eq!(partial.rotation_deg, None);
    assert_eq!(partial.ops.len(), 4);
    assert_eq!(partial.ops[0], PaintOp::Star(Paint::stroke(s.selected_color, 2.0)));
    assert_eq!(partial.ops[1], PaintOp::ClipOut(clip));
    assert_eq!(
        partial.ops[2],
        PaintOp::Star(Paint::fill_and_stroke(s.selected_color, 2.0))
    );
    assert_eq!(
        partial.ops[3],
        PaintOp::Rect {
            rect: clip,
            color: Argb::TRANSPARENT
        }
    );

    for p in &plans[3..] {
        assert_eq!(star_paints(p), vec![Paint::stroke(s.base_color, 2.0)]);
        assert_eq!(p.filled_fraction(), 0.0);
    }
}

#[test]
fn tap_jump_rotates_and_tints_newly_covered_stars() {
    let s = style(true);
    let r = rating(3.0, 0.0);
    let a = anim(2, 0.5);
    let tint = blend(s.base_color, s.selected_color, 0.5);

    for i in 0..3 {
        let p = resolve_star(i, star(i), r, a, &s);
        assert_eq!(p.regime, FillRegime::Full);
        assert_eq!(p.rotation_deg, Some(36.0), "star {i}");
        assert_eq!(p.pivot, star(i).center());
        assert_eq!(p.color(), Some(tint), "star {i}");
    }
    for i in 3..5 {
        let p = resolve_star(i, star(i), r, a, &s);
        assert_eq!(p.regime, FillRegime::Empty);
        assert_eq!(p.rotation_deg, None);
        assert_eq!(star_paints(&p), vec![Paint::stroke(s.base_color, 2.0)]);
    }
}

#[test]
fn target_keeps_plain_color_when_rating_started_fractional() {
    let s = style(true);
    // Previous rating 1.5 is not whole, so the tapped star only spins.
    let p = resolve_star(2, star(2), rating(3.0, 1.5), anim(2, 0.5), &s);
    assert_eq!(p.rotation_deg, Some(36.0));
    assert_eq!(p.color(), Some(s.selected_color));

    // Star 1 lies in the newly covered range (1.5, 3]: 2.5 <= 2 is false, so it is static.
    let p = resolve_star(1, star(1), rating(3.0, 1.5), anim(2, 0.5), &s);
    assert_eq!(p.rotation_deg, None);
    assert_eq!(p.color(), Some(s.selected_color));
}

#[test]
fn retapping_same_star_spins_without_tint() {
    let s = style(true);
    let p = resolve_star(2, star(2), rating(3.0, 3.0), anim(2, 0.25), &s);
    assert_eq!(p.rotation_deg, Some(18.0));
    assert_eq!(p.color(), Some(s.selected_color));
}

#[test]
fn decrease_cross_fades_uncovered_stars() {
    let s = style(true);
    let r = rating(1.0, 4.0);
    let a = anim(0, 0.25);
    let fade = blend(s.selected_color, s.base_color, 0.25);

    let target = resolve_star(0, star(0), r, a, &s);
    assert_eq!(target.regime, FillRegime::Full);
    assert_eq!(target.rotation_deg, Some(18.0));
    assert_eq!(target.color(), Some(s.selected_color));

    for i in 1..4 {
        let p = resolve_star(i, star(i), r, a, &s);
        assert_eq!(p.regime, FillRegime::Empty);
        assert_eq!(p.rotation_deg, Some(18.0));
        assert_eq!(
            star_paints(&p),
            vec![Paint::fill_and_stroke(fade, 2.0), Paint::stroke(fade, 2.0)]
        );
    }

    let untouched = resolve_star(4, star(4), r, a, &s);
    assert_eq!(untouched.rotation_deg, None);
    assert_eq!(star_paints(&untouched), vec![Paint::stroke(s.base_color, 2.0)]);
}

#[test]
fn empty_target_spins_as_outline_only() {
    let s = style(true);
    let p = resolve_star(4, star(4), rating(0.0, 5.0), anim(4, 0.5), &s);
    assert_eq!(p.regime, FillRegime::Empty);
    assert_eq!(p.rotation_deg, Some(36.0));
    assert_eq!(star_paints(&p), vec![Paint::stroke(s.base_color, 2.0)]);
}

#[test]
fn non_selectable_pulse_only_spins_the_target() {
    let s = style(false);
    let r = rating(2.4, 0.0);

    let full = resolve_star(1, star(1), r, anim(1, 0.5), &s);
    assert_eq!(full.rotation_deg, Some(36.0));
    assert_eq!(full.color(), Some(s.selected_color));

    let other = resolve_star(0, star(0), r, anim(1, 0.5), &s);
    assert_eq!(other.rotation_deg, None);

    let empty = resolve_star(4, star(4), r, anim(4, 0.5), &s);
    assert_eq!(empty.rotation_deg, Some(36.0));
    assert_eq!(star_paints(&empty), vec![Paint::stroke(s.base_color, 2.0)]);

    let partial = resolve_star(2, star(2), r, anim(1, 0.5), &s);
    assert_eq!(partial.rotation_deg, None);
    assert!((partial.filled_fraction() - 0.4).abs() < EPS);

    let partial_target = resolve_star(2, star(2), r, anim(2, 0.5), &s);
    assert_eq!(partial_target.rotation_deg, Some(36.0));
    assert!((partial_target.filled_fraction() - 0.4).abs() < EPS);
}

#[test]
fn partial_star_interpolates_clip_while_rating_grows() {
    let s = style(true);
    let p = resolve_star(2, star(2), rating(2.5, 1.25), anim(0, 0.5), &s);
    assert_eq!(p.regime, FillRegime::Partial);
    assert_eq!(p.rotation_deg, Some(36.0));
    assert_eq!(p.color(), Some(s.selected_color));
    let clip = p.clip.unwrap();
    // Unfilled width: 0.75 of the old star gap, shrinking by progress.
    assert!((clip.width() - 20.0 * 0.75 * 0.5).abs() < EPS);
}

#[test]
fn partial_star_fades_and_widens_clip_while_rating_shrinks() {
    let s = style(true);
    let p = resolve_star(1, star(1), rating(1.5, 3.25), anim(0, 0.5), &s);
    assert_eq!(p.regime, FillRegime::Partial);
    assert_eq!(p.color(), Some(blend(s.selected_color, s.base_color, 0.5)));
    let clip = p.clip.unwrap();
    assert!((clip.width() - 20.0 * (0.75 + 0.25 * 0.5)).abs() < EPS);
    for op in &p.ops {
        if let PaintOp::Star(paint) = op {
            assert_ne!(paint.style, PaintStyle::Fill);
        }
    }
}

#[test]
fn rating_state_clamps_and_tracks_previous() {
    let mut r = RatingState::default();
    assert!(r.set(7.0, 5));
    assert_eq!(r, rating(5.0, 0.0));

    assert!(r.set(-1.0, 5));
    assert_eq!(r, rating(0.0, 5.0));

    // No change keeps `previous`.
    assert!(!r.set(0.0, 5));
    assert_eq!(r.previous, 5.0);

    assert!(!r.set(f64::NAN, 5));
    assert_eq!(r.current, 0.0);
}

#[test]
fn style_normalization_clamps_scale_and_stroke() {
    let s = StyleConfig {
        inner_radius_scale: 0.0,
        stroke_width: -3.0,
        ..StyleConfig::default()
    }
    .normalized();
    assert_eq!(s.inner_radius_scale, 0.1);
    assert_eq!(s.stroke_width, 0.0);
}
