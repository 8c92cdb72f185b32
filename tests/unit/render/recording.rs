use super::*;

#[test]
fn draws_capture_transform_and_clips() {
    let mut s = RecordingSurface::new();
    let path = {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((1.0, 0.0));
        p.close_path();
        p
    };

    s.save();
    s.rotate_about(90.0, Point::new(0.0, 0.0));
    s.clip_rect(Rect::new(0.0, 0.0, 5.0, 5.0), ClipOp::Difference);
    s.draw_path(&path, &Paint::stroke(Argb::GRAY, 1.0));
    s.restore();
    s.draw_path(&path, &Paint::stroke(Argb::GRAY, 1.0));

    let cmds = s.commands();
    let SurfaceCommand::DrawPath {
        transform, clips, ..
    } = &cmds[3]
    else {
        panic!("expected draw, got {:?}", cmds[3]);
    };
    let moved = *transform * Point::new(1.0, 0.0);
    assert!((moved.x - 0.0).abs() < 1e-9 && (moved.y - 1.0).abs() < 1e-9);
    assert_eq!(clips.len(), 1);

    let SurfaceCommand::DrawPath {
        transform, clips, ..
    } = &cmds[5]
    else {
        panic!("expected draw, got {:?}", cmds[5]);
    };
    assert_eq!(*transform, Affine::IDENTITY);
    assert!(clips.is_empty());
    assert_eq!(s.draws().count(), 2);
}

#[test]
fn unbalanced_restore_is_ignored() {
    let mut s = RecordingSurface::new();
    s.restore();
    assert!(s.commands().is_empty());
    assert_eq!(s.depth(), 0);
}

#[test]
fn clear_resets_everything() {
    let mut s = RecordingSurface::new();
    s.save();
    s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Argb::RED);
    s.clear();
    assert!(s.commands().is_empty());
    assert_eq!(s.depth(), 0);
}
