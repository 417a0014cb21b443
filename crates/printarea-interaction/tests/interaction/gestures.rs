use printarea_geometry::{BoundaryPolygon, Corner, Extent, Rectangle, Vec2};
use printarea_interaction::{Cursor, HandleKind, PointerEvent, TransformMode};

use crate::support::{gesture, machine, EPS};

fn large_boundary() -> BoundaryPolygon {
    Extent::new(-100.0, -100.0, 100.0, 100.0).into()
}

fn bar() -> Rectangle {
    Rectangle::from([[0.0, 2.0], [4.0, 2.0], [4.0, 0.0], [0.0, 0.0]])
}

#[test]
fn test_scale_corner_drag_end_to_end() {
    let rect = Rectangle::from([[1.0, 8.0], [4.0, 8.0], [4.0, 1.0], [1.0, 1.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(large_boundary());

    let consumed = gesture(
        &mut machine,
        HandleKind::ScaleCorner(Corner::NorthEast),
        Vec2::new(4.0, 8.0),
        &[Vec2::new(10.0, 8.0)],
    );
    assert!(consumed);

    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    let (result, degrees) = completions[0];

    let expected = Rectangle::from([[1.0, 8.0], [10.0, 8.0], [10.0, 1.0], [1.0, 1.0]]);
    assert!(result.approx_eq(&expected, EPS), "got {:?}", result.to_array());
    assert!(result.north_east().approx_eq(Vec2::new(10.0, 8.0), EPS));
    assert!(degrees.abs() < EPS);

    assert_eq!(machine.mode(), TransformMode::Idle);
    assert!(machine.session().is_none());
    assert!(machine.rectangle().approx_eq(&expected, EPS));
}

#[test]
fn test_scale_frames_recompute_from_start() {
    let rect = Rectangle::from([[1.0, 8.0], [4.0, 8.0], [4.0, 1.0], [1.0, 1.0]]);
    let (mut machine, _completions) = machine(rect);
    machine.surface_mut().hit = Some(HandleKind::ScaleCorner(Corner::NorthEast));

    assert!(machine.handle_down(Vec2::ZERO, Vec2::new(4.0, 8.0)));
    assert!(machine.handle_drag(Vec2::new(20.0, 8.0)));
    assert!(machine.handle_drag(Vec2::new(7.0, 8.0)));

    // Only the last frame counts.
    assert!(machine.rectangle().north_east().approx_eq(Vec2::new(7.0, 8.0), EPS));
    assert!((machine.rectangle().width() - 6.0).abs() < EPS);
    assert!(machine.rectangle().south_west().approx_eq(Vec2::new(1.0, 1.0), EPS));
}

#[test]
fn test_translate_moves_rectangle_and_handles() {
    let (mut machine, completions) = machine(bar());

    gesture(
        &mut machine,
        HandleKind::Body,
        Vec2::new(2.0, 1.0),
        &[Vec2::new(3.0, 1.0), Vec2::new(5.0, 4.0)],
    );

    let expected = Rectangle::from([[3.0, 5.0], [7.0, 5.0], [7.0, 3.0], [3.0, 3.0]]);
    assert_eq!(*machine.rectangle(), expected);
    assert_eq!(machine.handles().scale, *expected.corners());
    assert!(machine.handles().rotate.approx_eq(Vec2::new(5.0, 30.0), EPS));

    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].0, expected);
    assert_eq!(completions[0].1, 0.0);
}

#[test]
fn test_rotate_quarter_turn() {
    let (mut machine, completions) = machine(bar());
    machine.set_boundary(large_boundary());

    gesture(
        &mut machine,
        HandleKind::Rotate,
        Vec2::new(2.0, 10.0),
        &[Vec2::new(8.0, 6.0), Vec2::new(11.0, 1.0)],
    );

    let expected = Rectangle::from([[3.0, 3.0], [3.0, -1.0], [1.0, -1.0], [1.0, 3.0]]);
    let rect = *machine.rectangle();
    assert!(rect.approx_eq(&expected, EPS), "got {:?}", rect.to_array());
    assert!((rect.width() - 4.0).abs() < EPS);
    assert!((rect.height() - 2.0).abs() < EPS);

    assert!((machine.angle_degrees() - 90.0).abs() < EPS);
    assert!((rect.angle() - machine.angle()).abs() < EPS);

    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert!((completions[0].1 - 90.0).abs() < EPS);
}

#[test]
fn test_rotation_accumulates_across_gestures() {
    let (mut machine, completions) = machine(bar());

    gesture(&mut machine, HandleKind::Rotate, Vec2::new(2.0, 10.0), &[Vec2::new(11.0, 1.0)]);
    assert!((machine.angle_degrees() - 90.0).abs() < 1e-6);

    // East back to north undoes the first turn.
    gesture(&mut machine, HandleKind::Rotate, Vec2::new(11.0, 1.0), &[Vec2::new(2.0, 10.0)]);
    assert!(machine.angle_degrees().abs() < 1e-6);
    assert!(machine.rectangle().approx_eq(&bar(), EPS));

    gesture(&mut machine, HandleKind::Rotate, Vec2::new(2.0, 10.0), &[Vec2::new(-7.0, 1.0)]);
    assert!((machine.angle_degrees() + 90.0).abs() < 1e-6);
    assert!((machine.rectangle().angle() - machine.angle()).abs() < 1e-6);
    assert!(machine.rectangle().center().approx_eq(Vec2::new(2.0, 1.0), EPS));

    assert_eq!(completions.borrow().len(), 3);
}

#[test]
fn test_scale_after_rotation_uses_carried_angle() {
    let (mut machine, completions) = machine(bar());
    gesture(&mut machine, HandleKind::Rotate, Vec2::new(2.0, 10.0), &[Vec2::new(11.0, 1.0)]);

    // The northeast corner now sits at (3, -1); pull it further south.
    gesture(
        &mut machine,
        HandleKind::ScaleCorner(Corner::NorthEast),
        Vec2::new(3.0, -1.0),
        &[Vec2::new(3.0, -3.0)],
    );

    let expected = Rectangle::from([[3.0, 3.0], [3.0, -3.0], [1.0, -3.0], [1.0, 3.0]]);
    let rect = *machine.rectangle();
    assert!(rect.approx_eq(&expected, EPS), "got {:?}", rect.to_array());
    assert!((machine.angle_degrees() - 90.0).abs() < EPS);
    assert!((completions.borrow()[1].1 - 90.0).abs() < EPS);
}

#[test]
fn test_idle_press_is_not_consumed() {
    let (mut machine, completions) = machine(bar());
    machine.surface_mut().hit = None;

    assert!(!machine.handle_down(Vec2::ZERO, Vec2::new(50.0, 50.0)));
    assert_eq!(machine.mode(), TransformMode::Idle);
    assert!(!machine.handle_drag(Vec2::new(60.0, 60.0)));
    assert!(!machine.handle_up());

    assert_eq!(*machine.rectangle(), bar());
    assert!(completions.borrow().is_empty());
}

#[test]
fn test_hover_updates_cursor_only() {
    let (mut machine, completions) = machine(bar());

    machine.surface_mut().hit = Some(HandleKind::Rotate);
    assert!(!machine.handle_event(&PointerEvent::hover(Vec2::ZERO, Vec2::ZERO)));
    assert_eq!(machine.mode(), TransformMode::Rotate);
    assert_eq!(machine.cursor(), Cursor::Rotate);
    assert_eq!(machine.surface().cursors.last(), Some(&Cursor::Rotate));

    machine.surface_mut().hit = Some(HandleKind::ScaleCorner(Corner::SouthWest));
    machine.handle_move(Vec2::ZERO);
    assert_eq!(machine.cursor(), Cursor::Pointer);

    machine.surface_mut().hit = None;
    machine.handle_move(Vec2::ZERO);
    assert_eq!(machine.cursor(), Cursor::Default);

    assert_eq!(*machine.rectangle(), bar());
    assert!(machine.session().is_none());
    assert!(completions.borrow().is_empty());
}

#[test]
fn test_pointer_events_drive_a_gesture() {
    let (mut machine, completions) = machine(bar());
    machine.surface_mut().hit = Some(HandleKind::Body);

    assert!(machine.handle_event(&PointerEvent::down(Vec2::ZERO, Vec2::new(1.0, 1.0))));
    assert_eq!(machine.mode(), TransformMode::Translate);
    assert!(machine.handle_event(&PointerEvent::drag(Vec2::ZERO, Vec2::new(2.0, 3.0))));
    assert!(!machine.handle_event(&PointerEvent::up(Vec2::ZERO, Vec2::new(2.0, 3.0))));

    assert_eq!(machine.mode(), TransformMode::Idle);
    assert_eq!(machine.rectangle().north_west(), Vec2::new(1.0, 4.0));
    assert_eq!(completions.borrow().len(), 1);
}

#[test]
fn test_release_without_gesture_does_nothing() {
    let (mut machine, completions) = machine(bar());
    assert!(!machine.handle_up());
    assert!(completions.borrow().is_empty());
}

#[test]
fn test_dragging_fully_outside_reverts() {
    let rect = Rectangle::from([[1.0, 3.0], [3.0, 3.0], [3.0, 1.0], [1.0, 1.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(Extent::new(0.0, 0.0, 10.0, 10.0).into());

    gesture(
        &mut machine,
        HandleKind::Body,
        Vec2::new(2.0, 2.0),
        &[Vec2::new(102.0, 102.0)],
    );

    assert_eq!(*machine.rectangle(), rect);
    assert_eq!(machine.handles().scale, *rect.corners());
    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].0, rect);
    assert_eq!(completions[0].1, 0.0);
}

#[test]
fn test_scale_past_boundary_edge_is_clamped() {
    let extent = Extent::new(0.0, 0.0, 8.0, 10.0);
    let rect = Rectangle::from([[1.0, 8.0], [4.0, 8.0], [4.0, 1.0], [1.0, 1.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(extent.into());

    gesture(
        &mut machine,
        HandleKind::ScaleCorner(Corner::NorthEast),
        Vec2::new(4.0, 8.0),
        &[Vec2::new(10.0, 8.0)],
    );

    let expected = Rectangle::from([[1.0, 8.0], [8.0, 8.0], [8.0, 1.0], [1.0, 1.0]]);
    let result = *machine.rectangle();
    assert!(result.approx_eq(&expected, EPS), "got {:?}", result.to_array());
    for corner in result.corners() {
        assert!(
            corner.x >= extent.min_x - EPS
                && corner.x <= extent.max_x + EPS
                && corner.y >= extent.min_y - EPS
                && corner.y <= extent.max_y + EPS,
            "corner {corner} outside boundary"
        );
    }

    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert!(completions[0].0.approx_eq(&expected, EPS));
    assert!(completions[0].1.abs() < EPS);
}

#[test]
fn test_reverted_rotation_restores_angle() {
    // A tall bar whose top end sits in a small boundary box.
    let rect = Rectangle::from([[-1.0, 10.0], [1.0, 10.0], [1.0, -10.0], [-1.0, -10.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(Extent::new(-2.0, 8.0, 2.0, 12.0).into());
    machine.surface_mut().hit = Some(HandleKind::Rotate);

    assert!(machine.handle_down(Vec2::ZERO, Vec2::new(0.0, 20.0)));
    assert!(machine.handle_drag(Vec2::new(20.0, 0.0)));
    // Lying flat, the bar no longer touches the box.
    assert!((machine.angle_degrees() - 90.0).abs() < EPS);
    assert!(!machine.handle_up());

    assert_eq!(*machine.rectangle(), rect);
    assert_eq!(machine.angle(), 0.0);
    let completions = completions.borrow();
    assert_eq!(completions.len(), 1);
    assert_eq!(completions[0].0, rect);
    assert_eq!(completions[0].1, 0.0);
}

#[test]
fn test_partial_overlap_is_clipped_at_release() {
    let boundary = BoundaryPolygon::from([[0.0, 8.0], [16.0, 8.0], [16.0, -12.0], [0.0, -12.0]]);
    let rect = Rectangle::from([[-8.0, 10.0], [4.0, 10.0], [4.0, 6.0], [-8.0, 6.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(boundary);

    gesture(
        &mut machine,
        HandleKind::Body,
        Vec2::new(0.0, 8.0),
        &[Vec2::new(-1.0, 8.0), Vec2::new(-2.0, 8.0)],
    );

    let expected = Rectangle::from([[0.0, 8.0], [2.0, 8.0], [2.0, 6.0], [0.0, 6.0]]);
    let result = completions.borrow()[0].0;
    assert!(result.approx_eq(&expected, EPS), "got {:?}", result.to_array());
    assert!(machine.angle().abs() < EPS);
}

#[test]
fn test_unmoved_rectangle_skips_solver() {
    // Two corners already outside; a click without movement must not reshape.
    let rect = Rectangle::from([[-5.0, 3.0], [3.0, 3.0], [3.0, 1.0], [-5.0, 1.0]]);
    let (mut machine, completions) = machine(rect);
    machine.set_boundary(Extent::new(0.0, 0.0, 10.0, 10.0).into());

    gesture(&mut machine, HandleKind::Body, Vec2::new(0.0, 2.0), &[]);

    assert_eq!(*machine.rectangle(), rect);
    assert_eq!(completions.borrow().len(), 1);
}

#[test]
fn test_boundary_change_applies_on_release() {
    let rect = Rectangle::from([[1.0, 3.0], [3.0, 3.0], [3.0, 1.0], [1.0, 1.0]]);
    let (mut machine, completions) = machine(rect);

    machine.surface_mut().hit = Some(HandleKind::Body);
    assert!(machine.handle_down(Vec2::ZERO, Vec2::new(2.0, 2.0)));
    assert!(machine.handle_drag(Vec2::new(52.0, 52.0)));
    machine.set_boundary(Extent::new(0.0, 0.0, 10.0, 10.0).into());
    assert!(!machine.handle_up());
    assert_eq!(completions.borrow()[0].0, rect);

    machine.clear_boundary();
    assert!(machine.boundary().is_none());
    gesture(&mut machine, HandleKind::Body, Vec2::new(2.0, 2.0), &[Vec2::new(52.0, 52.0)]);
    assert_eq!(machine.rectangle().north_west(), Vec2::new(51.0, 53.0));
    assert_eq!(completions.borrow().len(), 2);
}

#[test]
fn test_refresh_handles_follows_resolution() {
    let (mut machine, _completions) = machine(bar());
    assert!(machine.handles().rotate.approx_eq(Vec2::new(2.0, 27.0), EPS));

    machine.surface_mut().resolution = 2.0;
    machine.refresh_handles();
    assert!(machine.handles().rotate.approx_eq(Vec2::new(2.0, 52.0), EPS));
}

#[test]
fn test_set_rectangle_reads_angle_from_geometry() {
    let (mut machine, _completions) = machine(bar());
    let turned = Rectangle::from_center(Vec2::new(5.0, 5.0), 6.0, 2.0, 0.5);

    machine.set_rectangle(turned);
    assert!((machine.angle() - 0.5).abs() < EPS);
    assert_eq!(machine.handles().scale, *turned.corners());
}
