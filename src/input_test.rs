use super::*;

#[test]
fn input_state_default_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn input_state_dragging_holds_baseline() {
    let state = InputState::Dragging {
        start_screen: Point::new(100.0, 100.0),
        start_camera: Camera::new(180.0, 0.0),
    };
    let InputState::Dragging { start_screen, start_camera } = state else {
        panic!("expected dragging state");
    };
    assert_eq!(start_screen, Point::new(100.0, 100.0));
    assert_eq!(start_camera, Camera::new(180.0, 0.0));
}

#[test]
fn input_state_equality() {
    let a = InputState::Dragging {
        start_screen: Point::new(1.0, 2.0),
        start_camera: Camera::new(0.0, 0.0),
    };
    let b = a;
    assert_eq!(a, b);
    assert_ne!(a, InputState::Idle);
}

#[test]
fn input_state_debug_format() {
    let s = format!("{:?}", InputState::Idle);
    assert_eq!(s, "Idle");
    let s = format!(
        "{:?}",
        InputState::Dragging {
            start_screen: Point::new(0.0, 0.0),
            start_camera: Camera::new(0.0, 0.0),
        }
    );
    assert!(s.contains("Dragging"));
}
