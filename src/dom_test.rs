use super::*;

#[test]
fn no_actions_dispatch_nothing() {
    assert_eq!(dispatch(&[]), Dispatch::default());
}

#[test]
fn render_needed_requests_render_only() {
    let d = dispatch(&[Action::RenderNeeded]);
    assert!(d.render);
    assert!(!d.prevent_default);
}

#[test]
fn wheel_actions_render_and_prevent_default() {
    let d = dispatch(&[Action::RenderNeeded, Action::PreventDefault]);
    assert_eq!(d, Dispatch { prevent_default: true, render: true });
}

#[test]
fn order_does_not_matter() {
    assert_eq!(
        dispatch(&[Action::PreventDefault, Action::RenderNeeded]),
        dispatch(&[Action::RenderNeeded, Action::PreventDefault])
    );
}

#[test]
fn core_move_and_wheel_map_to_host_dispatch() {
    let mut core = InteractionCore::new(crate::view::SceneView::default());
    core.on_press(Point::new(0.0, 0.0));
    let moved = dispatch(&core.on_move(Point::new(5.0, 5.0), Modifiers::default()));
    assert_eq!(moved, Dispatch { prevent_default: false, render: true });

    let wheeled = dispatch(&core.on_wheel(WheelDelta { dx: 0.0, dy: 10.0 }));
    assert_eq!(wheeled, Dispatch { prevent_default: true, render: true });

    assert_eq!(dispatch(&core.on_release()), Dispatch::default());
}
