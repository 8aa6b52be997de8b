use tether::{evaluate, Body, BreakAction, JointState, SpringJoint, SpringParams, StepResult, Vec2};

fn pair(distance: f64) -> (Body<Vec2<f64>>, Body<Vec2<f64>>) {
    (
        Body::new(Vec2::new(distance, 0.0), 1.0),
        Body::new(Vec2::new(0.0, 0.0), 1.0),
    )
}

#[test]
fn destroy_breaks_past_threshold() {
    let (a, b) = pair(1.0);
    let params = SpringParams::new()
        .with_distance(0.3)
        .with_frequency(2.0)
        .with_break_distance(0.5)
        .with_break_action(BreakAction::Destroy);
    let result = evaluate(&a, Some(&b), &params);
    assert_eq!(result, StepResult::Broken(BreakAction::Destroy));
    assert_eq!(result.force(), None);
}

#[test]
fn breaks_iff_distance_exceeds_threshold() {
    let params = SpringParams::new().with_break_distance(2.0).with_break_action(BreakAction::Destroy);
    for &d in &[0.0, 0.5, 1.99, 2.0, 2.01, 10.0, 1e6] {
        let (a, b) = pair(d);
        let broken = evaluate(&a, Some(&b), &params).is_broken();
        assert_eq!(broken, d > 2.0, "distance {}", d);
    }
}

#[test]
fn do_nothing_never_breaks() {
    for &threshold in &[0.0, 0.25, 1.0, 100.0] {
        let params = SpringParams::new()
            .with_break_distance(threshold)
            .with_break_force(0.0)
            .with_break_action(BreakAction::DoNothing);
        for &d in &[0.0, 0.5, 5.0, 1e4] {
            let (a, b) = pair(d);
            let result = evaluate(&a, Some(&b), &params);
            assert!(!result.is_broken());
            assert!(result.force().is_some());
        }
    }
}

#[test]
fn do_nothing_joint_stays_active() {
    let params = SpringParams::new().with_break_distance(0.1).with_break_action(BreakAction::DoNothing);
    let mut joint = SpringJoint::new(params);
    let (a, b) = pair(50.0);
    for _ in 0..10 {
        assert!(joint.step(&a, Some(&b)).unwrap().force().is_some());
    }
    assert_eq!(joint.state(), JointState::Active);
}

#[test]
fn unlimited_threshold_never_breaks() {
    let params = SpringParams::new().with_break_action(BreakAction::Disable);
    let (a, b) = pair(1e9);
    assert!(!evaluate(&a, Some(&b), &params).is_broken());
}

#[test]
fn absent_connected_measured_from_origin() {
    let params = SpringParams::new()
        .with_connected_anchor(Vec2::new(10.0, 0.0))
        .with_break_distance(1.0)
        .with_break_action(BreakAction::Disable);
    // close to the connected anchor offset, far from the origin
    let near = Body::new(Vec2::new(10.5, 0.0), 1.0);
    assert!(!evaluate(&near, None, &params).is_broken());
    let origin = Body::new(Vec2::new(0.0, 0.0), 1.0);
    assert_eq!(evaluate(&origin, None, &params), StepResult::Broken(BreakAction::Disable));
}

#[test]
fn disabled_joint_stops_until_enabled() {
    let params = SpringParams::new().with_break_distance(0.5).with_break_action(BreakAction::Disable);
    let mut joint = SpringJoint::new(params);
    let (far, anchor) = pair(1.0);
    let (near, _) = pair(0.2);

    assert!(joint.step(&far, Some(&anchor)).unwrap().is_broken());
    assert_eq!(joint.state(), JointState::Broken(BreakAction::Disable));
    assert_eq!(joint.step(&near, Some(&anchor)), None);

    assert!(joint.enable());
    assert!(joint.step(&near, Some(&anchor)).unwrap().force().is_some());
}

#[test]
fn manual_disable_and_enable() {
    let mut joint = SpringJoint::new(SpringParams::new());
    let (a, b) = pair(1.0);
    joint.disable();
    assert_eq!(joint.step(&a, Some(&b)), None);
    assert_eq!(joint.state(), JointState::Active);
    assert!(joint.enable());
    assert!(joint.step(&a, Some(&b)).is_some());
}
