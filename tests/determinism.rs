use tether::{Body, JointSet, NoOpObserver, SpringJoint, SpringParams, StepConfig, Vec2};

#[test]
fn joint_set_deterministic() {
    let results: Vec<_> = (0..5).map(|_| {
        let mut set: JointSet<Vec2<f32>> = JointSet::new();
        let a = set.add_body(Body::new(Vec2::new(2.0, 1.0), 1.0).with_velocity(Vec2::new(0.0, 3.0)));
        let b = set.add_body(Body::new(Vec2::new(-1.0, 0.0), 2.0));
        let params = SpringParams::new()
            .with_distance(1.0)
            .with_frequency(3.0)
            .with_damping_ratio(0.3)
            .with_anchor(Vec2::new(0.1, 0.0));
        set.add_joint(a, Some(b), SpringJoint::new(params)).unwrap();
        let config = StepConfig::new().with_gravity(Vec2::new(0.0, -9.81)).with_sub_steps(2);
        for _ in 0..300 {
            set.step(1.0 / 60.0, &config, &mut NoOpObserver);
        }
        (set.body(a).unwrap().position, set.body(b).unwrap().position)
    }).collect();

    for r in &results[1..] {
        assert_eq!(results[0].0.x, r.0.x);
        assert_eq!(results[0].0.y, r.0.y);
        assert_eq!(results[0].1.x, r.1.x);
        assert_eq!(results[0].1.y, r.1.y);
    }
}
