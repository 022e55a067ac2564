use vizij_trail_core::{
    parse_root_curves_json, Axis, FrameTiming, KeyedCurve, Keyframe, RootCurves, TrailConfig,
    TrailError, TrailInputs, TrailSampler, WorldPoint, MAX_TRAIL_FRAMES,
};

fn top_down(p: WorldPoint) -> [f32; 2] {
    // 100 px per meter looking down the y axis
    [p[0] * 100.0, p[2] * 100.0]
}

fn identity(p: WorldPoint) -> WorldPoint {
    p
}

#[test]
fn walk_forward_fixture_builds_subdivided_trail() {
    let json = vizij_test_fixtures::trails::json("walk-forward").expect("fixture");
    let curves = parse_root_curves_json(&json).expect("valid root curves");
    assert_eq!(curves.name, "walk_forward");

    let timing = FrameTiming::new(30.0);
    let frame_count = timing.frame_count(curves.length);
    assert_eq!(frame_count, 31);

    let frame_time = |f: usize| timing.frame_time(f);
    let inputs = TrailInputs {
        curves: curves.as_vector_curve(),
        frame_count,
        scale: 1.0,
        frame_time: &frame_time,
        transform: &identity,
        project: &top_down,
    };
    let mut sampler = TrailSampler::new(TrailConfig::default());
    let line = sampler.build(&inputs).expect("all axes present").to_vec();

    // ~6.7 px per frame * 0.2 rounds to one insert per segment.
    assert_eq!(line.len(), 31 + 30);
    assert_eq!(sampler.frame_points().len(), 31);
    let first = line[0];
    let last = line[line.len() - 1];
    assert!((first[1] - 1.0).abs() < 1e-6 && first[2].abs() < 1e-6);
    assert!((last[2] - 2.0).abs() < 1e-5);
    // The inserted point halfway through frame 0..1 bobs between the two keys.
    assert!(line[1][1] > 1.0 && line[1][1] < 1.05);
}

#[test]
fn stationary_fixture_never_subdivides() {
    let curves: RootCurves = vizij_test_fixtures::trails::load("turn-in-place").unwrap();
    curves.validate().unwrap();
    let timing = FrameTiming::new(24.0);
    let frame_time = |f: usize| timing.frame_time(f);
    let inputs = TrailInputs {
        curves: curves.as_vector_curve(),
        frame_count: timing.frame_count(curves.length),
        scale: 1.0,
        frame_time: &frame_time,
        transform: &identity,
        project: &top_down,
    };
    let line = TrailSampler::new(TrailConfig::new(5.0, 64))
        .build(&inputs)
        .unwrap()
        .to_vec();
    assert_eq!(line.len(), 49);
    assert!(line.iter().all(|p| *p == [0.25, 0.9, -0.5]));
}

#[test]
fn missing_axis_fixture_loads_but_cannot_be_sampled() {
    let json = vizij_test_fixtures::trails::json("missing-axis").unwrap();
    let curves = parse_root_curves_json(&json).expect("absent axes are allowed at load");
    assert!(curves.y.is_none());

    let frame_time = |f: usize| f as f32 / 60.0;
    let inputs = TrailInputs {
        curves: curves.as_vector_curve(),
        frame_count: 31,
        scale: 1.0,
        frame_time: &frame_time,
        transform: &identity,
        project: &top_down,
    };
    let mut sampler = TrailSampler::default();
    assert_eq!(
        sampler.build(&inputs).unwrap_err(),
        TrailError::CurveUnavailable { axis: Axis::Y }
    );
    assert!(sampler.frame_points().is_empty());
}

#[test]
fn parse_rejects_bad_documents() {
    assert!(matches!(
        parse_root_curves_json("{ not json"),
        Err(TrailError::Parse(_))
    ));
    let decreasing = r#"{
        "length": 1.0,
        "x": { "keys": [{ "time": 1.0, "value": 0.0 }, { "time": 0.0, "value": 1.0 }] }
    }"#;
    assert!(matches!(
        parse_root_curves_json(decreasing),
        Err(TrailError::InvalidCurve(_))
    ));
    assert!(matches!(
        parse_root_curves_json(r#"{ "length": -2.0 }"#),
        Err(TrailError::InvalidCurve(_))
    ));
}

#[test]
fn constructed_curves_take_length_from_last_key() {
    let curves = RootCurves::new(
        KeyedCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.5, 3.0)]),
        KeyedCurve::constant(0.0),
        KeyedCurve::new(vec![Keyframe::step(0.0, 1.0), Keyframe::new(2.0, 5.0)]),
    );
    assert_eq!(curves.length, 2.0);
    let v = curves.as_vector_curve();
    assert_eq!(v.evaluate(0.75).unwrap(), [1.5, 0.0, 1.0]);
    assert_eq!(v.evaluate(2.0).unwrap(), [3.0, 0.0, 5.0]);
}

#[test]
fn huge_clip_length_samples_a_bounded_trail() {
    let json = r#"{
        "name": "runaway",
        "length": 1e30,
        "x": { "keys": [{ "time": 0.0, "value": 0.5 }] },
        "y": { "keys": [{ "time": 0.0, "value": 1.0 }] },
        "z": { "keys": [{ "time": 0.0, "value": 0.0 }] }
    }"#;
    let curves = parse_root_curves_json(json).expect("finite length is accepted");

    let timing = FrameTiming::new(30.0);
    let frame_count = timing.frame_count(curves.length);
    assert_eq!(frame_count, MAX_TRAIL_FRAMES);

    let frame_time = |f: usize| timing.frame_time(f);
    let inputs = TrailInputs {
        curves: curves.as_vector_curve(),
        frame_count,
        scale: 1.0,
        frame_time: &frame_time,
        transform: &identity,
        project: &top_down,
    };
    let mut sampler = TrailSampler::default();
    let len = sampler.build(&inputs).expect("all axes present").len();
    // Stationary root: one point per frame, nothing inserted.
    assert_eq!(len, MAX_TRAIL_FRAMES);
    assert_eq!(sampler.frame_points().len(), MAX_TRAIL_FRAMES);
}
