use vizij_trail_core::{ExtraOption, ExtraOptions, OptionsObserver, RepaintFlag};

#[derive(Default)]
struct Recorder(Vec<(ExtraOption, bool)>);

impl OptionsObserver for Recorder {
    fn on_change(&mut self, option: ExtraOption, value: bool) {
        self.0.push((option, value));
    }
}

#[test]
fn set_notifies_only_on_change() {
    let mut opts = ExtraOptions::default();
    let mut rec = Recorder::default();

    assert!(opts.set(ExtraOption::RootTrail, true, &mut rec));
    assert!(!opts.set(ExtraOption::RootTrail, true, &mut rec));
    assert!(opts.set(ExtraOption::RootTrail, false, &mut rec));
    assert_eq!(
        rec.0,
        vec![(ExtraOption::RootTrail, true), (ExtraOption::RootTrail, false)]
    );
}

#[test]
fn options_are_independent() {
    let mut opts = ExtraOptions::default();
    for option in ExtraOption::ALL {
        opts.toggle(option, &mut ());
        for other in ExtraOption::ALL {
            assert_eq!(opts.get(other), other == option, "{option:?} vs {other:?}");
        }
        opts.toggle(option, &mut ());
    }
    assert_eq!(opts, ExtraOptions::default());
}

#[test]
fn repaint_flag_collects_changes_until_taken() {
    let mut opts = ExtraOptions::default();
    let mut repaint = RepaintFlag::default();
    assert_eq!(repaint.take(), None);

    opts.toggle(ExtraOption::OnionSkin, &mut repaint);
    opts.toggle(ExtraOption::MirrorPreview, &mut repaint);
    opts.toggle(ExtraOption::OnionSkin, &mut repaint);
    assert!(repaint.is_requested());
    assert_eq!(
        repaint.take(),
        Some(vec![ExtraOption::OnionSkin, ExtraOption::MirrorPreview])
    );
    assert!(!repaint.is_requested());
    assert_eq!(repaint.take(), None);

    // Writing the current value is not a change.
    opts.set(ExtraOption::OnionSkin, false, &mut repaint);
    assert_eq!(repaint.take(), None);
}

#[test]
fn names_round_trip_and_match_serde() {
    for option in ExtraOption::ALL {
        assert_eq!(ExtraOption::from_name(option.name()), Some(option));
        let json = serde_json::to_string(&option).unwrap();
        assert_eq!(json, format!("\"{}\"", option.name()));
    }
    assert_eq!(ExtraOption::from_name("gridSnap"), None);
}

#[test]
fn enabled_lists_switched_on_options() {
    let opts = ExtraOptions {
        root_trail: true,
        auto_keyframe: true,
        ..Default::default()
    };
    let on: Vec<_> = opts.enabled().collect();
    assert_eq!(on, vec![ExtraOption::RootTrail, ExtraOption::AutoKeyframe]);
}

#[test]
fn preset_fixture_loads_with_missing_fields_defaulted() {
    let opts: ExtraOptions =
        vizij_test_fixtures::options::load("trail-only").expect("options fixture");
    assert!(opts.root_trail);
    assert!(!opts.onion_skin);
    assert!(!opts.mirror_preview);
}
