use super::*;
use crate::foundation::core::Rect;
use crate::motion::viewport::Viewport;

fn hidden() -> VisualState {
    VisualState::REST.with_opacity(0.0).with_translate(0.0, 50.0)
}

fn card(id: &str) -> AnimationTarget {
    AnimationTarget::new(id, hidden(), VisualState::REST, 1000)
}

fn viewport() -> Viewport {
    Viewport::new(1280.0, 800.0)
        .with_element("headline", Rect::new(0.0, 100.0, 800.0, 200.0))
        .with_element("card-0", Rect::new(0.0, 1200.0, 400.0, 1600.0))
        .with_element("card-1", Rect::new(400.0, 1200.0, 800.0, 1600.0))
        .with_element("card-2", Rect::new(800.0, 1200.0, 1200.0, 1600.0))
        .with_element("showcase", Rect::new(0.0, 1100.0, 1280.0, 1700.0))
        .with_element("far", Rect::new(0.0, 5000.0, 1280.0, 5400.0))
}

fn feed(orch: &mut AnimationOrchestrator, vp: &mut Viewport, crossings: Vec<Crossing>, now: TimeMs) {
    for c in crossings {
        orch.on_crossing(&c, now, vp);
    }
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("card-0")).unwrap();
    assert!(matches!(
        orch.register(card("card-0")),
        Err(FolioError::Animation(_))
    ));
}

#[test]
fn group_with_repeated_id_registers_nothing() {
    let mut orch = AnimationOrchestrator::new();
    let res = orch.register_group(AnimationGroup {
        base_delay_ms: 300,
        members: vec![card("card-0"), card("card-1"), card("card-0")],
        container: None,
    });
    assert!(matches!(res, Err(FolioError::Animation(_))));
    assert!(orch.is_empty());

    let res = orch.register_group(AnimationGroup {
        base_delay_ms: 300,
        members: vec![card("card-0")],
        container: Some(card("card-0")),
    });
    assert!(matches!(res, Err(FolioError::Animation(_))));
    assert!(orch.is_empty());
}

#[test]
fn missing_element_stays_pending() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("ghost")).unwrap();
    assert_eq!(orch.arm(&mut vp, TimeMs(0)), 0);
    assert_eq!(orch.state("ghost"), Some(AnimationState::Pending));
    assert_eq!(vp.live_subscriptions(), 0);
}

#[test]
fn never_plays_without_trigger() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("far")).unwrap();
    orch.arm(&mut vp, TimeMs(0));
    let crossings = vp.set_scroll(1000.0);
    feed(&mut orch, &mut vp, crossings, TimeMs(10));
    assert!(orch.tick(TimeMs(60_000)).is_empty());
    assert_eq!(orch.state("far"), Some(AnimationState::Armed));
    assert_eq!(orch.visual("far"), Some(hidden()));
}

#[test]
fn crossing_plays_then_completes() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("card-0").with_delay(200)).unwrap();
    orch.arm(&mut vp, TimeMs(0));

    let crossings = vp.set_scroll(600.0);
    feed(&mut orch, &mut vp, crossings, TimeMs(1000));
    assert_eq!(orch.state("card-0"), Some(AnimationState::Playing));
    assert_eq!(orch.scheduled_start("card-0"), Some(TimeMs(1200)));
    assert_eq!(vp.live_subscriptions(), 0);

    assert!(orch.tick(TimeMs(1100)).is_empty());
    assert_eq!(orch.visual("card-0"), Some(hidden()));

    assert_eq!(
        orch.tick(TimeMs(1700)),
        vec![AnimationEvent::Started {
            id: "card-0".into()
        }]
    );
    let mid = orch.visual("card-0").unwrap();
    assert!((mid.opacity - 0.5).abs() < 1e-9);

    assert_eq!(
        orch.tick(TimeMs(2200)),
        vec![AnimationEvent::Completed {
            id: "card-0".into()
        }]
    );
    assert_eq!(orch.state("card-0"), Some(AnimationState::Completed));
    assert_eq!(orch.visual("card-0"), Some(VisualState::REST));
}

#[test]
fn completed_targets_never_replay() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("card-0")).unwrap();
    orch.arm(&mut vp, TimeMs(0));
    let crossings = vp.set_scroll(600.0);
    let stale = crossings.clone();
    feed(&mut orch, &mut vp, crossings, TimeMs(0));
    orch.tick(TimeMs(1000));
    assert_eq!(orch.state("card-0"), Some(AnimationState::Completed));

    for (i, y) in [0.0, 600.0, 0.0, 600.0].into_iter().enumerate() {
        let crossings = vp.set_scroll(y);
        feed(&mut orch, &mut vp, crossings, TimeMs(2000 + i as u64));
    }
    feed(&mut orch, &mut vp, stale, TimeMs(3000));
    orch.arm(&mut vp, TimeMs(3000));

    assert!(orch.tick(TimeMs(10_000)).is_empty());
    assert_eq!(orch.state("card-0"), Some(AnimationState::Completed));
    assert_eq!(orch.visual("card-0"), Some(VisualState::REST));
}

#[test]
fn group_members_are_staggered() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register_group(AnimationGroup {
        base_delay_ms: 300,
        members: vec![card("card-0"), card("card-1"), card("card-2")],
        container: Some(
            AnimationTarget::new(
                "showcase",
                VisualState::REST.with_opacity(0.0),
                VisualState::REST,
                1500,
            )
            .with_trigger(Trigger::Ratio { fraction: 0.2 }),
        ),
    })
    .unwrap();
    assert_eq!(orch.len(), 4);
    assert_eq!(orch.arm(&mut vp, TimeMs(0)), 4);

    let crossings = vp.set_scroll(600.0);
    feed(&mut orch, &mut vp, crossings, TimeMs(5000));
    assert_eq!(orch.scheduled_start("card-0"), Some(TimeMs(5300)));
    assert_eq!(orch.scheduled_start("card-1"), Some(TimeMs(5600)));
    assert_eq!(orch.scheduled_start("card-2"), Some(TimeMs(5900)));
    assert_eq!(orch.target("showcase").unwrap().delay_ms, 0);
}

#[test]
fn immediate_targets_start_on_arm() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("headline").with_trigger(Trigger::Immediate).with_delay(400))
        .unwrap();
    orch.arm(&mut vp, TimeMs(100));
    assert_eq!(orch.state("headline"), Some(AnimationState::Playing));
    assert_eq!(orch.scheduled_start("headline"), Some(TimeMs(500)));
    assert_eq!(vp.live_subscriptions(), 0);
}

#[test]
fn unmount_cancels_observer_and_tween() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    orch.register(card("card-0")).unwrap();
    orch.register(card("card-1")).unwrap();
    orch.arm(&mut vp, TimeMs(0));
    assert_eq!(vp.live_subscriptions(), 2);

    // card-0 playing, card-1 still armed.
    let crossings: Vec<_> = vp
        .set_scroll(600.0)
        .into_iter()
        .filter(|c| c.target == "card-0")
        .collect();
    feed(&mut orch, &mut vp, crossings, TimeMs(0));

    assert!(orch.unmount("card-0", &mut vp));
    assert!(orch.unmount("card-1", &mut vp));
    assert!(!orch.unmount("card-1", &mut vp));
    assert_eq!(vp.live_subscriptions(), 0);
    assert!(orch.tick(TimeMs(10_000)).is_empty());
    assert!(orch.state("card-0").is_none());
}

#[test]
fn dispose_releases_everything() {
    let mut vp = viewport();
    let mut orch = AnimationOrchestrator::new();
    for id in ["card-0", "card-1", "far"] {
        orch.register(card(id)).unwrap();
    }
    orch.arm(&mut vp, TimeMs(0));
    orch.dispose(&mut vp);
    assert!(orch.is_empty());
    assert_eq!(vp.live_subscriptions(), 0);
}
