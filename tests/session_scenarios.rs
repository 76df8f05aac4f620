use synthstellar::models::engine::EngineError;
use synthstellar::{
    CoreEvent, GameSettings, Judgement, MatchPolicy, MissPolicy, SessionContext, SessionState,
};

/// Default layout: 4 lanes, judgement line at 500, windows 20/40/60/80.
fn session() -> SessionContext {
    let mut session = SessionContext::new(GameSettings {
        seed: Some(11),
        ..GameSettings::new()
    })
    .unwrap();
    session.drain_events();
    session
}

fn session_with(settings: GameSettings) -> SessionContext {
    let mut session = SessionContext::new(settings).unwrap();
    session.drain_events();
    session
}

/// Moves every live note so the given note sits at `distance` from the line.
fn place(session: &mut SessionContext, id: u64, distance: f64) {
    let note = session.notes().get(id).unwrap();
    let delta = session.settings().judgement_line + distance - note.position;
    session.advance_notes(delta);
}

#[test]
fn scenario_a_perfect_hit() {
    let mut session = session();
    let id = session.spawn_note(2).unwrap();
    place(&mut session, id, -15.0);

    let outcome = session.process_hit(2).unwrap().unwrap();
    assert_eq!(outcome.judgement, Judgement::Perfect);
    assert_eq!(outcome.score_delta, 100);
    assert_eq!(outcome.lane, 2);
    assert!(session.notes().get(id).is_none());
    assert_eq!(session.score().combo, 1);
    assert_eq!(session.score().score, 100);

    let events = session.drain_events();
    assert!(events.contains(&CoreEvent::NoteRemoved { id }));
    assert!(events.contains(&CoreEvent::JudgementOccurred {
        judgement: Judgement::Perfect,
        lane: 2,
        score_delta: 100,
        cumulative_score: 100,
        tier_count: 1,
        combo: 1,
    }));
}

#[test]
fn scenario_b_good_hit() {
    let mut session = session();
    let id = session.spawn_note(0).unwrap();
    place(&mut session, id, 45.0);

    let outcome = session.process_hit(0).unwrap().unwrap();
    assert_eq!(outcome.judgement, Judgement::Good);
    assert_eq!(outcome.score_delta, 20);
}

#[test]
fn scenario_c_sweeper_expires_passed_note() {
    let mut session = session();
    let hit = session.spawn_note(3).unwrap();
    place(&mut session, hit, 0.0);
    session.process_hit(3).unwrap();
    assert_eq!(session.score().combo, 1);

    let id = session.spawn_note(1).unwrap();
    place(&mut session, id, 81.0);
    session.drain_events();

    // A zero-length frame still runs the sweep.
    session.update(0.0);

    assert!(session.notes().get(id).is_none());
    assert_eq!(session.score().combo, 0);
    let events = session.drain_events();
    assert_eq!(
        events,
        vec![
            CoreEvent::NoteRemoved { id },
            CoreEvent::JudgementOccurred {
                judgement: Judgement::Miss,
                lane: 1,
                score_delta: 0,
                cumulative_score: 100,
                tier_count: 1,
                combo: 0,
            },
        ]
    );
}

#[test]
fn scenario_d_session_timer_clears_playfield() {
    let mut session = session_with(GameSettings {
        session_duration_ms: 100.0,
        spawn_delay_min_ms: 10_000.0,
        spawn_delay_max_ms: 10_000.0,
        seed: Some(5),
        ..GameSettings::new()
    });

    let scored = session.spawn_note(0).unwrap();
    place(&mut session, scored, 0.0);
    session.process_hit(0).unwrap();

    let live: Vec<u64> = (1..4).map(|lane| session.spawn_note(lane).unwrap()).collect();
    session.drain_events();

    session.update(0.2);

    assert_eq!(session.state(), SessionState::Finished);
    assert!(session.notes().is_empty());

    let events = session.drain_events();
    for id in &live {
        assert!(events.contains(&CoreEvent::NoteRemoved { id: *id }));
    }
    let Some(CoreEvent::SessionEnded(summary)) = events.last() else {
        panic!("expected SessionEnded last, got {:?}", events);
    };
    assert_eq!(summary.final_score, 100);
    assert_eq!(summary.hit_stats.perfect, 1);
    assert!(!events.iter().any(|e| matches!(e, CoreEvent::JudgementOccurred { .. })));

    // Nothing moves once finished.
    session.update(20.0);
    assert_eq!(session.process_hit(1).unwrap(), None);
    assert!(session.spawn_note(1).is_err());
    assert!(session.force_end().is_err());
    assert!(session.drain_events().is_empty());
    assert_eq!(session.score().score, 100);
}

#[test]
fn spawn_due_after_session_end_never_fires() {
    // End at 100ms; spawns due at 60ms and then 120ms, all inside one frame.
    let mut session = session_with(GameSettings {
        session_duration_ms: 100.0,
        spawn_delay_min_ms: 60.0,
        spawn_delay_max_ms: 60.0,
        seed: Some(9),
        ..GameSettings::new()
    });

    session.update(0.2);

    assert_eq!(session.state(), SessionState::Finished);
    let events = session.drain_events();
    let ended_at = events
        .iter()
        .position(|e| matches!(e, CoreEvent::SessionEnded(_)))
        .unwrap();
    assert_eq!(ended_at, events.len() - 1);

    let spawned: Vec<usize> = events
        .iter()
        .enumerate()
        .filter(|(_, e)| matches!(e, CoreEvent::NoteSpawned { .. }))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(spawned.len(), 1);
    assert!(spawned[0] < ended_at);

    // The in-flight spawn stays cancelled on later frames too.
    session.update(1.0);
    assert!(session.drain_events().is_empty());
    assert!(session.notes().is_empty());
}

#[test]
fn scenario_e_restart_while_playing_is_ignored() {
    let mut session = session();
    let id = session.spawn_note(2).unwrap();
    place(&mut session, id, 0.0);
    session.process_hit(2).unwrap();

    let err = session.restart().unwrap_err();
    assert!(matches!(
        err,
        EngineError::InvalidStateTransition {
            from: SessionState::Playing,
            ..
        }
    ));
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.score().score, 100);
    assert_eq!(session.score().combo, 1);
}

#[test]
fn restart_after_finish_starts_fresh() {
    let mut session = session();
    let id = session.spawn_note(2).unwrap();
    place(&mut session, id, 0.0);
    session.process_hit(2).unwrap();
    session.spawn_note(1).unwrap();
    session.update(0.5);
    session.force_end().unwrap();
    session.drain_events();

    session.restart().unwrap();

    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.clock_ms(), 0.0);
    assert_eq!(session.score().score, 0);
    assert_eq!(session.score().max_combo, 0);
    assert!(session.notes().is_empty());
    assert_eq!(
        session.drain_events(),
        vec![CoreEvent::SessionStarted { lane_count: 4 }]
    );
}

#[test]
fn press_without_candidate_emits_feedback_only() {
    let mut session = session();
    let id = session.spawn_note(1).unwrap();
    place(&mut session, id, -200.0);
    session.drain_events();

    assert_eq!(session.process_hit(1).unwrap(), None);
    assert_eq!(session.process_hit(0).unwrap(), None);
    assert!(session.notes().get(id).is_some());
    assert_eq!(
        session.drain_events(),
        vec![
            CoreEvent::LanePressed { lane: 1 },
            CoreEvent::LanePressed { lane: 0 },
        ]
    );
}

#[test]
fn press_picks_closest_note_in_lane() {
    let mut session = session();
    let far = session.spawn_note(0).unwrap();
    session.advance_notes(30.0);
    let near = session.spawn_note(0).unwrap();
    let other_lane = session.spawn_note(1).unwrap();
    // far at distance +25, near at -5
    session.advance_notes(495.0);

    let outcome = session.process_hit(0).unwrap().unwrap();
    assert_eq!(outcome.judgement, Judgement::Perfect);
    assert!(session.notes().get(near).is_none());
    assert!(session.notes().get(far).is_some());
    assert!(session.notes().get(other_lane).is_some());
}

#[test]
fn equal_distance_goes_to_earliest_note() {
    let mut session = session();
    let first = session.spawn_note(3).unwrap();
    let second = session.spawn_note(3).unwrap();
    session.advance_notes(500.0);

    session.process_hit(3).unwrap();
    assert!(session.notes().get(first).is_none());
    assert!(session.notes().get(second).is_some());
}

#[test]
fn invalid_lane_is_rejected() {
    let mut session = session();
    assert_eq!(
        session.process_hit(4),
        Err(EngineError::InvalidLane {
            lane: 4,
            lane_count: 4
        })
    );
    assert!(session.spawn_note(9).is_err());
    assert!(session.drain_events().is_empty());
}

#[test]
fn match_policy_controls_unscored_matches() {
    for (policy, removed) in [
        (MatchPolicy::AlwaysRemove, true),
        (MatchPolicy::RemoveOnTier, false),
    ] {
        let mut session = session_with(GameSettings {
            match_policy: policy,
            seed: Some(2),
            ..GameSettings::new()
        });
        let id = session.spawn_note(0).unwrap();
        // Past GOOD (60) but inside MISS (80).
        place(&mut session, id, 70.0);

        assert_eq!(session.process_hit(0).unwrap(), None);
        assert_eq!(session.notes().get(id).is_none(), removed, "{:?}", policy);
        assert_eq!(session.score().score, 0);
        assert_eq!(session.score().hit_stats.total(), 0);
    }
}

#[test]
fn miss_policy_controls_tier_counters() {
    for (policy, perfect_after_miss) in
        [(MissPolicy::ResetCounts, 0), (MissPolicy::KeepCounts, 1)]
    {
        let mut session = session_with(GameSettings {
            miss_policy: policy,
            seed: Some(2),
            ..GameSettings::new()
        });
        let hit = session.spawn_note(0).unwrap();
        place(&mut session, hit, 0.0);
        session.process_hit(0).unwrap();

        let missed = session.spawn_note(1).unwrap();
        place(&mut session, missed, 90.0);
        session.sweep_misses();

        let stats = &session.score().hit_stats;
        assert_eq!(stats.perfect, perfect_after_miss, "{:?}", policy);
        assert_eq!(stats.miss, 1);
        assert_eq!(session.score().score, 100);
    }
}

#[test]
fn sweeping_twice_counts_once() {
    let mut session = session();
    let id = session.spawn_note(2).unwrap();
    place(&mut session, id, 100.0);

    assert_eq!(session.sweep_misses().len(), 1);
    assert!(session.sweep_misses().is_empty());
    assert_eq!(session.score().hit_stats.miss, 1);
}

#[test]
fn scheduled_notes_spawn_and_fall() {
    let mut session = session();
    for _ in 0..200 {
        session.update(0.01);
    }

    let events = session.drain_events();
    let spawned = events
        .iter()
        .filter(|e| matches!(e, CoreEvent::NoteSpawned { .. }))
        .count();
    // 2 seconds with 400..1200ms gaps.
    assert!((1..=5).contains(&spawned), "spawned {spawned}");
    assert!(session.notes().iter().all(|n| n.lane < 4));
}

#[test]
fn full_session_ends_on_its_own() {
    let mut session = session();
    let mut ended = 0;
    for _ in 0..(31 * 60) {
        session.update(1.0 / 60.0);
        ended += session
            .drain_events()
            .iter()
            .filter(|e| matches!(e, CoreEvent::SessionEnded(_)))
            .count();
    }

    assert_eq!(ended, 1);
    assert_eq!(session.state(), SessionState::Finished);
    // Unplayed notes all ended as misses or were cleared at the end.
    assert_eq!(session.score().score, 0);
    assert!(session.score().hit_stats.miss > 0);
}
