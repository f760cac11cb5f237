use huddle::{Engine, EngineError, InterviewId, InterviewStatus, Ms, ParticipantId, Role, Slot};

const H: Ms = 3_600_000; // 1 hour in ms
const M: Ms = 60_000; // 1 minute in ms

fn hour(h: i64) -> Ms {
    h * H
}

#[test]
fn full_booking_day() {
    let mut engine = Engine::new();

    let hr = engine.register_participant("Alice Johnson", "alice@huddle.dev", Role::HrManager);
    let interviewer =
        engine.register_participant("Carol Davis", "carol@huddle.dev", Role::Interviewer);
    for id in [hr, interviewer] {
        engine
            .lookup_participant_mut(id)
            .unwrap()
            .add_availability(Slot::new(hour(9), hour(17)));
    }

    // First booking of the day lands.
    let first = engine
        .book_interview(
            "John Doe",
            "Software Engineer",
            hr,
            interviewer,
            Slot::new(hour(9), hour(10)),
        )
        .unwrap();
    assert_eq!(first, InterviewId(1));

    // Same pair, half-overlapping slot: rejected with the blocking booking named.
    let err = engine
        .book_interview(
            "Jane Smith",
            "Product Manager",
            hr,
            interviewer,
            Slot::new(hour(9) + 30 * M, hour(10) + 30 * M),
        )
        .unwrap_err();
    assert_eq!(err, EngineError::SlotConflict { participant: hr, interview: first });

    // A third interviewer with no windows at all is simply not available.
    let newcomer = engine.register_participant("Eve Brown", "eve@huddle.dev", Role::Interviewer);
    let err = engine
        .book_interview("Jane Smith", "Product Manager", hr, newcomer, Slot::new(hour(11), hour(12)))
        .unwrap_err();
    assert_eq!(err, EngineError::NotAvailable(newcomer));

    // Cancelling frees the morning slot; the rebooking gets a fresh id.
    assert!(engine.cancel_interview(first));
    let rebooked = engine
        .book_interview(
            "Jane Smith",
            "Product Manager",
            hr,
            interviewer,
            Slot::new(hour(9), hour(10)),
        )
        .unwrap();
    assert_ne!(rebooked, first);

    // Registry keeps the cancelled record; the participant view does not.
    assert_eq!(engine.all_interviews().len(), 2);
    let active: Vec<_> = engine
        .interviews_for_participant(hr)
        .iter()
        .map(|iv| iv.id)
        .collect();
    assert_eq!(active, vec![rebooked]);
    assert_eq!(
        engine.lookup_interview(first).unwrap().status(),
        InterviewStatus::Cancelled
    );
}

#[test]
fn no_double_booking_across_many_attempts() {
    let mut engine = Engine::new();
    let hr = engine.register_participant("Alice Johnson", "alice@huddle.dev", Role::HrManager);
    let mut interviewers = Vec::new();
    for i in 0..4 {
        let id = engine.register_participant(
            format!("Interviewer {i}"),
            format!("iv{i}@huddle.dev"),
            Role::Interviewer,
        );
        engine
            .lookup_participant_mut(id)
            .unwrap()
            .add_availability(Slot::new(hour(9), hour(17)));
        interviewers.push(id);
    }
    engine
        .lookup_participant_mut(hr)
        .unwrap()
        .add_availability(Slot::new(hour(9), hour(17)));

    // Hammer the same morning with every interviewer; the single HR manager
    // can hold at most the number of disjoint hours requested.
    for (i, &interviewer) in interviewers.iter().enumerate() {
        for start in [hour(9), hour(9) + 30 * M, hour(10)] {
            let _ = engine.book_interview(
                format!("Candidate {i}"),
                "Engineer",
                hr,
                interviewer,
                Slot::new(start, start + H),
            );
        }
    }

    let booked = engine.interviews_for_participant(hr);
    for a in &booked {
        for b in &booked {
            if a.id != b.id {
                assert!(
                    !a.slot().overlaps(&b.slot()),
                    "interviews {} and {} overlap",
                    a.id,
                    b.id
                );
            }
        }
    }
}

#[test]
fn unknown_ids_resolve_to_empty_views() {
    let engine = Engine::new();
    assert!(engine.lookup_participant(ParticipantId(1)).is_none());
    assert!(engine.interviews_for_participant(ParticipantId(1)).is_empty());
    assert!(engine.all_interviews().is_empty());
}
