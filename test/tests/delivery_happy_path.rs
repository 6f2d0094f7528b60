/// End-to-end delivery through the send/acknowledge/confirm handshake
/// when the transport answers every request immediately

use courier_client::{
    Completion, ConfirmedEvent, Destination, MessageId, Submission, SyncMode, TimedOutEvent,
};
use courier_test::{ProgressCall, TestHarness};

fn init_logging() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init()
        .ok();
}

fn submit(harness: &mut TestHarness<&'static str>, payload: &'static str) -> MessageId {
    let handler = harness.completions.handler();
    harness
        .manager
        .submit(payload, SyncMode::NonBlocking, None, Some(handler))
        .unwrap()
}

#[test]
fn handler_fires_once_with_confirmation() {
    init_logging();
    let mut harness = TestHarness::new();
    harness.transport.set_confirm_data(b"registered".to_vec());

    let id = submit(&mut harness, "spawn");

    // tick 0 sends, tick 1 receives the ack and probes, tick 2 receives the confirmation
    harness.tick_n(3);

    assert_eq!(harness.completions.count_for(&id), 1);
    let record = harness.completions.for_id(&id).unwrap();
    assert_eq!(record.tick, 2);
    match record.completion {
        Completion::Confirmed { id: confirmed_id, response } => {
            assert_eq!(confirmed_id, id);
            assert_eq!(response.id, Some(id));
            assert_eq!(response.data, b"registered".to_vec());
        }
        Completion::TimedOut { .. } => panic!("Expected confirmation, got timeout"),
    }

    // more ticks never fire it again
    harness.tick_n(10);
    assert_eq!(harness.completions.count_for(&id), 1);
}

#[test]
fn confirmed_message_leaves_every_structure() {
    let mut harness = TestHarness::new();
    let id = submit(&mut harness, "spawn");

    assert_eq!(harness.manager.queued_count(), 1);
    harness.tick();
    assert_eq!(harness.manager.queued_count(), 0);
    assert_eq!(harness.manager.awaiting_ack_count(), 1);

    harness.tick();
    assert_eq!(harness.manager.awaiting_ack_count(), 0);
    assert!(harness.manager.is_tracked(&id));
    assert_eq!(harness.manager.in_flight_count(), 1);
    // probe already sent this tick
    assert_eq!(harness.manager.confirmation_backlog(), 0);

    harness.tick();
    assert!(!harness.manager.is_tracked(&id));
    assert_eq!(harness.manager.in_flight_count(), 0);
    assert_eq!(harness.manager.confirmation_backlog(), 0);
    assert!(!harness.manager.is_gate_held());
    assert!(harness.manager.is_idle());
}

#[test]
fn envelope_goes_to_default_destination() {
    let mut harness = TestHarness::new();
    let id = submit(&mut harness, "spawn");
    harness.tick_n(3);

    let sends = harness.transport.sends();
    assert_eq!(sends.len(), 1);
    assert_eq!(sends[0].id, id);
    assert_eq!(sends[0].destination, Destination::new("/"));
}

#[test]
fn builder_submission_uses_destination_override() {
    let mut harness: TestHarness<&'static str> = TestHarness::new();
    let completions = harness.completions.clone();

    let id = harness
        .manager
        .send(
            Submission::new("spawn")
                .to("/commands")
                .on_complete(completions.handler()),
        )
        .unwrap();
    harness.tick_n(3);

    assert_eq!(harness.transport.sends()[0].destination, Destination::new("/commands"));
    let probes = harness.transport.probes_for(&id);
    assert_eq!(probes.len(), 1);
    assert_eq!(probes[0].destination, Destination::new("/commands"));
    assert_eq!(completions.count_for(&id), 1);
}

#[test]
fn non_blocking_messages_never_touch_progress() {
    let mut harness = TestHarness::new();
    submit(&mut harness, "a");
    submit(&mut harness, "b");
    harness.tick_n(5);

    assert_eq!(harness.progress_calls(), Vec::<ProgressCall>::new());
    assert_eq!(harness.completions.len(), 2);
}

#[test]
fn messages_without_handler_surface_as_events() {
    let mut harness: TestHarness<&'static str> = TestHarness::new();
    let id = harness
        .manager
        .submit("spawn", SyncMode::NonBlocking, None, None)
        .unwrap();
    harness.tick_n(3);

    let mut events = harness.manager.take_events();
    assert!(events.has::<ConfirmedEvent>());
    assert!(!events.has::<TimedOutEvent>());
    let confirmed: Vec<MessageId> = events.read::<ConfirmedEvent>().map(|(id, _)| id).collect();
    assert_eq!(confirmed, vec![id]);
    assert!(events.is_empty());
    assert!(harness.completions.is_empty());
}

#[test]
fn submitted_ids_are_unique_and_stamped() {
    let mut harness = TestHarness::new();
    let ids: Vec<MessageId> = (0..50).map(|_| submit(&mut harness, "bulk")).collect();

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
    assert!(ids.iter().all(|id| id.issued_millis() > 0));
}
