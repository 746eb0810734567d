//! SIP Dialog Session
//!
//! This example drives a call-signaling dialog through its lifecycle.
//!
//! Key concepts:
//! - Several transitions per event, chosen by guards
//! - Guards reading event payload (CSeq) and owner state (direction)
//! - Combined guards with `and`
//! - Exit -> action -> entry ordering on every taken transition
//!
//! Run with: RUST_LOG=mealy=debug cargo run --example sip_dialog

use mealy::builder::{transition, BuildError, StateMachineBuilder};
use mealy::core::{Event, Guard};
use mealy::event_enum;
use mealy::machine::{MachineOptions, Outcome, State, StateMachine};

event_enum! {
    enum EventId {
        Invite,
        ProvisionalResponse,
        InviteAccept,
        InviteAcknowledge,
        InviteRejectAcknowledge,
        Bye,
        ByeAccept,
        ByeReject,
        TerminateSession,
        Options,
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Origin {
    Service,
    Network,
}

// Decoded signaling event
struct SipEvent {
    id: EventId,
    cseq: u32,
    origin: Origin,
}

impl Event for SipEvent {
    type Id = EventId;

    fn id(&self) -> EventId {
        self.id
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Direction {
    Incoming,
    Outgoing,
}

// Driven object: what the dialog knows about itself
struct Dialog {
    call_id: String,
    direction: Direction,
    invite_cseq: Option<u32>,
}

fn network(id: EventId, cseq: u32) -> SipEvent {
    SipEvent {
        id,
        cseq,
        origin: Origin::Network,
    }
}

fn service(id: EventId, cseq: u32) -> SipEvent {
    SipEvent {
        id,
        cseq,
        origin: Origin::Service,
    }
}

fn handle_invite(d: &mut Dialog, ev: &SipEvent) {
    d.invite_cseq = Some(ev.cseq);
    println!("  [{}] INVITE recorded with CSeq {}", d.call_id, ev.cseq);
}

fn announced(name: &'static str) -> State<Dialog, SipEvent> {
    State::new(name)
        .on_entry(move |d: &mut Dialog, ev: &SipEvent| {
            println!("  [{}] enter {name} on {}", d.call_id, ev.id.name())
        })
        .on_exit(move |d: &mut Dialog, _: &SipEvent| println!("  [{}] exit {name}", d.call_id))
}

fn target_is_incoming() -> Guard<Dialog, SipEvent> {
    Guard::new(|d: &Dialog, _: &SipEvent| d.direction == Direction::Incoming)
}

fn target_is_outgoing() -> Guard<Dialog, SipEvent> {
    Guard::new(|d: &Dialog, _: &SipEvent| d.direction == Direction::Outgoing)
}

fn source_is_not_service() -> Guard<Dialog, SipEvent> {
    Guard::new(|_: &Dialog, ev: &SipEvent| ev.origin != Origin::Service)
}

fn same_cseq_as_invite() -> Guard<Dialog, SipEvent> {
    Guard::new(|d: &Dialog, ev: &SipEvent| d.invite_cseq == Some(ev.cseq))
}

fn say(label: &'static str) -> impl Fn(&mut Dialog, &SipEvent) + Send + Sync + 'static {
    move |d: &mut Dialog, _: &SipEvent| println!("  [{}] action: {label}", d.call_id)
}

fn session(dialog: Dialog) -> Result<StateMachine<Dialog, SipEvent>, BuildError> {
    use EventId::*;

    let options = MachineOptions::named(dialog.call_id.clone()).with_history(Some(32));

    StateMachineBuilder::new()
        .states([
            announced("Idle"),
            announced("EstablishingUnstable"),
            announced("Established"),
            announced("TerminatingUnstable"),
            announced("Terminated"),
        ])
        .initial("Idle")
        .options(options)
        .transition(transition("Idle", Invite, "Idle").action(handle_invite))?
        .transition(
            transition("Idle", ProvisionalResponse, "EstablishingUnstable")
                .guard(target_is_incoming()),
        )?
        .transition(
            transition("Idle", InviteAccept, "Established")
                .action(say("signalling ongoing"))
                .guard(target_is_incoming()),
        )?
        .transition(
            transition("Idle", InviteRejectAcknowledge, "Terminated").guard(target_is_outgoing()),
        )?
        .transition(transition("Idle", TerminateSession, "Terminated"))?
        .transition(
            transition("EstablishingUnstable", InviteAccept, "Established")
                .action(say("signalling ongoing"))
                .guard(target_is_incoming()),
        )?
        .transition(
            transition(
                "EstablishingUnstable",
                InviteRejectAcknowledge,
                "Terminated",
            )
            .guard(target_is_outgoing()),
        )?
        .transition(
            transition("EstablishingUnstable", ByeAccept, "Terminated")
                .guard(source_is_not_service().and(target_is_incoming())),
        )?
        .transition(
            transition("EstablishingUnstable", ByeReject, "Terminated")
                .guard(source_is_not_service().and(target_is_incoming())),
        )?
        .transition(transition(
            "EstablishingUnstable",
            TerminateSession,
            "Terminated",
        ))?
        .transition(
            transition("Established", InviteAcknowledge, "Established")
                .action(say("signalling ongoing -> established"))
                .guard(same_cseq_as_invite()),
        )?
        .transition(
            transition("Established", Bye, "TerminatingUnstable")
                .action(say("established -> terminating"))
                .guard(source_is_not_service()),
        )?
        .transition(
            transition("Established", TerminateSession, "Terminated")
                .action(say("terminating -> final")),
        )?
        .transition(transition("TerminatingUnstable", ByeAccept, "Terminated"))?
        .transition(transition("TerminatingUnstable", ByeReject, "Terminated"))?
        .transition(
            transition("TerminatingUnstable", TerminateSession, "Terminated")
                .action(say("terminating -> final")),
        )?
        .build(dialog)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "mealy=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== SIP Dialog Example ===\n");

    let mut machine = session(Dialog {
        call_id: "a84b4c76e66710".to_string(),
        direction: Direction::Incoming,
        invite_cseq: None,
    })?;
    machine.start()?;

    let script = [
        network(EventId::Invite, 314159),
        network(EventId::ProvisionalResponse, 314159),
        network(EventId::Options, 314160),
        network(EventId::InviteAccept, 314159),
        network(EventId::InviteAcknowledge, 1),
        network(EventId::InviteAcknowledge, 314159),
        service(EventId::Bye, 314161),
        network(EventId::Bye, 314161),
        network(EventId::ByeAccept, 314161),
    ];

    for event in &script {
        let SipEvent { id, cseq, origin } = event;
        println!("{} (CSeq {cseq}, from {origin:?})", id.name());
        match machine.post_event(event)? {
            Outcome::Processed { to, .. } => {
                println!("  -> now in {}\n", machine.table()[to].name())
            }
            Outcome::Ignored => println!("  -> ignored in {}\n", machine.current().name()),
            Outcome::NotRunning => println!("  -> machine not running\n"),
        }
    }

    if let Some(history) = machine.history() {
        let path: Vec<&str> = history
            .get_path()
            .into_iter()
            .map(|id| machine.table()[id].name())
            .collect();
        println!("Path: {}", path.join(" -> "));
    }

    machine.halt()?;
    println!("\nSnapshot: {}", machine.snapshot().to_json()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
