//! SIP-like dialog used by the integration tests.

#![allow(dead_code)]

use mealy::builder::{transition, BuildError, StateMachineBuilder};
use mealy::core::{Event, Guard};
use mealy::machine::{MachineOptions, State, StateMachine};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum EventId {
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

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Source {
    Service,
    Remote,
}

#[derive(Clone, Debug)]
pub struct DialogEvent {
    pub id: EventId,
    pub cseq: u32,
    pub source: Source,
}

impl DialogEvent {
    pub fn remote(id: EventId, cseq: u32) -> Self {
        Self {
            id,
            cseq,
            source: Source::Remote,
        }
    }

    pub fn from_service(id: EventId, cseq: u32) -> Self {
        Self {
            id,
            cseq,
            source: Source::Service,
        }
    }
}

impl Event for DialogEvent {
    type Id = EventId;

    fn id(&self) -> EventId {
        self.id
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Incoming,
    Outgoing,
}

#[derive(Debug)]
pub struct Dialog {
    pub direction: Direction,
    pub initial_cseq: Option<u32>,
    pub log: Vec<String>,
}

impl Dialog {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            initial_cseq: None,
            log: Vec::new(),
        }
    }

    fn note(&mut self, entry: impl Into<String>) {
        self.log.push(entry.into());
    }

    pub fn count(&self, entry: &str) -> usize {
        self.log.iter().filter(|e| *e == entry).count()
    }
}

fn dialog_state(name: &'static str) -> State<Dialog, DialogEvent> {
    State::new(name)
        .on_entry(move |d: &mut Dialog, _: &DialogEvent| d.note(format!("{name}.enter")))
        .on_exit(move |d: &mut Dialog, _: &DialogEvent| d.note(format!("{name}.exit")))
}

fn handle_invite(d: &mut Dialog, ev: &DialogEvent) {
    d.initial_cseq = Some(ev.cseq);
    d.note("handleInvite");
}

fn log_action(label: &'static str) -> impl Fn(&mut Dialog, &DialogEvent) + Send + Sync + 'static {
    move |d: &mut Dialog, _: &DialogEvent| d.note(label)
}

fn target_is_incoming() -> Guard<Dialog, DialogEvent> {
    Guard::new(|d: &Dialog, _: &DialogEvent| d.direction == Direction::Incoming)
}

fn target_is_outgoing() -> Guard<Dialog, DialogEvent> {
    Guard::new(|d: &Dialog, _: &DialogEvent| d.direction == Direction::Outgoing)
}

fn source_is_not_service() -> Guard<Dialog, DialogEvent> {
    Guard::new(|_: &Dialog, ev: &DialogEvent| ev.source != Source::Service)
}

fn same_cseq_as_initial_invite() -> Guard<Dialog, DialogEvent> {
    Guard::new(|d: &Dialog, ev: &DialogEvent| d.initial_cseq == Some(ev.cseq))
}

/// The dialog lifecycle: Idle, EstablishingUnstable, Established,
/// TerminatingUnstable, Terminated.
pub fn dialog_machine(
    direction: Direction,
    options: MachineOptions,
) -> Result<StateMachine<Dialog, DialogEvent>, BuildError> {
    use EventId::*;

    StateMachineBuilder::new()
        .states([
            dialog_state("Idle"),
            dialog_state("EstablishingUnstable"),
            dialog_state("Established"),
            dialog_state("TerminatingUnstable"),
            dialog_state("Terminated"),
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
                .action(log_action("signallingOngoing"))
                .guard(target_is_incoming()),
        )?
        .transition(
            transition("Idle", InviteRejectAcknowledge, "Terminated").guard(target_is_outgoing()),
        )?
        .transition(transition("Idle", TerminateSession, "Terminated"))?
        .transition(
            transition("EstablishingUnstable", InviteAccept, "Established")
                .action(log_action("signallingOngoing"))
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
                .action(log_action("fromSignallingOngoingToEstablished"))
                .guard(same_cseq_as_initial_invite()),
        )?
        .transition(
            transition("Established", Bye, "TerminatingUnstable")
                .action(log_action("fromEstablishedToTerminating"))
                .guard(source_is_not_service()),
        )?
        .transition(
            transition("Established", TerminateSession, "Terminated")
                .action(log_action("fromTerminatingToFinal")),
        )?
        .transition(transition("TerminatingUnstable", ByeAccept, "Terminated"))?
        .transition(transition("TerminatingUnstable", ByeReject, "Terminated"))?
        .transition(
            transition("TerminatingUnstable", TerminateSession, "Terminated")
                .action(log_action("fromTerminatingToFinal")),
        )?
        .build(Dialog::new(direction))
}
