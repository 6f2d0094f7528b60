use std::collections::{HashSet, VecDeque};

use log::{debug, info, trace, warn};

use courier_shared::{
    AckFailurePolicy, ConfigError, ConfirmationProbe, Destination, DispatchConfig, Envelope,
    IdGenerator, Instant, MessageId, OverflowPolicy, Response, SyncMode, Timestamp, TransportError,
};

use crate::{
    delivery_events::DeliveryEvents,
    dispatch::{
        gate::Gate,
        in_flight_table::InFlightTable,
        message_context::{Completion, CompletionHandler, MessageContext},
        submission::Submission,
    },
    error::SubmitError,
    progress::{NoProgress, ProgressIndicator},
    transport::{ResponseReceiver, ResponseReceiverResult, Transport},
};

/// A primary send whose acknowledgement has not arrived yet
struct PendingSend<P> {
    context: MessageContext<P>,
    receiver: Box<dyn ResponseReceiver>,
}

/// A confirmation probe whose response has not arrived yet
struct PendingProbe {
    id: MessageId,
    receiver: Box<dyn ResponseReceiver>,
}

/// Ships submitted messages over a Transport and confirms, with a second
/// round-trip, that the remote host registered each of them.
///
/// Driven by the host calling `tick` once per frame. Each tick, in order:
/// 1. polls every outstanding transport request once
/// 2. sends at most one confirmation probe
/// 3. expires messages that have been in flight for too long
/// 4. unless a blocking message holds the gate, sends at most one queued message
///
/// Every submitted message reaches at most one terminal event, delivered to
/// its completion handler, or to `DeliveryEvents` when it has none.
pub struct DispatchManager<P> {
    config: DispatchConfig,
    transport: Box<dyn Transport<P>>,
    progress: Box<dyn ProgressIndicator>,
    id_generator: IdGenerator,
    live_ids: HashSet<MessageId>,
    primary_queue: VecDeque<MessageContext<P>>,
    awaiting_ack: VecDeque<PendingSend<P>>,
    in_flight: InFlightTable<P>,
    confirmation_queue: VecDeque<MessageId>,
    pending_probes: VecDeque<PendingProbe>,
    gate: Gate,
    events: DeliveryEvents<P>,
}

impl<P> DispatchManager<P> {
    /// Creates a new DispatchManager
    ///
    /// # Panics
    /// Panics if `config` fails validation. For a non-panicking version, use `try_new`.
    pub fn new(config: DispatchConfig, transport: Box<dyn Transport<P>>) -> Self {
        Self::try_new(config, transport)
            .expect("DispatchConfig is invalid! Check max_in_flight_duration and queue_capacity.")
    }

    pub fn try_new(
        config: DispatchConfig,
        transport: Box<dyn Transport<P>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            config,
            transport,
            progress: Box::new(NoProgress),
            id_generator: IdGenerator::new(),
            live_ids: HashSet::new(),
            primary_queue: VecDeque::new(),
            awaiting_ack: VecDeque::new(),
            in_flight: InFlightTable::new(),
            confirmation_queue: VecDeque::new(),
            pending_probes: VecDeque::new(),
            gate: Gate::new(),
            events: DeliveryEvents::new(),
        })
    }

    /// Installs the hooks shown/hidden around blocking exchanges
    pub fn with_progress(mut self, progress: Box<dyn ProgressIndicator>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_id_generator(mut self, id_generator: IdGenerator) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    // Submission

    /// Queues a message for delivery. No network activity happens until the
    /// next tick; the outcome is delivered to `on_complete`, or to
    /// `DeliveryEvents` when no handler is given.
    pub fn submit(
        &mut self,
        payload: P,
        sync_mode: SyncMode,
        destination: Option<Destination>,
        on_complete: Option<CompletionHandler<P>>,
    ) -> Result<MessageId, SubmitError> {
        let issued_at = Timestamp::try_now_millis()?;
        self.make_room()?;

        let live_ids = &self.live_ids;
        let id = self
            .id_generator
            .generate_unique(issued_at, |id| live_ids.contains(id));
        self.live_ids.insert(id);

        let envelope = Envelope::new(id, payload, issued_at);
        self.primary_queue.push_back(MessageContext::new(
            envelope,
            sync_mode,
            destination,
            on_complete,
        ));
        trace!("Message {} queued ({:?})", id, sync_mode);

        Ok(id)
    }

    /// Queues a message described by a Submission builder
    pub fn send(&mut self, submission: Submission<P>) -> Result<MessageId, SubmitError> {
        let Submission {
            payload,
            sync_mode,
            destination,
            on_complete,
        } = submission;
        self.submit(payload, sync_mode, destination, on_complete)
    }

    fn make_room(&mut self) -> Result<(), SubmitError> {
        let Some(capacity) = self.config.queue_capacity else {
            return Ok(());
        };
        if self.primary_queue.len() < capacity {
            return Ok(());
        }
        match self.config.overflow_policy {
            OverflowPolicy::Reject => Err(SubmitError::QueueFull { capacity }),
            OverflowPolicy::DropOldest => {
                while self.primary_queue.len() >= capacity {
                    let Some(dropped) = self.primary_queue.pop_front() else {
                        break;
                    };
                    self.live_ids.remove(&dropped.id());
                    warn!(
                        "Primary queue full ({} messages), dropped oldest unsent message {}",
                        capacity,
                        dropped.id()
                    );
                }
                Ok(())
            }
        }
    }

    // Dispatch loop

    /// Runs one dispatch cycle using the current time
    pub fn tick(&mut self) {
        self.tick_at(&Instant::now());
    }

    /// Runs one dispatch cycle at `now`. Never blocks.
    pub fn tick_at(&mut self, now: &Instant) {
        self.receive_acknowledgements(now);
        self.receive_confirmations();
        self.send_confirmation();
        self.expire_in_flight(now);

        if self.gate.is_held() {
            return;
        }
        self.send_primary(now);
    }

    fn receive_acknowledgements(&mut self, now: &Instant) {
        let mut index = 0;
        while index < self.awaiting_ack.len() {
            let outcome = match self.awaiting_ack[index].receiver.receive() {
                ResponseReceiverResult::Waiting => {
                    index += 1;
                    continue;
                }
                ResponseReceiverResult::Success(response) => Ok(response),
                ResponseReceiverResult::Failed(error) => Err(error),
            };
            if let Some(pending) = self.awaiting_ack.remove(index) {
                self.on_acknowledgement(pending.context, outcome, now);
            }
        }
    }

    fn on_acknowledgement(
        &mut self,
        context: MessageContext<P>,
        outcome: Result<Response, TransportError>,
        now: &Instant,
    ) {
        let id = context.id();
        let sent_at = context.sent_at().unwrap_or(*now);

        let rejection = match &outcome {
            Ok(response) => self.ack_rejection(&id, response),
            Err(error) => Some(error.to_string()),
        };

        let Some(reason) = rejection else {
            debug!("Message {} acknowledged, queued for confirmation", id);
            self.in_flight.insert(sent_at, context);
            self.confirmation_queue.push_back(id);
            return;
        };

        match self.config.ack_failure_policy {
            AckFailurePolicy::Drop => {
                self.live_ids.remove(&id);
                if self.gate.holder() == Some(id) {
                    warn!(
                        "Blocking message {} was not acknowledged ({}), dropping it. The dispatch gate stays held until reset",
                        id, reason
                    );
                } else {
                    warn!(
                        "Message {} was not acknowledged ({}), dropping it",
                        id, reason
                    );
                }
            }
            AckFailurePolicy::Expire => {
                debug!(
                    "Message {} was not acknowledged ({}), tracking it until it expires",
                    id, reason
                );
                self.in_flight.insert(sent_at, context);
            }
        }
    }

    /// Returns why `response` does not acknowledge message `id`, or None if it does
    fn ack_rejection(&self, id: &MessageId, response: &Response) -> Option<String> {
        if !response.is_status_success() {
            return Some(format!("status {}", response.status_code));
        }
        if let Some(response_id) = response.body.id {
            if response_id != *id {
                return Some(format!("response is for message {}", response_id));
            }
        }
        match response.body.code {
            Some(code) if code == self.config.success_code => None,
            Some(code) => Some(format!("application code {}", code)),
            None => Some("missing application code".to_string()),
        }
    }

    fn receive_confirmations(&mut self) {
        let mut index = 0;
        while index < self.pending_probes.len() {
            let outcome = match self.pending_probes[index].receiver.receive() {
                ResponseReceiverResult::Waiting => {
                    index += 1;
                    continue;
                }
                ResponseReceiverResult::Success(response) => Ok(response),
                ResponseReceiverResult::Failed(error) => Err(error),
            };
            if let Some(probe) = self.pending_probes.remove(index) {
                self.on_confirmation(probe.id, outcome);
            }
        }
    }

    fn on_confirmation(&mut self, id: MessageId, outcome: Result<Response, TransportError>) {
        let response = match outcome {
            Ok(response) if response.is_status_success() && response.body.id == Some(id) => {
                response
            }
            Ok(response) => {
                debug!(
                    "Confirmation for message {} did not match (status {}, id {:?})",
                    id, response.status_code, response.body.id
                );
                self.on_unconfirmed(id);
                return;
            }
            Err(error) => {
                debug!("Confirmation for message {} failed: {}", id, error);
                self.on_unconfirmed(id);
                return;
            }
        };

        // the sweep may have expired it while the probe was outstanding
        let Some(context) = self.in_flight.remove(&id) else {
            debug!("Confirmation for message {} arrived after it expired", id);
            return;
        };
        debug!("Message {} confirmed", id);
        self.live_ids.remove(&id);

        let (_, on_complete) = context.into_parts();
        self.deliver(
            on_complete,
            Completion::Confirmed {
                id,
                response: response.body,
            },
        );
        if self.gate.release(&id) {
            self.progress.hide();
        }
    }

    fn on_unconfirmed(&mut self, id: MessageId) {
        if self.config.requeue_unconfirmed && self.in_flight.contains(&id) {
            self.confirmation_queue.push_back(id);
        }
    }

    fn send_confirmation(&mut self) {
        let Some(id) = self.confirmation_queue.pop_front() else {
            return;
        };

        let tracked = self.in_flight.get(&id);
        let still_tracked_locally = tracked.is_some();
        let destination = self
            .config
            .confirmation_destination
            .as_ref()
            .or_else(|| tracked.and_then(|context| context.destination()))
            .unwrap_or(&self.config.default_destination)
            .clone();

        let probe = ConfirmationProbe::new(id, still_tracked_locally);
        let receiver = self.transport.confirm(&destination, &probe);

        if still_tracked_locally {
            trace!("Confirmation probe sent for message {}", id);
            self.pending_probes.push_back(PendingProbe { id, receiver });
        } else {
            // nothing left to resolve, the response is not awaited
            trace!(
                "Confirmation probe sent for message {} which is no longer tracked",
                id
            );
        }
    }

    fn expire_in_flight(&mut self, now: &Instant) {
        let max_duration = self.config.max_in_flight_duration;
        let mut expired = self.in_flight.take_expired(now, max_duration);

        if self.config.ack_failure_policy == AckFailurePolicy::Expire {
            let mut index = 0;
            while index < self.awaiting_ack.len() {
                let is_expired = self.awaiting_ack[index]
                    .context
                    .sent_at()
                    .is_some_and(|sent_at| sent_at.elapsed(now) > max_duration);
                if !is_expired {
                    index += 1;
                    continue;
                }
                if let Some(mut pending) = self.awaiting_ack.remove(index) {
                    pending.receiver.abort();
                    let sent_at = pending.context.sent_at().unwrap_or(*now);
                    expired.push((sent_at, pending.context));
                }
            }
            expired.sort_by_key(|(sent_at, _)| *sent_at);
        }

        for (_, context) in expired {
            self.time_out(context);
        }
    }

    fn time_out(&mut self, context: MessageContext<P>) {
        let id = context.id();
        debug!("Message {} timed out", id);

        self.pending_probes.retain_mut(|probe| {
            if probe.id != id {
                return true;
            }
            probe.receiver.abort();
            false
        });
        if self.gate.release(&id) {
            self.progress.hide();
        }
        self.live_ids.remove(&id);

        let (envelope, on_complete) = context.into_parts();
        self.deliver(
            on_complete,
            Completion::TimedOut {
                id,
                payload: envelope.into_payload(),
            },
        );
    }

    fn send_primary(&mut self, now: &Instant) {
        let Some(mut context) = self.primary_queue.pop_front() else {
            return;
        };
        let id = context.id();
        context.mark_sent(*now);

        if context.sync_mode().is_blocking() && self.gate.try_acquire(id) {
            self.progress.show();
        }

        let destination = context
            .destination()
            .unwrap_or(&self.config.default_destination);
        let receiver = self.transport.send(destination, context.envelope());
        debug!("Message {} sent to {}", id, destination);

        self.awaiting_ack.push_back(PendingSend { context, receiver });
    }

    fn deliver(&mut self, on_complete: Option<CompletionHandler<P>>, completion: Completion<P>) {
        match on_complete {
            Some(handler) => handler(completion),
            None => self.events.push(completion),
        }
    }

    // Events

    /// Takes the terminal events of messages submitted without a completion handler
    pub fn take_events(&mut self) -> DeliveryEvents<P> {
        std::mem::take(&mut self.events)
    }

    // Administration

    /// Drops every queued and outstanding message without delivering any
    /// completion, aborting outstanding transport requests
    pub fn reset(&mut self) {
        let dropped = self.primary_queue.len() + self.awaiting_ack.len() + self.in_flight.len();

        for mut pending in self.awaiting_ack.drain(..) {
            pending.receiver.abort();
        }
        for mut probe in self.pending_probes.drain(..) {
            probe.receiver.abort();
        }
        self.primary_queue.clear();
        self.in_flight.clear();
        self.confirmation_queue.clear();
        self.live_ids.clear();
        self.events.clear();

        if self.gate.clear().is_some() {
            self.progress.hide();
        }

        info!("DispatchManager reset, dropped {} messages", dropped);
    }

    // Introspection

    /// Messages submitted but not yet sent
    pub fn queued_count(&self) -> usize {
        self.primary_queue.len()
    }

    /// Messages sent whose acknowledgement has not arrived
    pub fn awaiting_ack_count(&self) -> usize {
        self.awaiting_ack.len()
    }

    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }

    /// Acknowledged messages waiting for their confirmation probe to be sent
    pub fn confirmation_backlog(&self) -> usize {
        self.confirmation_queue.len()
    }

    pub fn is_gate_held(&self) -> bool {
        self.gate.is_held()
    }

    /// Whether message `id` is in the in-flight table
    pub fn is_tracked(&self, id: &MessageId) -> bool {
        self.in_flight.contains(id)
    }

    /// No message is queued, outstanding, or in flight
    pub fn is_idle(&self) -> bool {
        self.primary_queue.is_empty()
            && self.awaiting_ack.is_empty()
            && self.in_flight.is_empty()
            && self.confirmation_queue.is_empty()
            && self.pending_probes.is_empty()
    }
}
