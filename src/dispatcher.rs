//! The single-flight request/response core.
//!
//! One gate serializes callers; one pending-reply slot, written only by the
//! background processor task, is read back by whichever caller is holding
//! the gate. See the crate-level docs for the state machine this implements.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;

use crate::codec;
use crate::error::AdsError;
use crate::request::Request;
use crate::response::Response;
use crate::transport::Transport;
use crate::types::CommandKind;

struct PendingState {
    current: CommandKind,
    current_comm_id: String,
    result: Option<Result<Response, AdsError>>,
}

impl Default for PendingState {
    fn default() -> Self {
        Self { current: CommandKind::Idle, current_comm_id: String::new(), result: None }
    }
}

pub struct Dispatcher {
    /// `None` once `shutdown()` has run; dropping the last `Transport` handle
    /// (alongside aborting `receiver`, which holds the other clone) lets the
    /// bound socket actually close instead of just going unused.
    transport: Mutex<Option<Transport>>,
    gate: tokio::sync::Mutex<()>,
    state: Arc<Mutex<PendingState>>,
    notify: Arc<Notify>,
    command_timeout: Duration,
    disconnected: Arc<AtomicBool>,
    receiver: JoinHandle<()>,
    processor: JoinHandle<()>,
}

impl Dispatcher {
    /// Takes ownership of a bound `Transport`, spawns its receiver loop and
    /// the dispatcher's own processing loop over the resulting datagram
    /// stream.
    pub fn spawn(transport: Transport, recv_buffer_size: usize, command_timeout: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let receiver = transport.spawn_receiver(recv_buffer_size, tx);

        let state = Arc::new(Mutex::new(PendingState::default()));
        let notify = Arc::new(Notify::new());
        let disconnected = Arc::new(AtomicBool::new(false));

        let processor = tokio::spawn(run_processor(Arc::clone(&state), Arc::clone(&notify), rx));

        Self {
            transport: Mutex::new(Some(transport)),
            gate: tokio::sync::Mutex::new(()),
            state,
            notify,
            command_timeout,
            disconnected,
            receiver,
            processor,
        }
    }

    /// Runs one command to completion: encode, send, await a matching
    /// decoded reply or the configured timeout.
    pub async fn call(&self, request: Request) -> Result<Response, AdsError> {
        if self.disconnected.load(Ordering::Acquire) {
            return Err(AdsError::LinkDisconnect);
        }

        let _gate = self.gate.lock().await;

        if self.disconnected.load(Ordering::Acquire) {
            return Err(AdsError::LinkDisconnect);
        }

        let transport = match self.transport.lock().as_ref() {
            Some(t) => t.clone(),
            None => return Err(AdsError::LinkDisconnect),
        };

        let kind = request.kind();
        let comm_id = request.comm_id().to_string();
        let wire = codec::encode(&request)?;

        {
            let mut st = self.state.lock();
            st.current = kind;
            st.current_comm_id = comm_id;
            st.result = None;
        }

        // Must construct the `Notified` future before triggering the send,
        // otherwise a reply decoded between send and await would be a missed
        // wakeup.
        let notified = self.notify.notified();
        tokio::pin!(notified);

        if let Err(e) = transport.send(wire.as_bytes()).await {
            self.reset_to_idle();
            return Err(e);
        }

        let outcome = tokio::time::timeout(self.command_timeout, &mut notified).await;
        let result = match outcome {
            Ok(()) => self.state.lock().result.take(),
            Err(_) => None,
        };
        self.reset_to_idle();

        match result {
            Some(r) => r,
            None => Err(AdsError::Timeout),
        }
    }

    fn reset_to_idle(&self) {
        let mut st = self.state.lock();
        st.current = CommandKind::Idle;
        st.current_comm_id.clear();
        st.result = None;
    }

    /// Aborts the receiver and processor tasks, drops the bound socket, and
    /// marks the dispatcher unusable. Idempotent.
    pub fn shutdown(&self) {
        if self.disconnected.swap(true, Ordering::AcqRel) {
            return;
        }
        self.receiver.abort();
        self.processor.abort();
        self.transport.lock().take();
        self.notify.notify_waiters();
    }
}

async fn run_processor(state: Arc<Mutex<PendingState>>, notify: Arc<Notify>, mut rx: mpsc::UnboundedReceiver<Vec<u8>>) {
    while let Some(datagram) = rx.recv().await {
        let comm_id = match codec::peek_comm_id(&datagram) {
            Some(id) => id,
            None => {
                log::debug!("discarding unsolicited datagram with no id");
                continue;
            }
        };

        let (kind, expected) = {
            let st = state.lock();
            (st.current, st.current_comm_id.clone())
        };

        if kind.is_idle() {
            log::debug!("discarding late reply for id={comm_id}: no command in flight");
            continue;
        }
        if comm_id != expected {
            log::debug!("discarding mismatched reply id={comm_id}, expected={expected}");
            continue;
        }

        let decoded = codec::decode(kind, comm_id, &datagram);
        {
            let mut st = state.lock();
            st.result = Some(decoded);
        }
        notify.notify_one();
    }
}
