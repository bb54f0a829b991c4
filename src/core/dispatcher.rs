//! The single consumer of the message queue
//!
//! One dedicated thread pulls envelopes off the queue in order, resolves the
//! sink for each message (rotating daily files as needed), and writes one
//! line per message. Sink problems are reported by queueing an `Error`
//! message behind whatever is already waiting, never by writing inline.

use super::{
    clock::Clock,
    error::{Result, ScribeError},
    level_gate::LevelGate,
    log_level::LogLevel,
    message::{LogLine, Message},
    message_type::MessageType,
    metrics::ScribeMetrics,
    timestamp::TimestampFormat,
};
use crate::sinks::SinkManager;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

/// Exit code used by the default fatal hook
pub const FATAL_EXIT_CODE: i32 = 1;

/// Runs after a `Fatal` message has been written and flushed
pub type FatalHook = Arc<dyn Fn(&Message) + Send + Sync>;

/// The default fatal hook: terminate the process with [`FATAL_EXIT_CODE`]
pub fn exit_process() -> FatalHook {
    Arc::new(|_| std::process::exit(FATAL_EXIT_CODE))
}

/// What travels through the queue
pub(crate) enum Envelope {
    Log(Message),
    SetDirectory(PathBuf),
    UnsetDirectory,
    /// Acknowledged once everything queued ahead of it is written and flushed
    Flush(Sender<()>),
    Shutdown,
}

/// Queues the dispatcher's own error reports.
///
/// Reports that do not fit in a full queue wait here and are retried before
/// the dispatcher next blocks on the queue, so the consumer never waits on
/// itself.
pub(crate) struct SelfReporter {
    gate: Arc<LevelGate>,
    sender: Sender<Envelope>,
    deferred: VecDeque<Envelope>,
    metrics: Arc<ScribeMetrics>,
    closed: bool,
}

impl SelfReporter {
    pub(crate) fn new(
        gate: Arc<LevelGate>,
        sender: Sender<Envelope>,
        metrics: Arc<ScribeMetrics>,
    ) -> Self {
        Self {
            gate,
            sender,
            deferred: VecDeque::new(),
            metrics,
            closed: false,
        }
    }

    fn report(&mut self, problem: &ScribeError) {
        if self.closed {
            eprintln!("[SCRIBE ERROR] {}", problem);
            return;
        }
        if !self.gate.should_enqueue(LogLevel::Error) {
            self.metrics.record_gated_out();
            return;
        }
        self.metrics.record_self_report();
        self.deferred.push_back(Envelope::Log(Message::new(
            MessageType::Error,
            LogLevel::Error,
            problem.to_string(),
        )));
        self.requeue_deferred();
    }

    fn requeue_deferred(&mut self) {
        if self.closed {
            return;
        }
        while let Some(envelope) = self.deferred.pop_front() {
            match self.sender.try_send(envelope) {
                Ok(()) => {}
                Err(TrySendError::Full(envelope)) => {
                    self.deferred.push_front(envelope);
                    break;
                }
                Err(TrySendError::Disconnected(_)) => {
                    self.deferred.clear();
                    break;
                }
            }
        }
    }

    /// Stop queueing. Pending reports can still be drained; new ones go to stderr
    fn close(&mut self) {
        self.closed = true;
    }

    fn pop_deferred(&mut self) -> Option<Envelope> {
        self.deferred.pop_front()
    }
}

pub(crate) struct Dispatcher {
    receiver: Receiver<Envelope>,
    reporter: SelfReporter,
    sinks: SinkManager,
    clock: Arc<dyn Clock>,
    timestamp_format: TimestampFormat,
    metrics: Arc<ScribeMetrics>,
    on_fatal: FatalHook,
}

impl Dispatcher {
    pub(crate) fn new(
        receiver: Receiver<Envelope>,
        reporter: SelfReporter,
        sinks: SinkManager,
        clock: Arc<dyn Clock>,
        timestamp_format: TimestampFormat,
        metrics: Arc<ScribeMetrics>,
        on_fatal: FatalHook,
    ) -> Self {
        Self {
            receiver,
            reporter,
            sinks,
            clock,
            timestamp_format,
            metrics,
            on_fatal,
        }
    }

    pub(crate) fn spawn(self) -> Result<thread::JoinHandle<()>> {
        thread::Builder::new()
            .name("scribe-dispatcher".to_string())
            .spawn(move || self.run())
            .map_err(|e| {
                ScribeError::io_operation(
                    "starting dispatcher",
                    "cannot spawn the dispatcher thread",
                    e,
                )
            })
    }

    fn run(mut self) {
        loop {
            self.reporter.requeue_deferred();

            let envelope = match self.receiver.recv() {
                Ok(envelope) => envelope,
                Err(_) => break,
            };

            if self.handle(envelope).is_break() {
                self.drain();
                break;
            }

            // Flush once the queue runs dry rather than after every line
            if self.receiver.is_empty() {
                self.flush_sinks();
            }
        }
    }

    fn handle(&mut self, envelope: Envelope) -> ControlFlow<()> {
        match envelope {
            Envelope::Log(message) => self.dispatch(message),
            Envelope::SetDirectory(directory) => self.sinks.set_directory(&directory),
            Envelope::UnsetDirectory => {
                if let Err(e) = self.sinks.unset_directory() {
                    self.reporter.report(&e);
                }
            }
            Envelope::Flush(ack) => {
                self.flush_sinks();
                let _ = ack.send(());
            }
            Envelope::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Write out whatever is still queued or deferred, then flush
    fn drain(&mut self) {
        self.reporter.close();
        loop {
            let next = match self.receiver.try_recv() {
                Ok(envelope) => Some(envelope),
                Err(_) => self.reporter.pop_deferred(),
            };
            let Some(envelope) = next else {
                break;
            };
            // A second shutdown request while draining changes nothing
            let _ = self.handle(envelope);
        }
        self.flush_sinks();
    }

    fn dispatch(&mut self, message: Message) {
        let now = self.clock.now();
        let timestamp = self.timestamp_format.format(&now);
        let line = LogLine::new(&timestamp, &message);

        let mut problems = Vec::new();
        let sink = self.sinks.ensure_current_sink(now.date(), &mut problems);

        match sink.append(&line) {
            Ok(()) => self.metrics.record_written(),
            Err(e) => {
                self.metrics.record_write_failure();
                eprintln!("[SCRIBE ERROR] {} sink failed to write: {}", sink.name(), e);
            }
        }

        let fatal = message.kind == MessageType::Fatal;
        if fatal {
            if let Err(e) = sink.flush() {
                eprintln!("[SCRIBE ERROR] {} sink failed to flush: {}", sink.name(), e);
            }
        }

        for problem in &problems {
            self.reporter.report(problem);
        }

        if fatal {
            (self.on_fatal)(&message);
        }
    }

    fn flush_sinks(&mut self) {
        if let Err(e) = self.sinks.flush() {
            eprintln!("[SCRIBE ERROR] Failed to flush sinks: {}", e);
        }
    }
}
