//! The scribe handle: level gate, bounded queue, and the emit API

use super::{
    clock::{Clock, SystemClock},
    config::{validate_directory, ScribeConfig, DEFAULT_QUEUE_CAPACITY},
    dispatcher::{exit_process, Dispatcher, Envelope, FatalHook, SelfReporter},
    error::{Result, ScribeError},
    level_gate::LevelGate,
    log_level::LogLevel,
    message::{Content, Message},
    message_type::MessageType,
    metrics::ScribeMetrics,
    timestamp::TimestampFormat,
};
use crate::sinks::{ConsoleSink, RotationHook, SinkManager};
use crossbeam_channel::{bounded, Sender, TrySendError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default shutdown timeout used when a scribe is dropped (5 seconds)
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Producer side of the pipeline.
///
/// Every method takes `&self`, so a scribe can be shared between threads
/// behind an `Arc` or a `static`. Messages below the level gate are dropped
/// on the spot; accepted messages wait for a free queue slot and are written
/// by the dispatcher thread in the order they were queued.
///
/// # Example
///
/// ```
/// use scribe::prelude::*;
///
/// let scribe = Scribe::builder()
///     .level(LogLevel::Normal)
///     .console(ConsoleSink::with_writer(std::io::sink()))
///     .build()
///     .unwrap();
///
/// scribe.info(LogLevel::Normal, "hello");
/// scribe.progress(LogLevel::Debug, "not shown at the normal level");
/// scribe.flush().unwrap();
/// ```
pub struct Scribe {
    gate: Arc<LevelGate>,
    sender: Option<Sender<Envelope>>,
    dispatcher: Option<thread::JoinHandle<()>>,
    metrics: Arc<ScribeMetrics>,
    capacity: usize,
}

impl Scribe {
    /// A scribe with default settings, writing to stdout
    pub fn new() -> Result<Self> {
        ScribeBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> ScribeBuilder {
        ScribeBuilder::new()
    }

    /// Replace the level gate. Messages already queued are not affected.
    pub fn set_level(&self, level: LogLevel) {
        self.gate.set_level(level);
    }

    pub fn level(&self) -> LogLevel {
        self.gate.level()
    }

    /// Write daily log files in `directory` from now on
    ///
    /// The change is queued, so messages emitted before this call still go
    /// to the previous sink.
    pub fn set_directory(&self, directory: impl AsRef<Path>) -> Result<()> {
        let directory = directory.as_ref();
        validate_directory(directory)?;
        self.send_control(Envelope::SetDirectory(directory.to_path_buf()))
    }

    /// Stop writing files and go back to the console
    pub fn unset_directory(&self) -> Result<()> {
        self.send_control(Envelope::UnsetDirectory)
    }

    /// Queue one message if `level` passes the gate.
    ///
    /// Blocks while the queue is full. Gated-out messages are dropped
    /// silently; that is the filter working, not an error.
    pub fn print(&self, kind: MessageType, level: LogLevel, content: impl Into<Content>) {
        if !self.gate.should_enqueue(level) {
            self.metrics.record_gated_out();
            return;
        }
        self.enqueue(Message::new(kind, level, content));
    }

    fn enqueue(&self, message: Message) {
        let Some(ref sender) = self.sender else {
            return;
        };

        match sender.try_send(Envelope::Log(message)) {
            Ok(()) => self.metrics.record_enqueued(),
            Err(TrySendError::Full(envelope)) => {
                self.metrics.record_producer_block();
                if sender.send(envelope).is_ok() {
                    self.metrics.record_enqueued();
                }
            }
            Err(TrySendError::Disconnected(_)) => {
                // Dispatcher is gone, nothing left to write to
            }
        }
    }

    fn send_control(&self, envelope: Envelope) -> Result<()> {
        let sender = self.sender.as_ref().ok_or(ScribeError::Stopped)?;
        sender.send(envelope).map_err(|_| ScribeError::Stopped)
    }

    /// Log a step of an overall task
    #[inline]
    pub fn progress(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Progress, level, content);
    }

    /// Log the successful completion of a task
    #[inline]
    pub fn done(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Done, level, content);
    }

    /// Log an observation that could help whoever reads the log
    #[inline]
    pub fn info(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Info, level, content);
    }

    /// Log a problem that did not cause an error, such as suspicious
    /// behavior or an insecure setting
    #[inline]
    pub fn warning(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Warning, level, content);
    }

    /// Log an operation that ran into a problem
    #[inline]
    pub fn error(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Error, level, content);
    }

    /// Log an irrecoverable failure.
    ///
    /// Once the line is written and flushed the dispatcher runs the fatal
    /// hook, which by default terminates the process with
    /// [`FATAL_EXIT_CODE`](crate::FATAL_EXIT_CODE).
    #[inline]
    pub fn fatal(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Fatal, level, content);
    }

    #[inline]
    pub fn request(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Request, level, content);
    }

    #[inline]
    pub fn resolve(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Resolve, level, content);
    }

    #[inline]
    pub fn connect(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Connect, level, content);
    }

    #[inline]
    pub fn mount(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Mount, level, content);
    }

    #[inline]
    pub fn disconnect(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Disconnect, level, content);
    }

    #[inline]
    pub fn unmount(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Unmount, level, content);
    }

    #[inline]
    pub fn bind(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Bind, level, content);
    }

    #[inline]
    pub fn unbind(&self, level: LogLevel, content: impl Into<Content>) {
        self.print(MessageType::Unbind, level, content);
    }

    /// Block until everything queued before this call has been written and
    /// flushed.
    ///
    /// Error reports the dispatcher raises while doing so are queued behind
    /// this barrier; a second `flush` waits for them too.
    pub fn flush(&self) -> Result<()> {
        let (ack, done) = bounded(1);
        self.send_control(Envelope::Flush(ack))?;
        done.recv().map_err(|_| ScribeError::ChannelReceiveError)
    }

    pub fn metrics(&self) -> &ScribeMetrics {
        &self.metrics
    }

    /// Number of messages the queue holds before producers block
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Messages currently waiting in the queue
    pub fn queued(&self) -> usize {
        self.sender.as_ref().map_or(0, Sender::len)
    }

    /// Stop the dispatcher after it has written everything already queued.
    ///
    /// Returns `true` if the dispatcher finished within `timeout`. Emit
    /// calls made after shutdown are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use scribe::prelude::*;
    /// use std::time::Duration;
    ///
    /// let mut scribe = Scribe::builder()
    ///     .console(ConsoleSink::with_writer(std::io::sink()))
    ///     .build()
    ///     .unwrap();
    /// scribe.done(LogLevel::Normal, "all work finished");
    ///
    /// assert!(scribe.shutdown(Duration::from_secs(5)));
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> bool {
        if let Some(sender) = self.sender.take() {
            if sender.send_timeout(Envelope::Shutdown, timeout).is_err() {
                eprintln!("[SCRIBE WARNING] Could not queue shutdown request within {:?}", timeout);
            }
        }

        if let Some(handle) = self.dispatcher.take() {
            let start = Instant::now();

            loop {
                if handle.is_finished() {
                    if let Err(e) = handle.join() {
                        eprintln!("[SCRIBE ERROR] Dispatcher thread panicked: {:?}", e);
                        return false;
                    }
                    break;
                }

                if start.elapsed() >= timeout {
                    eprintln!(
                        "[SCRIBE WARNING] Dispatcher did not finish within {:?}. \
                         Some messages may be lost.",
                        timeout
                    );
                    return false;
                }

                thread::sleep(Duration::from_millis(10));
            }
        }

        true
    }
}

impl Drop for Scribe {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);
    }
}

/// Builder for constructing a [`Scribe`]
///
/// # Example
///
/// ```
/// use scribe::prelude::*;
/// use std::sync::Arc;
///
/// let scribe = Scribe::builder()
///     .level(LogLevel::Debug)
///     .queue_capacity(64)
///     .timestamp_format(TimestampFormat::Iso8601)
///     .console(ConsoleSink::with_writer(std::io::sink()))
///     .on_rotate(Arc::new(|path: &std::path::Path| println!("closed {}", path.display())))
///     .build()
///     .unwrap();
/// ```
pub struct ScribeBuilder {
    level: LogLevel,
    queue_capacity: usize,
    directory: Option<PathBuf>,
    clock: Arc<dyn Clock>,
    console: Option<ConsoleSink>,
    colors: Option<bool>,
    timestamp_format: TimestampFormat,
    on_fatal: Option<FatalHook>,
    on_rotate: Option<RotationHook>,
}

impl ScribeBuilder {
    pub fn new() -> Self {
        Self {
            level: LogLevel::Normal,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            directory: None,
            clock: Arc::new(SystemClock),
            console: None,
            colors: None,
            timestamp_format: TimestampFormat::default(),
            on_fatal: None,
            on_rotate: None,
        }
    }

    /// Apply a loaded configuration on top of the current settings
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: ScribeConfig) -> Self {
        self.level = config.level;
        self.queue_capacity = config.queue_capacity;
        self.directory = config.directory;
        self.timestamp_format = config.timestamp_format;
        self.colors = Some(config.colors);
        self
    }

    /// Initial level gate
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Queue size; producers block when it is full
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Start out writing daily files in `directory`
    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Where console output goes (stdout unless set)
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, console: ConsoleSink) -> Self {
        self.console = Some(console);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Replace what happens after a `Fatal` message is written.
    ///
    /// The default terminates the process. A hook that returns lets the
    /// dispatcher carry on with the next message.
    #[must_use = "builder methods return a new value"]
    pub fn on_fatal(mut self, hook: FatalHook) -> Self {
        self.on_fatal = Some(hook);
        self
    }

    /// Called with the path of each daily file once it has been closed
    #[must_use = "builder methods return a new value"]
    pub fn on_rotate(mut self, hook: RotationHook) -> Self {
        self.on_rotate = Some(hook);
        self
    }

    /// Validate the settings and start the dispatcher thread
    pub fn build(self) -> Result<Scribe> {
        if self.queue_capacity == 0 {
            return Err(ScribeError::config(
                "ScribeBuilder",
                "the queue must hold at least one message",
            ));
        }

        let (sender, receiver) = bounded(self.queue_capacity);
        let gate = Arc::new(LevelGate::new(self.level));
        let metrics = Arc::new(ScribeMetrics::new());

        let mut console = self.console.unwrap_or_default();
        if let Some(colors) = self.colors {
            console = console.with_colors(colors);
        }

        let mut sinks = SinkManager::new(console, Arc::clone(&metrics));
        if let Some(hook) = self.on_rotate {
            sinks = sinks.with_rotation_hook(hook);
        }
        if let Some(ref directory) = self.directory {
            validate_directory(directory)?;
            sinks.set_directory(directory);
        }

        let reporter = SelfReporter::new(Arc::clone(&gate), sender.clone(), Arc::clone(&metrics));
        let handle = Dispatcher::new(
            receiver,
            reporter,
            sinks,
            self.clock,
            self.timestamp_format,
            Arc::clone(&metrics),
            self.on_fatal.unwrap_or_else(exit_process),
        )
        .spawn()?;

        Ok(Scribe {
            gate,
            sender: Some(sender),
            dispatcher: Some(handle),
            metrics,
            capacity: self.queue_capacity,
        })
    }
}

impl Default for ScribeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
