//! Background generation worker.
//!
//! Runs searches on a dedicated thread so an interactive caller is never
//! blocked. The caller owns a [`GeneratorWorker`] handle; requests go in
//! over a channel as immutable snapshots, and each reply comes back as a
//! single message tagged with the [`RequestId`] it answers.
//!
//! # Supersession
//! Only the most recent request matters. Replies to older requests are
//! dropped by the handle, and requests still queued when a newer one
//! arrives are skipped by the worker. A search already running cannot be
//! interrupted; [`GeneratorWorker::restart`] abandons it and starts a fresh
//! thread, and whatever the old thread produces is discarded.
//!
//! # Lifecycle
//! Dropping the handle closes the request channel. A thread that has
//! already exited is joined; a busy one is detached like on
//! [`GeneratorWorker::restart`], so dropping never waits for a search.

use log::{debug, warn};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::models::Schedule;
use crate::search::{GenerateRequest, SearchEngine};

/// Correlates a reply with the request it answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Result of one request.
#[derive(Debug)]
pub struct Reply {
    /// Request being answered.
    pub id: RequestId,
    /// Schedules, best first, or the failure.
    pub result: Result<Vec<Schedule>>,
}

struct Job {
    id: RequestId,
    request: GenerateRequest,
}

/// Handle to a background generation thread.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, CourseType, SlotOption, Weekday};
/// use u_timetable::search::{GenerateRequest, SearchOptions};
/// use u_timetable::worker::GeneratorWorker;
///
/// let courses = vec![Course::new("COSC1", CourseType::Lecture)
///     .with_option(SlotOption::new(Weekday::Monday, "09:00".parse().unwrap(), 60))];
///
/// let mut worker = GeneratorWorker::spawn().unwrap();
/// let id = worker.submit(GenerateRequest::new(courses, SearchOptions::new())).unwrap();
/// let reply = worker.recv().unwrap();
/// assert_eq!(reply.id, id);
/// assert_eq!(reply.result.unwrap().len(), 1);
/// ```
pub struct GeneratorWorker {
    jobs: Option<Sender<Job>>,
    replies: Receiver<Reply>,
    handle: Option<JoinHandle<()>>,
    next_id: u64,
    pending: Option<RequestId>,
}

impl GeneratorWorker {
    /// Starts a worker thread.
    pub fn spawn() -> Result<Self> {
        let (jobs, replies, handle) = start_thread()?;
        Ok(Self {
            jobs: Some(jobs),
            replies,
            handle: Some(handle),
            next_id: 0,
            pending: None,
        })
    }

    /// Queues a request, superseding any earlier one.
    pub fn submit(&mut self, request: GenerateRequest) -> Result<RequestId> {
        self.next_id += 1;
        let id = RequestId(self.next_id);
        let jobs = self.jobs.as_ref().ok_or(Error::WorkerUnavailable)?;
        jobs.send(Job { id, request })
            .map_err(|_| Error::WorkerUnavailable)?;
        if let Some(old) = self.pending.replace(id) {
            debug!("request {} superseded by {}", old.value(), id.value());
        }
        Ok(id)
    }

    /// The request whose reply is still awaited.
    pub fn pending(&self) -> Option<RequestId> {
        self.pending
    }

    /// Blocks until the reply to the latest request arrives.
    ///
    /// # Errors
    /// [`Error::NoPendingRequest`] if nothing is awaited;
    /// [`Error::WorkerUnavailable`] if the thread is gone.
    pub fn recv(&mut self) -> Result<Reply> {
        loop {
            let awaited = self.pending.ok_or(Error::NoPendingRequest)?;
            let reply = self.replies.recv().map_err(|_| Error::WorkerUnavailable)?;
            if let Some(reply) = self.accept(reply, awaited) {
                return Ok(reply);
            }
        }
    }

    /// Waits up to `timeout` for the reply to the latest request.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<Reply>> {
        let awaited = self.pending.ok_or(Error::NoPendingRequest)?;
        loop {
            match self.replies.recv_timeout(timeout) {
                Ok(reply) => {
                    if let Some(reply) = self.accept(reply, awaited) {
                        return Ok(Some(reply));
                    }
                }
                Err(RecvTimeoutError::Timeout) => return Ok(None),
                Err(RecvTimeoutError::Disconnected) => return Err(Error::WorkerUnavailable),
            }
        }
    }

    /// Returns the latest reply if it has already arrived.
    pub fn try_recv(&mut self) -> Result<Option<Reply>> {
        let awaited = self.pending.ok_or(Error::NoPendingRequest)?;
        loop {
            match self.replies.try_recv() {
                Ok(reply) => {
                    if let Some(reply) = self.accept(reply, awaited) {
                        return Ok(Some(reply));
                    }
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => return Err(Error::WorkerUnavailable),
            }
        }
    }

    fn accept(&mut self, reply: Reply, awaited: RequestId) -> Option<Reply> {
        if reply.id == awaited {
            self.pending = None;
            Some(reply)
        } else {
            debug!("discarding stale reply to request {}", reply.id.value());
            None
        }
    }

    /// Abandons the running search and starts a fresh thread.
    ///
    /// The abandoned thread finishes its current search on its own and
    /// exits; its output is never delivered.
    pub fn restart(&mut self) -> Result<()> {
        let (jobs, replies, handle) = start_thread()?;
        self.jobs = Some(jobs);
        self.replies = replies;
        if let Some(old) = self.handle.replace(handle) {
            debug!("detached generator thread {:?}", old.thread().id());
        }
        self.pending = None;
        Ok(())
    }
}

impl Drop for GeneratorWorker {
    fn drop(&mut self) {
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("detached busy generator thread {:?}", handle.thread().id());
                return;
            }
            if handle.join().is_err() {
                warn!("generator thread terminated abnormally");
            }
        }
    }
}

fn start_thread() -> Result<(Sender<Job>, Receiver<Reply>, JoinHandle<()>)> {
    let (job_tx, job_rx) = channel();
    let (reply_tx, reply_rx) = channel();
    let handle = thread::Builder::new()
        .name("timetable-generator".into())
        .spawn(move || worker_loop(job_rx, reply_tx))?;
    Ok((job_tx, reply_rx, handle))
}

fn worker_loop(jobs: Receiver<Job>, replies: Sender<Reply>) {
    let engine = SearchEngine::new();
    while let Ok(mut job) = jobs.recv() {
        while let Ok(newer) = jobs.try_recv() {
            debug!("skipping superseded request {}", job.id.value());
            job = newer;
        }

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            engine.generate(&job.request.courses, &job.request.options)
        }));
        let result = outcome.unwrap_or_else(|panic| Err(Error::WorkerPanicked(panic_message(panic))));

        if replies.send(Reply { id: job.id, result }).is_err() {
            debug!("reply receiver dropped, generator thread exiting");
            break;
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Handles one JSON-encoded [`GenerateRequest`] synchronously.
///
/// Returns the JSON-encoded schedule list.
pub fn handle_message(payload: &str) -> Result<String> {
    let request: GenerateRequest = serde_json::from_str(payload)?;
    let schedules = SearchEngine::new().generate(&request.courses, &request.options)?;
    Ok(serde_json::to_string(&schedules)?)
}
