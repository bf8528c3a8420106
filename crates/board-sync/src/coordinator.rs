//! Optimistic Mutation Coordinator
//!
//! Single writer of the board. Keeps the last confirmed task list and the
//! optimistic overlays of in-flight requests as separate values; the visible
//! board is the confirmed list with the overlays replayed in issue order.
//! Rolling back removes an overlay, committing folds it into the confirmed list.
//!
//! Commits are stamped with a revision. A refetched list only replaces
//! entries that were not committed after the refetch was sent, so a stale
//! list cannot undo a move the server has already stored.

use std::collections::{BTreeMap, HashMap};

use crate::gesture::TransitionRequest;
use crate::model::{Task, TaskId};

/// Lifecycle of one request
///
/// `Idle -> OptimisticallyApplied -> (Committed | RolledBack) -> Idle`.
/// A resolved ticket reads back as `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveState {
    Idle,
    OptimisticallyApplied,
    Committed,
    RolledBack,
}

/// Handle for one applied request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveTicket {
    seq: u64,
    task_id: TaskId,
}

impl MoveTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn task_id(&self) -> &TaskId {
        &self.task_id
    }
}

#[derive(Debug, Default)]
pub struct Coordinator {
    confirmed: Vec<Task>,
    /// In-flight overlays keyed by sequence number
    pending: BTreeMap<u64, TransitionRequest>,
    /// Sequence number of the newest request folded into `confirmed`, per task
    confirmed_seq: HashMap<TaskId, u64>,
    /// Revision at which each task was last committed
    committed_at: HashMap<TaskId, u64>,
    revision: u64,
    next_seq: u64,
}

impl Coordinator {
    pub fn new(confirmed: Vec<Task>) -> Self {
        Self { confirmed, ..Default::default() }
    }

    /// Last state confirmed by the server
    pub fn confirmed(&self) -> &[Task] {
        &self.confirmed
    }

    /// Board as the user sees it
    pub fn view(&self) -> Vec<Task> {
        let mut tasks = self.confirmed.clone();
        for request in self.pending.values() {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == request.task_id) {
                request.apply_to(task);
            }
        }
        tasks
    }

    pub fn phase(&self) -> MoveState {
        if self.pending.is_empty() {
            MoveState::Idle
        } else {
            MoveState::OptimisticallyApplied
        }
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Counter bumped on every commit; take it before sending a refetch
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn state(&self, ticket: &MoveTicket) -> MoveState {
        if self.pending.contains_key(&ticket.seq) {
            MoveState::OptimisticallyApplied
        } else {
            MoveState::Idle
        }
    }

    /// Layer a request on top of the current view
    pub fn apply(&mut self, request: TransitionRequest) -> MoveTicket {
        self.next_seq += 1;
        let ticket = MoveTicket { seq: self.next_seq, task_id: request.task_id.clone() };
        log::debug!(
            "[BOARD] #{} apply {} -> {} @ {}",
            ticket.seq,
            request.task_id,
            request.new_status,
            request.new_order
        );
        self.pending.insert(ticket.seq, request);
        ticket
    }

    /// Fold a successful request into the confirmed list
    ///
    /// `remote` is the task the server returned, if any; otherwise the
    /// optimistic fields are kept. A resolved or unknown ticket is a no-op.
    pub fn commit(&mut self, ticket: &MoveTicket, remote: Option<Task>) -> MoveState {
        let Some(request) = self.pending.remove(&ticket.seq) else {
            return MoveState::Idle;
        };

        let newest = self.confirmed_seq.get(&request.task_id).copied().unwrap_or(0);
        if ticket.seq < newest {
            log::debug!("[BOARD] #{} committed after newer #{}, keeping newer", ticket.seq, newest);
            return MoveState::Committed;
        }
        self.confirmed_seq.insert(request.task_id.clone(), ticket.seq);
        self.revision += 1;
        self.committed_at.insert(request.task_id.clone(), self.revision);

        match remote {
            Some(task) => self.upsert(task),
            None => {
                if let Some(task) = self.confirmed.iter_mut().find(|t| t.id == request.task_id) {
                    request.apply_to(task);
                }
            }
        }
        MoveState::Committed
    }

    /// Drop a failed request's overlay
    ///
    /// The confirmed list is not touched; newer overlays for the same task
    /// stay in place.
    pub fn rollback(&mut self, ticket: &MoveTicket) -> MoveState {
        match self.pending.remove(&ticket.seq) {
            Some(request) => {
                log::warn!("[BOARD] #{} rolled back {}", ticket.seq, request.task_id);
                MoveState::RolledBack
            }
            None => MoveState::Idle,
        }
    }

    /// Install a freshly fetched list as the confirmed state
    ///
    /// `since` is the revision taken when the fetch was sent. Tasks committed
    /// after that keep their confirmed entry instead of the fetched one.
    pub fn replace_confirmed(&mut self, mut tasks: Vec<Task>, since: u64) {
        for (id, revision) in &self.committed_at {
            if *revision <= since {
                continue;
            }
            let Some(local) = self.confirmed.iter().find(|t| &t.id == id) else {
                continue;
            };
            log::debug!("[BOARD] keeping {} committed at r{} over refetch from r{}", id, revision, since);
            match tasks.iter_mut().find(|t| &t.id == id) {
                Some(fetched) => *fetched = local.clone(),
                None => tasks.push(local.clone()),
            }
        }
        self.committed_at.retain(|_, revision| *revision > since);
        self.confirmed = tasks;
    }

    fn upsert(&mut self, task: Task) {
        match self.confirmed.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => self.confirmed.push(task),
        }
    }
}
