//! Board Synchronisation
//!
//! Drives the coordinator against the task API: applies drops optimistically,
//! sends one write per request with a timeout, commits or rolls back, and
//! refetches the authoritative list after a failure. Concurrent refetches
//! share a single in-flight request.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{self, Either, FutureExt, LocalBoxFuture, Shared};

use crate::columns::{partition, BoardStats, Column};
use crate::config::BoardConfig;
use crate::coordinator::{Coordinator, MoveState, MoveTicket};
use crate::error::{SyncError, SyncResult};
use crate::gesture::{interpret, DragEnd, MovePlan, Origin, TransitionRequest};
use crate::model::Task;
use crate::remote::{Notice, Notifier, TaskApi, Timer};

type Observer = Rc<dyn Fn(&[Task])>;

/// Handle to an in-flight refetch; every clone resolves with the same result
pub type Refetch = Shared<LocalBoxFuture<'static, SyncResult<()>>>;

struct Inner<A, N, T> {
    api: A,
    notifier: N,
    timer: T,
    config: BoardConfig,
    coordinator: RefCell<Coordinator>,
    refetch: RefCell<Option<Refetch>>,
    observers: RefCell<Vec<Observer>>,
}

/// Board state owner for one session
///
/// Cheap to clone; all clones share the same board.
pub struct BoardSync<A, N, T> {
    inner: Rc<Inner<A, N, T>>,
}

impl<A, N, T> Clone for BoardSync<A, N, T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<A, N, T> BoardSync<A, N, T>
where
    A: TaskApi + 'static,
    N: Notifier + 'static,
    T: Timer + 'static,
{
    pub fn new(api: A, notifier: N, timer: T, config: BoardConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                api,
                notifier,
                timer,
                config,
                coordinator: RefCell::new(Coordinator::default()),
                refetch: RefCell::new(None),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.inner.config
    }

    // ========================
    // Snapshots
    // ========================

    /// Current board view, optimistic overlays included
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.coordinator.borrow().view()
    }

    pub fn columns(&self) -> Vec<Column> {
        partition(&self.tasks(), &self.inner.config.columns)
    }

    pub fn stats(&self) -> BoardStats {
        BoardStats::from_tasks(&self.tasks())
    }

    pub fn phase(&self) -> MoveState {
        self.inner.coordinator.borrow().phase()
    }

    /// Register a callback that receives the board after every change
    pub fn subscribe(&self, observer: impl Fn(&[Task]) + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Observers run outside the borrow, so they may subscribe or read the board
    fn publish(&self) {
        let view = self.tasks();
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer(&view);
        }
    }

    // ========================
    // Loading
    // ========================

    /// Initial load of the board
    ///
    /// A failure is also reported through the notifier.
    pub async fn load(&self) -> SyncResult<()> {
        let result = self.resync().await;
        if let Err(err) = &result {
            self.inner.notifier.notify(Notice::error(format!("Failed to load tasks: {}", err)));
        }
        result
    }

    /// Refetch the authoritative task list
    ///
    /// Joins the request already in flight if there is one.
    pub fn resync(&self) -> Refetch {
        if let Some(inflight) = self.inner.refetch.borrow().as_ref() {
            return inflight.clone();
        }

        let this = self.clone();
        let refetch = async move {
            let sent_at = this.inner.coordinator.borrow().revision();
            let result = this.inner.api.list_tasks().await;
            this.inner.refetch.borrow_mut().take();
            match result {
                Ok(tasks) => {
                    log::info!("[SYNC] loaded {} tasks", tasks.len());
                    this.inner.coordinator.borrow_mut().replace_confirmed(tasks, sent_at);
                    this.publish();
                    Ok(())
                }
                Err(err) => {
                    log::warn!("[SYNC] refetch failed: {}", err);
                    Err(err)
                }
            }
        }
        .boxed_local()
        .shared();

        *self.inner.refetch.borrow_mut() = Some(refetch.clone());
        refetch
    }

    // ========================
    // Moves
    // ========================

    /// Handle a drag-end event
    ///
    /// The board is updated before this returns. The returned future performs
    /// the remote writes and never fails; spawn it and forget it. `None` means
    /// the gesture changes nothing and no request is made.
    pub fn on_drag_end(&self, event: &DragEnd) -> Option<LocalBoxFuture<'static, ()>> {
        let plan = interpret(event, &self.tasks(), &self.inner.config)?;
        Some(self.submit(plan))
    }

    /// Apply a plan optimistically and return the future that persists it
    pub fn submit(&self, plan: MovePlan) -> LocalBoxFuture<'static, ()> {
        let requests: Vec<(MoveTicket, TransitionRequest)> = {
            let mut coordinator = self.inner.coordinator.borrow_mut();
            plan.into_requests()
                .into_iter()
                .map(|request| (coordinator.apply(request.clone()), request))
                .collect()
        };
        self.publish();

        let this = self.clone();
        async move {
            let writes = requests
                .into_iter()
                .map(|(ticket, request)| this.write(ticket, request));
            future::join_all(writes).await;
        }
        .boxed_local()
    }

    async fn write(&self, ticket: MoveTicket, request: TransitionRequest) {
        let timeout = self.inner.config.write_timeout();
        let patch = request.patch();
        let update = self.inner.api.update_task(&request.task_id, &patch);
        let result = match future::select(update, self.inner.timer.sleep(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(SyncError::Timeout(timeout)),
        };
        let visible = request.origin == Origin::Gesture;

        match result {
            Ok(remote) => {
                self.inner.coordinator.borrow_mut().commit(&ticket, remote);
                log::info!("[SYNC] #{} committed {}", ticket.seq(), request.task_id);
                self.publish();
                if visible {
                    let label = self.inner.config.label_for(&request.new_status);
                    self.inner.notifier.notify(Notice::success(format!("Task moved to {}", label)));
                }
            }
            Err(err) => {
                log::warn!("[SYNC] #{} failed for {}: {}", ticket.seq(), request.task_id, err);
                self.inner.coordinator.borrow_mut().rollback(&ticket);
                self.publish();
                if visible {
                    self.inner.notifier.notify(Notice::error(err.user_message()));
                }
                if let Err(err) = self.resync().await {
                    log::warn!("[SYNC] re-sync after failed move did not complete: {}", err);
                }
            }
        }
    }
}
