use std::sync::*;

///
/// Where a task is in its lifecycle
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskPhase {
    /// Created but never submitted
    Idle,

    /// Submitted and waiting for a worker
    Pending,

    /// A worker is preparing the task
    Running,

    /// Preparation has finished (successfully or not)
    Done,

    /// The task's buffers have been released
    Disposed,
}

impl TaskPhase {
    ///
    /// True if a worker has yet to finish with the task
    ///
    #[inline]
    pub fn is_in_flight(&self) -> bool {
        match self {
            TaskPhase::Pending | TaskPhase::Running => true,
            _                                       => false,
        }
    }
}

///
/// The phase of a task, along with a condition variable that's signalled when the phase changes
///
pub struct TaskState {
    phase:      Mutex<TaskPhase>,
    changed:    Condvar,
}

impl TaskState {
    pub fn new() -> TaskState {
        TaskState {
            phase:      Mutex::new(TaskPhase::Idle),
            changed:    Condvar::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> TaskPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    ///
    /// Moves the task to a new phase, waking up anything waiting on it
    ///
    pub fn set_phase(&self, phase: TaskPhase) {
        let mut current = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        *current        = phase;

        self.changed.notify_all();
    }

    ///
    /// Blocks until no worker is preparing the task
    ///
    /// This can be called any number of times: it returns immediately if the task is idle, done or disposed.
    ///
    pub fn done(&self) -> TaskPhase {
        let phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        let phase = self.changed.wait_while(phase, |phase| phase.is_in_flight()).unwrap_or_else(PoisonError::into_inner);

        *phase
    }

    ///
    /// Returns a guard that marks the task as done when it's dropped (including when a worker panics)
    ///
    pub fn running(&self) -> RunningGuard<'_> {
        self.set_phase(TaskPhase::Running);
        RunningGuard { state: self }
    }
}

impl Default for TaskState {
    fn default() -> Self {
        TaskState::new()
    }
}

///
/// Marks a task as done when dropped
///
pub struct RunningGuard<'a> {
    state: &'a TaskState,
}

impl<'a> Drop for RunningGuard<'a> {
    fn drop(&mut self) {
        self.state.set_phase(TaskPhase::Done);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::thread;

    #[test]
    fn idle_task_is_done_immediately() {
        let state = TaskState::new();

        assert!(state.done() == TaskPhase::Idle);
        assert!(state.done() == TaskPhase::Idle);
    }

    #[test]
    fn wait_for_worker() {
        let state = Arc::new(TaskState::new());
        state.set_phase(TaskPhase::Pending);

        let worker_state    = Arc::clone(&state);
        let worker          = thread::spawn(move || {
            let _running = worker_state.running();
            thread::sleep(std::time::Duration::from_millis(10));
        });

        assert!(state.done() == TaskPhase::Done);
        assert!(state.done() == TaskPhase::Done);
        worker.join().unwrap();
    }

    #[test]
    fn panicking_worker_still_finishes() {
        let state = Arc::new(TaskState::new());
        state.set_phase(TaskPhase::Pending);

        let worker_state    = Arc::clone(&state);
        let worker          = thread::spawn(move || {
            let _running = worker_state.running();
            panic!("Worker failed");
        });

        assert!(state.done() == TaskPhase::Done);
        assert!(worker.join().is_err());
    }
}
