use std::cell::RefCell;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

enum GateState {
    Waiting(Vec<Task>),
    Open,
}

/// One-shot readiness gate.
///
/// Work handed to [`ReadyGate::run`] executes inline once the gate is open and
/// is queued until then. Opening drains the queue exactly once; later opens do
/// nothing.
#[derive(Clone)]
pub struct ReadyGate {
    state: Rc<RefCell<GateState>>,
}

impl ReadyGate {
    pub fn new(ready: bool) -> Self {
        let state = if ready {
            GateState::Open
        } else {
            GateState::Waiting(Vec::new())
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(*self.state.borrow(), GateState::Open)
    }

    pub fn open(&self) {
        let previous = self.state.replace(GateState::Open);
        let GateState::Waiting(tasks) = previous else {
            return;
        };

        tracing::debug!("Readiness gate opened, running {} deferred task(s)", tasks.len());
        for task in tasks {
            task();
        }
    }

    pub fn run(&self, task: impl FnOnce() + 'static) {
        {
            let mut state = self.state.borrow_mut();
            if let GateState::Waiting(tasks) = &mut *state {
                tasks.push(Box::new(task));
                return;
            }
        }
        task();
    }
}
