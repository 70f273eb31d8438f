// State Reducer Pattern: a toggle whose transitions are decided by a
// reducer function the caller can replace.

use crate::trace::Trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleState {
    pub on: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Toggle,
}

pub fn default_reducer(state: ToggleState, action: ToggleAction) -> ToggleState {
    match action {
        ToggleAction::Toggle => ToggleState { on: !state.on },
    }
}

pub struct Toggle<R>
where
    R: Fn(ToggleState, ToggleAction) -> ToggleState,
{
    state: ToggleState,
    reducer: R,
}

impl Toggle<fn(ToggleState, ToggleAction) -> ToggleState> {
    pub fn new() -> Self {
        Self::with_reducer(default_reducer)
    }
}

impl Default for Toggle<fn(ToggleState, ToggleAction) -> ToggleState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Toggle<R>
where
    R: Fn(ToggleState, ToggleAction) -> ToggleState,
{
    pub fn with_reducer(reducer: R) -> Self {
        Self {
            state: ToggleState::default(),
            reducer,
        }
    }

    pub fn dispatch(&mut self, action: ToggleAction) -> ToggleState {
        self.state = (self.reducer)(self.state, action);
        self.state
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.on
    }

    pub fn label(&self) -> &'static str {
        if self.state.on {
            "ON"
        } else {
            "OFF"
        }
    }
}

pub fn run_demo(trace: &Trace) {
    trace.banner("State Reducer Example");

    let mut toggle = Toggle::new();
    trace.line(format!("Default toggle: {}", toggle.label()));
    for _ in 0..3 {
        toggle.dispatch(ToggleAction::Toggle);
        trace.line(format!("Clicked -> {}", toggle.label()));
    }

    trace.separator();

    // A caller-owned reducer: only ever switches on, never back off.
    let mut latch = Toggle::with_reducer(|state: ToggleState, action: ToggleAction| match action {
        ToggleAction::Toggle if state.on => state,
        ToggleAction::Toggle => default_reducer(state, action),
    });
    trace.line(format!("Latching toggle: {}", latch.label()));
    for _ in 0..3 {
        latch.dispatch(ToggleAction::Toggle);
        trace.line(format!("Clicked -> {}", latch.label()));
    }
}
