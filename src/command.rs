// Command Pattern: operations as values, with a linear undo/redo history.
//
// A `Calculator` is the receiver. Each `Command` records one operation kind,
// its operand and the calculator it targets. `History` keeps two stacks:
// commands that are applied (done) and commands that were undone and can be
// redone. Running a new command always discards the redo stack.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

use crate::trace::Trace;

// ============================================================================
// Receiver
// ============================================================================

#[derive(Debug)]
pub struct Calculator {
    value: i64,
    trace: Trace,
}

impl Calculator {
    pub fn new(trace: Trace) -> Self {
        Self { value: 0, trace }
    }

    /// Shared handle, the form commands hold on to.
    pub fn shared(trace: Trace) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(trace)))
    }

    /// Add `delta` to the current value. Wraps on overflow.
    pub fn apply(&mut self, delta: i64) {
        self.value = self.value.wrapping_add(delta);
        self.trace
            .line(format!("[Calculator] Current value: {}", self.value));
    }

    pub fn add(&mut self, amount: i64) {
        self.apply(amount);
    }

    pub fn subtract(&mut self, amount: i64) {
        self.apply(amount.wrapping_neg());
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

// ============================================================================
// Command
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

impl Operation {
    pub fn inverse(self) -> Self {
        match self {
            Operation::Add => Operation::Subtract,
            Operation::Subtract => Operation::Add,
        }
    }

    fn sign(self) -> i64 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => -1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Command {
    operation: Operation,
    amount: i64,
    target: Rc<RefCell<Calculator>>,
}

impl Command {
    pub fn new(operation: Operation, amount: i64, target: &Rc<RefCell<Calculator>>) -> Self {
        Self {
            operation,
            amount,
            target: Rc::clone(target),
        }
    }

    pub fn add(target: &Rc<RefCell<Calculator>>, amount: i64) -> Self {
        Self::new(Operation::Add, amount, target)
    }

    pub fn subtract(target: &Rc<RefCell<Calculator>>, amount: i64) -> Self {
        Self::new(Operation::Subtract, amount, target)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Signed change this command makes when executed.
    pub fn delta(&self) -> i64 {
        self.amount.wrapping_mul(self.operation.sign())
    }

    pub fn execute(&self) {
        self.apply(self.operation);
    }

    pub fn invert(&self) {
        self.apply(self.operation.inverse());
    }

    fn apply(&self, operation: Operation) {
        let delta = self.amount.wrapping_mul(operation.sign());
        self.target.borrow_mut().apply(delta);
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Add => write!(f, "Add({})", self.amount),
            Operation::Subtract => write!(f, "Subtract({})", self.amount),
        }
    }
}

// ============================================================================
// History
// ============================================================================

/// Result of an undo or redo request. The two `Nothing*` cases are notices,
/// not failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NothingToUndo,
    NothingToRedo,
}

#[derive(Debug)]
pub struct History {
    done: VecDeque<Command>,
    undone: Vec<Command>,
    limit: Option<usize>,
    trace: Trace,
}

impl History {
    pub fn new(trace: Trace) -> Self {
        Self {
            done: VecDeque::new(),
            undone: Vec::new(),
            limit: None,
            trace,
        }
    }

    /// History that keeps at most `limit` undoable commands. Older commands
    /// stay applied but drop out of reach of `undo`.
    pub fn with_limit(limit: usize, trace: Trace) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new(trace)
        }
    }

    pub fn run(&mut self, command: Command) {
        command.execute();
        debug!(command = %command, "command executed");
        self.push_done(command);
        self.undone.clear();
        self.trace.line("[History] Command executed and logged.");
    }

    pub fn undo(&mut self) -> Outcome {
        let Some(command) = self.done.pop_back() else {
            debug!("undo requested with empty history");
            self.trace.line("[History] Nothing to undo.");
            return Outcome::NothingToUndo;
        };

        self.trace.line("[History] Undoing last command...");
        command.invert();
        debug!(command = %command, "command undone");
        self.undone.push(command);
        Outcome::Applied
    }

    pub fn redo(&mut self) -> Outcome {
        let Some(command) = self.undone.pop() else {
            debug!("redo requested with nothing undone");
            self.trace.line("[History] Nothing to redo.");
            return Outcome::NothingToRedo;
        };

        self.trace.line("[History] Redoing last undone command...");
        command.execute();
        debug!(command = %command, "command redone");
        self.push_done(command);
        Outcome::Applied
    }

    fn push_done(&mut self, command: Command) {
        self.done.push_back(command);
        if let Some(limit) = self.limit {
            while self.done.len() > limit {
                if let Some(evicted) = self.done.pop_front() {
                    debug!(command = %evicted, limit, "evicted oldest command");
                }
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.done.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Applied commands, oldest first.
    pub fn done(&self) -> impl Iterator<Item = &Command> {
        self.done.iter()
    }

    /// Undone commands, oldest first; the last one is redone next.
    pub fn undone(&self) -> impl Iterator<Item = &Command> {
        self.undone.iter()
    }

    pub fn done_len(&self) -> usize {
        self.done.len()
    }

    pub fn undone_len(&self) -> usize {
        self.undone.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

// ============================================================================
// Demo
// ============================================================================

/// Runs the calculator scenario. With `limit`, the history is bounded.
pub fn run_demo(trace: &Trace, limit: Option<usize>) {
    trace.banner("Command Pattern Example");

    let calculator = Calculator::shared(trace.clone());
    let mut history = match limit {
        Some(limit) => History::with_limit(limit, trace.clone()),
        None => History::new(trace.clone()),
    };

    history.run(Command::add(&calculator, 10));
    history.run(Command::add(&calculator, 5));
    history.run(Command::subtract(&calculator, 3));

    trace.separator();

    history.undo();
    history.undo();

    trace.separator();

    history.redo();

    trace.separator();

    history.undo();
    history.undo();
    history.undo();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Trace, Rc<RefCell<Calculator>>, History) {
        let trace = Trace::recording();
        let calculator = Calculator::shared(trace.clone());
        let history = History::new(trace.clone());
        (trace, calculator, history)
    }

    fn value(calculator: &Rc<RefCell<Calculator>>) -> i64 {
        calculator.borrow().value()
    }

    #[test]
    fn test_calculator_subtract_is_negated_add() {
        let mut calculator = Calculator::new(Trace::recording());
        calculator.add(7);
        calculator.subtract(10);
        assert_eq!(calculator.value(), -3);
    }

    #[test]
    fn test_calculator_wraps_instead_of_panicking() {
        let mut calculator = Calculator::new(Trace::recording());
        calculator.add(i64::MAX);
        calculator.add(1);
        assert_eq!(calculator.value(), i64::MIN);
    }

    #[test]
    fn test_command_execute_and_invert() {
        let (_, calculator, _) = setup();
        let cmd = Command::subtract(&calculator, 4);

        cmd.execute();
        assert_eq!(value(&calculator), -4);
        cmd.invert();
        assert_eq!(value(&calculator), 0);
    }

    #[test]
    fn test_command_display_and_delta() {
        let (_, calculator, _) = setup();
        let add = Command::add(&calculator, 10);
        let sub = Command::subtract(&calculator, 3);

        assert_eq!(add.to_string(), "Add(10)");
        assert_eq!(sub.to_string(), "Subtract(3)");
        assert_eq!(add.delta(), 10);
        assert_eq!(sub.delta(), -3);
        assert_eq!(sub.operation().inverse(), Operation::Add);
    }

    #[test]
    fn test_scenario_values() {
        let (_, calculator, mut history) = setup();

        history.run(Command::add(&calculator, 10));
        assert_eq!(value(&calculator), 10);
        history.run(Command::add(&calculator, 5));
        assert_eq!(value(&calculator), 15);
        history.run(Command::subtract(&calculator, 3));
        assert_eq!(value(&calculator), 12);

        assert_eq!(history.undo(), Outcome::Applied);
        assert_eq!(value(&calculator), 15);
        assert_eq!(history.undo(), Outcome::Applied);
        assert_eq!(value(&calculator), 10);
        assert_eq!(history.redo(), Outcome::Applied);
        assert_eq!(value(&calculator), 15);
        assert_eq!(history.undo(), Outcome::Applied);
        assert_eq!(value(&calculator), 10);
        assert_eq!(history.undo(), Outcome::Applied);
        assert_eq!(value(&calculator), 0);
        assert_eq!(history.undo(), Outcome::NothingToUndo);
        assert_eq!(value(&calculator), 0);
    }

    #[test]
    fn test_run_clears_redo_stack() {
        let (_, calculator, mut history) = setup();
        history.run(Command::add(&calculator, 1));
        history.run(Command::add(&calculator, 2));
        history.undo();
        assert!(history.can_redo());

        history.run(Command::add(&calculator, 100));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), Outcome::NothingToRedo);
        assert_eq!(value(&calculator), 101);
    }

    #[test]
    fn test_empty_history_notices() {
        let (trace, calculator, mut history) = setup();

        assert_eq!(history.undo(), Outcome::NothingToUndo);
        assert_eq!(history.redo(), Outcome::NothingToRedo);
        assert_eq!(value(&calculator), 0);
        assert_eq!(
            trace.lines(),
            vec!["[History] Nothing to undo.", "[History] Nothing to redo."]
        );
    }

    #[test]
    fn test_stacks_move_commands() {
        let (_, calculator, mut history) = setup();
        history.run(Command::add(&calculator, 10));
        history.run(Command::subtract(&calculator, 3));
        history.undo();

        let done: Vec<String> = history.done().map(|c| c.to_string()).collect();
        let undone: Vec<String> = history.undone().map(|c| c.to_string()).collect();
        assert_eq!(done, vec!["Add(10)"]);
        assert_eq!(undone, vec!["Subtract(3)"]);
        assert_eq!(history.done_len(), 1);
        assert_eq!(history.undone_len(), 1);
    }

    #[test]
    fn test_run_trace_order() {
        let (trace, calculator, mut history) = setup();
        history.run(Command::add(&calculator, 10));
        history.undo();
        history.redo();

        assert_eq!(
            trace.lines(),
            vec![
                "[Calculator] Current value: 10",
                "[History] Command executed and logged.",
                "[History] Undoing last command...",
                "[Calculator] Current value: 0",
                "[History] Redoing last undone command...",
                "[Calculator] Current value: 10",
            ]
        );
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let trace = Trace::recording();
        let calculator = Calculator::shared(trace.clone());
        let mut history = History::with_limit(2, trace);

        history.run(Command::add(&calculator, 1));
        history.run(Command::add(&calculator, 2));
        history.run(Command::add(&calculator, 4));
        assert_eq!(history.done_len(), 2);

        history.undo();
        history.undo();
        assert_eq!(history.undo(), Outcome::NothingToUndo);
        // The evicted Add(1) stays applied.
        assert_eq!(value(&calculator), 1);
    }

    #[test]
    fn test_limit_applies_to_redo() {
        let trace = Trace::recording();
        let calculator = Calculator::shared(trace.clone());
        let mut history = History::with_limit(1, trace);

        history.run(Command::add(&calculator, 1));
        history.undo();
        history.redo();
        assert_eq!(history.done_len(), 1);
        assert_eq!(history.limit(), Some(1));
    }

    #[test]
    fn test_zero_limit_keeps_nothing_undoable() {
        let trace = Trace::recording();
        let calculator = Calculator::shared(trace.clone());
        let mut history = History::with_limit(0, trace);

        history.run(Command::add(&calculator, 9));
        assert!(!history.can_undo());
        assert_eq!(history.undo(), Outcome::NothingToUndo);
        assert_eq!(value(&calculator), 9);
    }

    #[test]
    fn test_demo_trace() {
        let trace = Trace::recording();
        run_demo(&trace, None);
        let events = trace.events();

        assert_eq!(events.first().map(String::as_str), Some("--- Command Pattern Example ---"));
        assert_eq!(events.last().map(String::as_str), Some("[History] Nothing to undo."));
        let values: Vec<&str> = events
            .iter()
            .filter_map(|line| line.strip_prefix("[Calculator] Current value: "))
            .collect();
        assert_eq!(values, vec!["10", "15", "12", "15", "10", "15", "10", "0"]);
    }
}
