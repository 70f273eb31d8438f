// Decorator Pattern: wrappers that add behavior around a task without
// touching the task itself. Wrappers implement the same trait, so they nest.

use std::time::Instant;

use tracing::warn;

use crate::trace::Trace;

pub trait Task {
    fn name(&self) -> &str;
    fn run(&self, trace: &Trace) -> u64;
}

// ============================================================================
// Concrete tasks
// ============================================================================

pub struct SalesReport {
    pub days: u32,
    pub iterations: u64,
}

impl Task for SalesReport {
    fn name(&self) -> &str {
        "generate_sales_report"
    }

    fn run(&self, trace: &Trace) -> u64 {
        trace.line(format!(
            "Generating sales report for the last {} days...",
            self.days
        ));
        let sum = busy_sum(self.iterations);
        trace.line("Sales report generated successfully.");
        sum
    }
}

pub struct OldReport {
    pub iterations: u64,
}

impl Task for OldReport {
    fn name(&self) -> &str {
        "generate_old_report"
    }

    fn run(&self, trace: &Trace) -> u64 {
        trace.line("Generating the old, inefficient report...");
        let sum = busy_sum(self.iterations);
        trace.line("Old report generated.");
        sum
    }
}

fn busy_sum(iterations: u64) -> u64 {
    (0..iterations).fold(0u64, |acc, i| std::hint::black_box(acc.wrapping_add(i)))
}

// ============================================================================
// Decorators
// ============================================================================

/// Reports how long the wrapped task took.
pub struct Timed<T>(pub T);

impl<T: Task> Task for Timed<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn run(&self, trace: &Trace) -> u64 {
        trace.line(format!(
            "[MeasureTime] Starting execution of {}...",
            self.name()
        ));
        let start = Instant::now();
        let result = self.0.run(trace);
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        trace.line(format!(
            "[MeasureTime] {} executed in {:.2} ms.",
            self.name(),
            elapsed_ms
        ));
        result
    }
}

/// Warns on every call before delegating.
pub struct Deprecated<T>(pub T);

impl<T: Task> Task for Deprecated<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn run(&self, trace: &Trace) -> u64 {
        warn!(task = self.name(), "deprecated task invoked");
        trace.line(format!(
            "[Deprecated] Method \"{}\" is deprecated and will be removed in a future version.",
            self.name()
        ));
        self.0.run(trace)
    }
}

pub fn run_demo(trace: &Trace) {
    trace.banner("Decorator Pattern Example");

    let sales = Timed(SalesReport {
        days: 30,
        iterations: 10_000_000,
    });
    let old = Deprecated(Timed(OldReport {
        iterations: 5_000_000,
    }));

    trace.separator();
    sales.run(trace);

    trace.separator();
    old.run(trace);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Constant(u64);

    impl Task for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn run(&self, trace: &Trace) -> u64 {
            trace.line("inner");
            self.0
        }
    }

    #[test]
    fn test_busy_sum() {
        assert_eq!(busy_sum(0), 0);
        assert_eq!(busy_sum(5), 10);
    }

    #[test]
    fn test_timed_wraps_inner_call() {
        let trace = Trace::recording();
        let result = Timed(Constant(7)).run(&trace);
        let lines = trace.lines();

        assert_eq!(result, 7);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "[MeasureTime] Starting execution of constant...");
        assert_eq!(lines[1], "inner");
        assert!(lines[2].starts_with("[MeasureTime] constant executed in "));
        assert!(lines[2].ends_with(" ms."));
    }

    #[test]
    fn test_deprecated_warns_first() {
        let trace = Trace::recording();
        let result = Deprecated(Constant(3)).run(&trace);

        assert_eq!(result, 3);
        assert_eq!(
            trace.lines(),
            vec![
                "[Deprecated] Method \"constant\" is deprecated and will be removed in a future version.",
                "inner",
            ]
        );
    }

    #[test]
    fn test_stacked_decorators_keep_name_and_order() {
        let trace = Trace::recording();
        let task = Deprecated(Timed(OldReport { iterations: 10 }));
        assert_eq!(task.name(), "generate_old_report");

        let result = task.run(&trace);
        let lines = trace.lines();
        assert_eq!(result, 45);
        assert!(lines[0].starts_with("[Deprecated]"));
        assert!(lines[1].starts_with("[MeasureTime] Starting"));
        assert_eq!(lines[2], "Generating the old, inefficient report...");
        assert_eq!(lines[3], "Old report generated.");
        assert!(lines[4].starts_with("[MeasureTime] generate_old_report executed"));
    }
}
