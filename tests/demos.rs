// Every demo runs to completion against a recorded trace.

use design_patterns::{run_all, DemoConfig, Trace};

#[test]
fn all_demos_complete() {
    let trace = Trace::recording();
    run_all(&DemoConfig::default(), &trace).unwrap();

    let banners: Vec<String> = trace
        .lines()
        .into_iter()
        .filter(|l| l.starts_with("--- ") && l.ends_with(" Example ---"))
        .collect();
    assert_eq!(
        banners,
        vec![
            "--- Command Pattern Example ---",
            "--- Composite Pattern Example ---",
            "--- Decorator Pattern Example ---",
            "--- Factory Pattern Example ---",
            "--- Observer Pattern Example ---",
            "--- Singleton Pattern Example ---",
            "--- Strategy Pattern Example ---",
            "--- State Reducer Example ---",
        ]
    );
}

#[test]
fn bounded_history_demo_stops_early() {
    let config = DemoConfig::from_toml_str("history_limit = 1").unwrap();
    let trace = Trace::recording();
    design_patterns::command::run_demo(&trace, config.history_limit);

    let notices = trace
        .lines()
        .iter()
        .filter(|l| *l == "[History] Nothing to undo.")
        .count();
    // Only one command stays undoable, so the second and later undos are notices.
    assert_eq!(notices, 3);
}
