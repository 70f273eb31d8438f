// Runs every pattern demo in sequence.

use design_patterns::{bootstrap, run_all, PatternError};

fn main() -> Result<(), PatternError> {
    let (config, trace) = bootstrap()?;
    run_all(&config, &trace)
}
