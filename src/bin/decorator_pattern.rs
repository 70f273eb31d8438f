// Decorator pattern: timing and deprecation wrappers around report tasks.

use design_patterns::{bootstrap, decorator, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    decorator::run_demo(&trace);
    Ok(())
}
