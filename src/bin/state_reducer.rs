// State reducer pattern: a toggle driven by a replaceable reducer.

use design_patterns::{bootstrap, reducer, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    reducer::run_demo(&trace);
    Ok(())
}
