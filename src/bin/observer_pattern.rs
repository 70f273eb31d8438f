// Observer pattern: a news publisher and its subscribers.

use design_patterns::{bootstrap, observer, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    observer::run_demo(&trace);
    Ok(())
}
