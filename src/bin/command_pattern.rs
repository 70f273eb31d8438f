// Command pattern: calculator with undo/redo history.

use design_patterns::{bootstrap, command, PatternError};

fn main() -> Result<(), PatternError> {
    let (config, trace) = bootstrap()?;
    command::run_demo(&trace, config.history_limit);
    Ok(())
}
