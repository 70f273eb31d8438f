// Singleton pattern: one shared configuration service.

use design_patterns::{bootstrap, singleton, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    singleton::run_demo(&trace);
    Ok(())
}
