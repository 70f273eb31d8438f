// Strategy pattern: swappable payment methods for a shopping cart.

use design_patterns::{bootstrap, strategy, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    strategy::run_demo(&trace);
    Ok(())
}
