// Factory pattern: notification senders created by kind.

use design_patterns::{bootstrap, factory, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    factory::run_demo(&trace)
}
