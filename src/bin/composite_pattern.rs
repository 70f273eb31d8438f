// Composite pattern: file-system tree sizes and listing.

use design_patterns::{bootstrap, composite, PatternError};

fn main() -> Result<(), PatternError> {
    let (_, trace) = bootstrap()?;
    composite::run_demo(&trace)
}
