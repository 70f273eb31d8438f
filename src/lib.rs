//! # Design Patterns
//!
//! Runnable examples of classical design patterns. Each module stands alone
//! and ends in a `run_demo` that writes its console trace.
//!
//! ## Patterns Covered
//!
//! 1. **Command** (`command`)
//!    - Calculator receiver, invertible add/subtract commands
//!    - Linear undo/redo history, optionally bounded
//!
//! 2. **Structural**
//!    - Composite: file-system tree (`composite`)
//!    - Decorator: timing and deprecation wrappers (`decorator`)
//!
//! 3. **Creational**
//!    - Factory: notifications by kind (`factory`)
//!    - Singleton: process-wide config service (`singleton`)
//!
//! 4. **Behavioral**
//!    - Observer: news publisher and subscribers (`observer`)
//!    - Strategy: swappable payment methods (`strategy`)
//!    - State reducer: toggle with an injectable reducer (`reducer`)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin command_pattern
//! cargo run --bin composite_pattern
//! cargo run --bin decorator_pattern
//! cargo run --bin factory_pattern
//! cargo run --bin observer_pattern
//! cargo run --bin singleton_pattern
//! cargo run --bin strategy_pattern
//! cargo run --bin state_reducer
//! cargo run --bin all_patterns
//! ```
//!
//! Settings are read from `patterns.toml` in the working directory when it
//! exists (see [`config::DemoConfig`]).

pub mod command;
pub mod composite;
pub mod config;
pub mod decorator;
pub mod error;
pub mod factory;
pub mod logging;
pub mod observer;
pub mod reducer;
pub mod singleton;
pub mod strategy;
pub mod trace;

use std::path::Path;

pub use config::DemoConfig;
pub use error::{ConfigError, PatternError};
pub use trace::Trace;

pub const CONFIG_FILE: &str = "patterns.toml";

/// Shared start-up for the demo binaries: load config, install logging and
/// open a stdout trace.
pub fn bootstrap() -> Result<(DemoConfig, Trace), PatternError> {
    let config = DemoConfig::load_or_default(Path::new(CONFIG_FILE))?;
    logging::init(&config);
    let trace = Trace::stdout(&config);
    Ok((config, trace))
}

/// Every demo in order, separated by blank lines.
pub fn run_all(config: &DemoConfig, trace: &Trace) -> Result<(), PatternError> {
    command::run_demo(trace, config.history_limit);
    trace.line("");
    composite::run_demo(trace)?;
    trace.line("");
    decorator::run_demo(trace);
    trace.line("");
    factory::run_demo(trace)?;
    trace.line("");
    observer::run_demo(trace);
    trace.line("");
    singleton::run_demo(trace);
    trace.line("");
    strategy::run_demo(trace);
    trace.line("");
    reducer::run_demo(trace);
    Ok(())
}
