//! # Name Registry Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/           # Criterion benchmarks for the engine
//! └── src/integration/   # End-to-end flows through handler and runtime
//!     ├── scenarios.rs   # Auction walkthroughs and seeded random sequences
//!     └── concurrency.rs # Racing buyers on multi-threaded runtimes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ns-tests
//!
//! # By category
//! cargo test -p ns-tests integration::scenarios
//! cargo test -p ns-tests integration::concurrency
//!
//! # Benchmarks
//! cargo bench -p ns-tests
//! ```

pub mod integration;
