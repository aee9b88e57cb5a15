//! Property-based tests for the refinement loop.
