//! Property-based tests for generation, evaluation, rendering and shrinking.
