//! Cross-module tests for period lists: codec round trips and evaluation.

mod evaluate;
