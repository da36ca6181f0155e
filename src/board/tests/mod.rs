//! Unit tests for the issue board.
