//! Unit tests for the machine registry.
