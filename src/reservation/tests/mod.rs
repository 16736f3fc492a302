//! Unit tests for the reservation ledger.
