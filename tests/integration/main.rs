//! End-to-end scenarios over the store, navigation state and shell frame.

mod helpers;
mod shell_test;
mod store_test;
