//! # Stockroom Architecture
//!
//! Stockroom is a **UI-agnostic inventory library** with an interactive
//! terminal client on top. The library knows nothing about prompts, menus or
//! stdout; the shell in the binary is just one possible client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, templated table rendering            │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns outcome enums and Results                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, pure business logic            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Expected Failures Are Values
//!
//! Looking up a missing product, removing more stock than is on hand or
//! picking a category that does not exist are ordinary outcomes. They come
//! back as enum variants ([`api::Lookup`], [`api::StockOutcome`],
//! [`api::CategoryListing`], [`api::Deletion`]) so every caller has to handle
//! them. [`error::StockError`] is reserved for bad arguments and for the
//! environment failing.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: `Product`, `ProductId`, `Category`
//! - [`input`]: Parsing raw prompt text into typed, bounds-checked values
//! - [`config`]: Shell presentation settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod store;
