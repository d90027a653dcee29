//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the host rendering surface and the domain, store,
//! and client layers. It implements the event-driven state machine that keeps
//! tabs, pagination, preview, and the loading flag consistent under
//! asynchronous refresh and delete.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Client Calls
//!                           ↑                                  ↓
//!                           └──────── Completion Events ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side-effect commands emitted by the event handler
//! - [`controller`]: Async driver executing actions against the client
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod controller;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use controller::Gallery;
pub use handler::{handle_event, Event};
pub use state::AppState;
