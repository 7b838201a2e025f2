// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle and countdown coordination.
//!
//! Notifications appear temporarily and dismiss themselves after a countdown.
//! The countdown pauses while the pointer is over a toast, and depending on
//! the ordering mode only one toast counts down at a time.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, ids and severity levels
//! - [`registry`] - ordered storage with stack/queue insertion
//! - [`selection`] - which toasts are eligible to count down
//! - [`timer`] - per-toast countdown state machine
//! - [`manager`] - `Manager` tying the pieces together, the only mutation path
//! - [`view`] - iced rendering of the toast column
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::toast::{Manager, Severity, ToastRequest};
//!
//! let mut manager = Manager::new(settings);
//! manager.push(ToastRequest::new("Saved").severity(Severity::Success), Instant::now());
//!
//! // On every presented frame while `manager.needs_frames()`:
//! manager.on_frame(frame_instant);
//!
//! // In the view:
//! let overlay = Toast::view_overlay(&manager).map(Message::Toast);
//! ```

pub mod manager;
pub mod notification;
pub mod registry;
pub mod selection;
pub mod timer;
pub mod view;

pub use manager::{DismissReason, Manager, Message};
pub use notification::{Content, DisplayMode, Notification, Severity, ToastId, ToastRequest};
pub use registry::{InsertPolicy, Registry};
pub use selection::{select_active, ActiveSet, SelectionPolicy};
pub use timer::{FrameToken, TickOutcome, TimerEngine, TimerPhase};
pub use view::Toast;
