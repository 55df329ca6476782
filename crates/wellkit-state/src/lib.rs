//! # wellkit-state
//!
//! In-memory application-state containers for the Wellkit health companion.
//!
//! Every container here is plain owned state: the top-level controller
//! constructs them at startup and passes them down to whichever screen needs
//! them.  There are no singletons, no interior mutability, and no
//! persistence — state lives exactly as long as the process.

pub mod appointments;
pub mod chat_log;
pub mod reminders;
pub mod session;

pub use appointments::AppointmentBook;
pub use chat_log::ChatLog;
pub use reminders::ReminderList;
pub use session::Session;
