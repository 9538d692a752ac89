//! # upnp-typedef
//!
//! In-memory model of a UPnP service as described by its SCPD document.
//!
//! A [`Service`] owns an ordered list of [`Action`]s and [`StateVariable`]s.
//! Each action owns its [`Argument`]s; arguments and state variables refer
//! to each other by name only, and the reference is resolved on demand with
//! [`Service::related_state_variable`].
//!
//! ```rust
//! use upnp_typedef::{Action, Argument, ArgumentDirection, Service, StateVariable};
//!
//! let mut service = Service::new();
//! service.add_state_variable(StateVariable::new("Target", "boolean", None, "no"));
//!
//! let mut action = Action::new("SetTarget");
//! action.add_argument(Argument::new("NewTargetValue", ArgumentDirection::In, "Target"));
//! service.add_action(action).unwrap();
//!
//! let var = service.related_state_variable("SetTarget", "NewTargetValue").unwrap();
//! assert_eq!(var.data_type_name(), "boolean");
//! ```

pub mod action;
pub mod argument;
pub mod data_type;
pub mod error;
pub mod service;
pub mod state_variable;
pub mod value;

pub use action::Action;
pub use argument::{Argument, ArgumentDirection};
pub use data_type::DataType;
pub use error::{Result, TypedefError};
pub use service::Service;
pub use state_variable::StateVariable;
pub use value::{Value, ValueKind};
