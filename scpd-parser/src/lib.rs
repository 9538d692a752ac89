//! # scpd
//!
//! Reading and writing UPnP Service Control Protocol Description documents.
//!
//! ## Usage
//!
//! ### Parsing
//! ```rust
//! use scpd::parse_str;
//! use upnp_typedef::Service;
//!
//! let xml = r#"<scpd xmlns="urn:schemas-upnp-org:service-1-0">
//!   <specVersion><major>1</major><minor>0</minor></specVersion>
//!   <actionList><action><name>GetStatus</name><argumentList>
//!     <argument><name>ResultStatus</name><direction>out</direction>
//!       <relatedStateVariable>Status</relatedStateVariable></argument>
//!   </argumentList></action></actionList>
//!   <serviceStateTable><stateVariable sendEvents="yes">
//!     <name>Status</name><dataType>boolean</dataType>
//!   </stateVariable></serviceStateTable>
//! </scpd>"#;
//!
//! let mut service = Service::new();
//! let report = parse_str(xml, &mut service)?;
//! assert!(report.is_clean());
//! assert_eq!(service.action_count(), 1);
//! # Ok::<(), scpd::ScpdError>(())
//! ```
//!
//! ### Serializing
//! ```rust
//! use upnp_typedef::Service;
//!
//! let xml = scpd::to_xml(&Service::new())?;
//! assert!(xml.starts_with("<?xml"));
//! # Ok::<(), scpd::ScpdError>(())
//! ```

pub mod common;
pub mod error;
pub mod parser;
pub mod writer;

pub use error::{Result, ScpdError};
pub use parser::{parse, parse_str, ParseReport, Section, SkipReason, Skipped, SpecVersion};
pub use writer::{to_xml, write, write_into};
