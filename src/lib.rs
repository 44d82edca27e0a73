//! bindscan: the identifiers a binding pattern introduces, in source order.
//!
//! ```
//! use serde_json::json;
//!
//! // var { a, b: [ c,, ...x ], d } = whatever()
//! let id = json!({
//!     "type": "ObjectPattern",
//!     "properties": [
//!         { "type": "Property", "shorthand": true,
//!           "key": { "type": "Identifier", "name": "a" },
//!           "value": { "type": "Identifier", "name": "a" } },
//!         { "type": "Property",
//!           "key": { "type": "Identifier", "name": "b" },
//!           "value": { "type": "ArrayPattern", "elements": [
//!               { "type": "Identifier", "name": "c" },
//!               null,
//!               { "type": "RestElement", "argument": { "type": "Identifier", "name": "x" } }
//!           ] } },
//!         { "type": "Property", "shorthand": true,
//!           "key": { "type": "Identifier", "name": "d" },
//!           "value": { "type": "Identifier", "name": "d" } }
//!     ]
//! });
//! let names = bindscan::assigned_names_from_estree(&id).unwrap();
//! assert_eq!(names, ["a", "c", "x", "d"]);
//! ```

pub use bindscan_ast as ast;
pub use bindscan_binder as binder;
pub use bindscan_common as common;

pub use bindscan_ast::{NodeArena, NodeData, NodeIndex, SyntaxKind, lower_estree};
pub use bindscan_binder::{
    PatternWalker, assigned_identifiers_from_estree, assigned_names_from_estree,
    collect_assigned_identifiers, get_assigned_identifier_names, get_assigned_identifiers,
};
pub use bindscan_common::InvalidInputError;

// Opt-in tracing subscriber for embedding tools and debugging sessions
pub mod tracing_config;
