//! Ordered, immutable enumerations of named constants.
//!
//! - [`Enum`]: a sealed, insertion-ordered set of `NAME = value` members with
//!   lookup, reverse lookup, merge, slice, rendering and serde support.
//! - [`EnumBuilder`] and [`Sequence`]: declaration, with auto-generated values
//!   for members that have no explicit literal.
//! - [`OrderedConsts`] and [`ConstEnumerable`]: enumeration over named-member
//!   tables, with or without a stable order.
//! - [`MemberEnumerable`]: the same kind of enumeration over plain records.
pub mod enumeration;
pub mod error;
pub mod inflect;
pub mod members;
pub mod path_de;
pub mod record;
pub mod registry;
pub mod sequence;
pub mod successor;

pub use enumeration::{Enum, EnumBuilder, Fetch};
pub use error::{Error, ErrorKind, Result};
pub use members::{ConstEnumerable, ConstTable, MemberLister, MemberTable};
pub use record::MemberEnumerable;
pub use registry::{OrderRegistry, OrderedConsts};
pub use sequence::Sequence;
pub use successor::Successor;
