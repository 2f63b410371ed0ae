//! Print values as dotted-octet, ip-like addresses.
//!
//! ```
//! use std::collections::LinkedList;
//! use print_ip::to_ip_string;
//!
//! assert_eq!(to_ip_string(&2130706433u32), "127.0.0.1\n");
//! assert_eq!(to_ip_string(&LinkedList::from([0, 1, 2, 3])), "0.1.2.3\n");
//! assert_eq!(to_ip_string(&(127, 0, 0, 1)), "127.0.0.1\n");
//! assert_eq!(to_ip_string("123.45.67.89.12.34.56"), "123.45.67.89.12.34.56\n");
//! ```

mod error;
mod ip;
mod render;
pub mod logger;
#[cfg(feature = "cmd")]
pub mod cmd;

pub use error::PrintError;
pub use ip::{shape_of, PrintIp, Shape, TupleArity, SEPARATOR};
pub use render::{print_ip, print_ip_stdout, to_ip_string, IpDisplay, IpDisplayExt};
