//! Shape selection for ip-like printing.
//!
//! Every printable type implements [`PrintIp`], and its implementation fixes the
//! [`Shape`] used to render it. Types that fall in none of the four shapes have
//! no implementation at all, so handing one to the renderer fails to compile:
//!
//! ```compile_fail
//! print_ip::to_ip_string(&1.5f64);
//! ```
//!
//! Tuples only qualify when all of their members share one type:
//!
//! ```compile_fail
//! print_ip::to_ip_string(&(127u8, 0u16, 0u8, 1u8));
//! ```
//!
//! ```
//! use print_ip::{to_ip_string, PrintIp, Shape};
//!
//! assert_eq!(<(u8, u8, u8, u8)>::SHAPE, Shape::Tuple);
//! assert_eq!(to_ip_string(&(127u8, 0u8, 0u8, 1u8)), "127.0.0.1\n");
//! ```

mod integral;
mod sequence;
mod text;
mod tuple;

use std::fmt::{Display, Formatter};

pub use tuple::TupleArity;

/// Placed between two units, never after the last one.
pub const SEPARATOR: char = '.';

#[cfg_attr(feature = "cmd", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Fixed-width integer, printed byte by byte.
    Integral,
    /// Ordered container of one element type.
    Sequence,
    /// Fixed-arity tuple whose members all share one type.
    Tuple,
    /// Already formatted text, printed verbatim.
    Text,
}

impl Display for Shape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Shape::Integral => "integral",
            Shape::Sequence => "sequence",
            Shape::Tuple => "tuple",
            Shape::Text => "text",
        })
    }
}

/// A value that can be printed as a dotted ip-like address.
///
/// The implementation is chosen from the static type alone, the contents of the
/// value never take part in the decision.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be printed as an ip address",
    label = "not an integer, a string, a sequence or a same-typed tuple",
    note = "tuples are printable only when every member has the same type"
)]
pub trait PrintIp {
    const SHAPE: Shape;

    /// Appends the units of `self` to `buf`, separated by [`SEPARATOR`].
    fn write_units(&self, buf: &mut String);

    /// Appends `self` as a single member of an enclosing sequence or tuple.
    fn write_unit(&self, buf: &mut String) {
        self.write_units(buf)
    }
}

impl<T: PrintIp + ?Sized> PrintIp for &T {
    const SHAPE: Shape = T::SHAPE;

    fn write_units(&self, buf: &mut String) {
        (**self).write_units(buf)
    }

    fn write_unit(&self, buf: &mut String) {
        (**self).write_unit(buf)
    }
}

/// Statically selected shape of `value`.
pub fn shape_of<T: PrintIp + ?Sized>(_value: &T) -> Shape {
    T::SHAPE
}

pub(crate) fn write_joined<I>(members: I, buf: &mut String)
where
    I: IntoIterator,
    I::Item: PrintIp,
{
    for (i, m) in members.into_iter().enumerate() {
        if i > 0 {
            buf.push(SEPARATOR);
        }
        m.write_unit(buf);
    }
}
