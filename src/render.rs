use std::fmt::{Display, Formatter};
use std::io::Write;

#[cfg(not(feature = "log"))]
use crate::logger::{debug, trace};
#[cfg(feature = "log")]
use log::{debug, trace};

use crate::error::PrintError;
use crate::ip::PrintIp;

/// Renders `value` as one line: its units followed by a single `\n`.
pub fn to_ip_string<T: PrintIp + ?Sized>(value: &T) -> String {
    let mut line = String::new();
    value.write_units(&mut line);
    line.push('\n');
    line
}

/// Writes the rendered line of `value` to `out`.
///
/// The line is built in memory first and handed to the sink in one
/// `write_all`, followed by a flush.
pub fn print_ip<T, W>(value: &T, out: &mut W) -> Result<(), PrintError>
where
    T: PrintIp + ?Sized,
    W: Write + ?Sized,
{
    debug!("printing {} as {}", std::any::type_name::<T>(), T::SHAPE);
    let line = to_ip_string(value);
    trace!("rendered {} bytes", line.len());
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn print_ip_stdout<T: PrintIp + ?Sized>(value: &T) -> Result<(), PrintError> {
    print_ip(value, &mut std::io::stdout().lock())
}

/// Formats the units of a value without the trailing line break.
pub struct IpDisplay<'a, T: ?Sized> {
    value: &'a T,
}

impl<T: PrintIp + ?Sized> Display for IpDisplay<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut units = String::new();
        self.value.write_units(&mut units);
        f.write_str(&units)
    }
}

pub trait IpDisplayExt: PrintIp {
    fn ip_display(&self) -> IpDisplay<'_, Self> {
        IpDisplay { value: self }
    }
}

impl<T: PrintIp + ?Sized> IpDisplayExt for T {}
