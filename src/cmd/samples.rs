use std::collections::LinkedList;
use std::io::Write;

use crate::error::PrintError;
use crate::ip::{PrintIp, Shape};
use crate::render::print_ip;

fn sample<T, W>(value: T, shapes: &[Shape], out: &mut W) -> Result<usize, PrintError>
where
    T: PrintIp,
    W: Write + ?Sized,
{
    if shapes.contains(&T::SHAPE) {
        print_ip(&value, out)?;
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Prints the demonstration values whose shape is in `shapes`, returning how
/// many were printed.
pub fn print_samples<W>(shapes: &[Shape], out: &mut W) -> Result<usize, PrintError>
where
    W: Write + ?Sized,
{
    let mut printed = 0;
    printed += sample(0i32, shapes, out)?;
    printed += sample(1i32, shapes, out)?;
    printed += sample(255i32, shapes, out)?;
    printed += sample(256i32, shapes, out)?;
    printed += sample(1234567890i32, shapes, out)?;
    printed += sample(1234567890123456i64, shapes, out)?;
    printed += sample(-1i8, shapes, out)?;
    printed += sample(0i16, shapes, out)?;
    printed += sample(2130706433i32, shapes, out)?;
    printed += sample(8875824491850138409i64, shapes, out)?;
    printed += sample("123.45.67.89.12.34.56", shapes, out)?;
    printed += sample(vec![100, 200, 300, 400], shapes, out)?;
    printed += sample(LinkedList::from([400i16, 300, 200, 100]), shapes, out)?;
    printed += sample(vec!["abc", "def", "gij"], shapes, out)?;
    printed += sample(
        vec![
            String::from("abc"),
            String::from("def"),
            String::from("gij"),
            String::from("klm"),
            String::from("nop"),
            String::from("rst"),
        ],
        shapes,
        out,
    )?;
    printed += sample((127, 0, 0, 1), shapes, out)?;
    Ok(printed)
}
