use std::borrow::Cow;

use crate::ip::{PrintIp, Shape};

impl PrintIp for str {
    const SHAPE: Shape = Shape::Text;

    fn write_units(&self, buf: &mut String) {
        buf.push_str(self)
    }
}

macro_rules! impl_text {
    ($($text:ty),+ $(,)?) => {$(
        impl PrintIp for $text {
            const SHAPE: Shape = Shape::Text;

            fn write_units(&self, buf: &mut String) {
                buf.push_str(self)
            }
        }
    )+};
}

impl_text!(String, Box<str>, Cow<'_, str>);
