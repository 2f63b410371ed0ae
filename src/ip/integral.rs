use crate::ip::{write_joined, PrintIp, Shape};

// Bytes come from the value itself, most significant first, so the output does
// not depend on the host byte order. Signed values go through their
// two's-complement pattern: every byte is read back as u8.
macro_rules! impl_integral {
    ($($t:ty),+ $(,)?) => {$(
        impl PrintIp for $t {
            const SHAPE: Shape = Shape::Integral;

            fn write_units(&self, buf: &mut String) {
                write_joined(self.to_be_bytes().iter(), buf)
            }

            fn write_unit(&self, buf: &mut String) {
                buf.push_str(&self.to_string())
            }
        }
    )+};
}

impl_integral!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
