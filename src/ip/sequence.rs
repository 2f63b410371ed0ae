use std::collections::{LinkedList, VecDeque};

use crate::ip::{write_joined, PrintIp, Shape};

macro_rules! impl_sequence {
    ($($seq:ty),+ $(,)?) => {$(
        impl<T: PrintIp> PrintIp for $seq {
            const SHAPE: Shape = Shape::Sequence;

            fn write_units(&self, buf: &mut String) {
                write_joined(self.iter(), buf)
            }
        }
    )+};
}

impl_sequence!([T], Vec<T>, VecDeque<T>, LinkedList<T>);

impl<T: PrintIp, const N: usize> PrintIp for [T; N] {
    const SHAPE: Shape = Shape::Sequence;

    fn write_units(&self, buf: &mut String) {
        write_joined(self.iter(), buf)
    }
}
