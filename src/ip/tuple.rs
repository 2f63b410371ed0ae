use crate::ip::{write_joined, PrintIp, Shape};

/// Number of members of a printable tuple, known at compile time.
pub trait TupleArity {
    const ARITY: usize;
}

impl PrintIp for () {
    const SHAPE: Shape = Shape::Tuple;

    fn write_units(&self, _buf: &mut String) {}
}

impl TupleArity for () {
    const ARITY: usize = 0;
}

// Generates one impl per arity. `@step` moves one index at a time from the
// pending list to the emitted one until nothing is left. Every member is typed
// `T`, so mixed tuples get no impl.
macro_rules! impl_tuple {
    (@member $idx:tt $t:ident) => { $t };
    (@one $idx:tt) => { 1 };
    (@impl $($idx:tt)+) => {
        impl<T: PrintIp> PrintIp for ($(impl_tuple!(@member $idx T),)+) {
            const SHAPE: Shape = Shape::Tuple;

            fn write_units(&self, buf: &mut String) {
                write_joined([$(&self.$idx),+], buf)
            }
        }

        impl<T> TupleArity for ($(impl_tuple!(@member $idx T),)+) {
            const ARITY: usize = 0 $(+ impl_tuple!(@one $idx))+;
        }
    };
    (@step [$($done:tt)*] []) => {};
    (@step [$($done:tt)*] [$next:tt $($pending:tt)*]) => {
        impl_tuple!(@impl $($done)* $next);
        impl_tuple!(@step [$($done)* $next] [$($pending)*]);
    };
}

impl_tuple!(@step [] [0 1 2 3 4 5 6 7 8 9 10 11]);
