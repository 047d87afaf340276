// src/macros.rs
//! Operator forwarding: each binary operator is written once for
//! `&Multivector op &Multivector`; these macros derive the owned variants.

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl<M: $crate::metric::Metric> $imp<Multivector<M>> for Multivector<M> {
            type Output = Multivector<M>;
            #[inline]
            fn $method(self, rhs: Multivector<M>) -> Multivector<M> {
                $imp::$method(&self, &rhs)
            }
        }

        impl<'a, M: $crate::metric::Metric> $imp<&'a Multivector<M>> for Multivector<M> {
            type Output = Multivector<M>;
            #[inline]
            fn $method(self, rhs: &'a Multivector<M>) -> Multivector<M> {
                $imp::$method(&self, rhs)
            }
        }

        impl<'a, M: $crate::metric::Metric> $imp<Multivector<M>> for &'a Multivector<M> {
            type Output = Multivector<M>;
            #[inline]
            fn $method(self, rhs: Multivector<M>) -> Multivector<M> {
                $imp::$method(self, &rhs)
            }
        }
    };
}

macro_rules! forward_assign {
    ($imp:ident, $method:ident, $op:ident, $op_method:ident) => {
        impl<'a, M: $crate::metric::Metric> $imp<&'a Multivector<M>> for Multivector<M> {
            #[inline]
            fn $method(&mut self, rhs: &'a Multivector<M>) {
                *self = $op::$op_method(&*self, rhs);
            }
        }

        impl<M: $crate::metric::Metric> $imp<Multivector<M>> for Multivector<M> {
            #[inline]
            fn $method(&mut self, rhs: Multivector<M>) {
                *self = $op::$op_method(&*self, &rhs);
            }
        }
    };
}

/// Unit basis blade constructors for an algebra module that defines `Mv`.
macro_rules! unit_blades {
    ($($name:ident = $index:expr),* $(,)?) => {
        $(
            #[doc = concat!("Unit blade `", stringify!($name), "`.")]
            #[inline]
            pub fn $name() -> Mv {
                Mv::from_canonical(&[$index], &[1.0])
            }
        )*
    };
}

/// Aliases for non-canonical orderings of a unit blade, e.g. `e21 = -e12`.
macro_rules! permuted_blades {
    () => {};
    ($name:ident = -$source:ident $(, $($rest:tt)*)?) => {
        #[doc = concat!("`", stringify!($name), " = -", stringify!($source), "`.")]
        #[inline]
        pub fn $name() -> Mv {
            -$source()
        }
        permuted_blades!($($($rest)*)?);
    };
    ($name:ident = $source:ident $(, $($rest:tt)*)?) => {
        #[doc = concat!("`", stringify!($name), " = ", stringify!($source), "`.")]
        #[inline]
        pub fn $name() -> Mv {
            $source()
        }
        permuted_blades!($($($rest)*)?);
    };
}
