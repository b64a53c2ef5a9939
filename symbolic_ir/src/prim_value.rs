use crate::{Error, Kind};

/// A concrete payload.  Integer arithmetic is modular within the
/// value's width, matching the semantics the solver assigns to
/// fixed-width bit-vectors.
#[derive(Clone, Copy, Debug)]
pub enum PrimValue {
    Bool(bool),

    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    F32(f32),
    F64(f64),
}

impl PrimValue {
    pub fn kind(&self) -> Kind {
        match self {
            PrimValue::Bool(_) => Kind::Bool,
            PrimValue::U8(_) => Kind::U8,
            PrimValue::U16(_) => Kind::U16,
            PrimValue::U32(_) => Kind::U32,
            PrimValue::U64(_) => Kind::U64,
            PrimValue::I8(_) => Kind::I8,
            PrimValue::I16(_) => Kind::I16,
            PrimValue::I32(_) => Kind::I32,
            PrimValue::I64(_) => Kind::I64,
            PrimValue::F32(_) => Kind::F32,
            PrimValue::F64(_) => Kind::F64,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            PrimValue::Bool(value) => Some(value),
            _ => None,
        }
    }

    fn binary_kind_error(
        op: &'static str,
        lhs: PrimValue,
        rhs: PrimValue,
    ) -> Error {
        let lhs = lhs.kind();
        let rhs = rhs.kind();
        if lhs == rhs {
            Error::UnsupportedOperandKind { op, kind: lhs }
        } else {
            Error::KindMismatch { lhs, rhs }
        }
    }
}

macro_rules! eval_wrapping_arith {
    ($name:ident, $op_name:literal, $int_method:ident, $float_op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (U8(a), U8(b)) => Ok(U8(a.$int_method(b))),
                (U16(a), U16(b)) => Ok(U16(a.$int_method(b))),
                (U32(a), U32(b)) => Ok(U32(a.$int_method(b))),
                (U64(a), U64(b)) => Ok(U64(a.$int_method(b))),
                (I8(a), I8(b)) => Ok(I8(a.$int_method(b))),
                (I16(a), I16(b)) => Ok(I16(a.$int_method(b))),
                (I32(a), I32(b)) => Ok(I32(a.$int_method(b))),
                (I64(a), I64(b)) => Ok(I64(a.$int_method(b))),
                (F32(a), F32(b)) => Ok(F32(a $float_op b)),
                (F64(a), F64(b)) => Ok(F64(a $float_op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

macro_rules! eval_wrapping_div {
    ($name:ident, $op_name:literal, $int_method:ident, $float_op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (U8(_), U8(0))
                | (U16(_), U16(0))
                | (U32(_), U32(0))
                | (U64(_), U64(0))
                | (I8(_), I8(0))
                | (I16(_), I16(0))
                | (I32(_), I32(0))
                | (I64(_), I64(0)) => Err(Error::DivisionByZero),
                (U8(a), U8(b)) => Ok(U8(a.$int_method(b))),
                (U16(a), U16(b)) => Ok(U16(a.$int_method(b))),
                (U32(a), U32(b)) => Ok(U32(a.$int_method(b))),
                (U64(a), U64(b)) => Ok(U64(a.$int_method(b))),
                (I8(a), I8(b)) => Ok(I8(a.$int_method(b))),
                (I16(a), I16(b)) => Ok(I16(a.$int_method(b))),
                (I32(a), I32(b)) => Ok(I32(a.$int_method(b))),
                (I64(a), I64(b)) => Ok(I64(a.$int_method(b))),
                (F32(a), F32(b)) => Ok(F32(a $float_op b)),
                (F64(a), F64(b)) => Ok(F64(a $float_op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

macro_rules! eval_bitwise {
    ($name:ident, $op_name:literal, $op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (U8(a), U8(b)) => Ok(U8(a $op b)),
                (U16(a), U16(b)) => Ok(U16(a $op b)),
                (U32(a), U32(b)) => Ok(U32(a $op b)),
                (U64(a), U64(b)) => Ok(U64(a $op b)),
                (I8(a), I8(b)) => Ok(I8(a $op b)),
                (I16(a), I16(b)) => Ok(I16(a $op b)),
                (I32(a), I32(b)) => Ok(I32(a $op b)),
                (I64(a), I64(b)) => Ok(I64(a $op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

macro_rules! eval_boolean {
    ($name:ident, $op_name:literal, $op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (Bool(a), Bool(b)) => Ok(Bool(a $op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

macro_rules! eval_equality {
    ($name:ident, $op_name:literal, $op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (Bool(a), Bool(b)) => Ok(Bool(a $op b)),
                (U8(a), U8(b)) => Ok(Bool(a $op b)),
                (U16(a), U16(b)) => Ok(Bool(a $op b)),
                (U32(a), U32(b)) => Ok(Bool(a $op b)),
                (U64(a), U64(b)) => Ok(Bool(a $op b)),
                (I8(a), I8(b)) => Ok(Bool(a $op b)),
                (I16(a), I16(b)) => Ok(Bool(a $op b)),
                (I32(a), I32(b)) => Ok(Bool(a $op b)),
                (I64(a), I64(b)) => Ok(Bool(a $op b)),
                // IEEE comparison semantics: the eager path computes
                // the *output* of a comparison, so NaN != NaN here.
                (F32(a), F32(b)) => Ok(Bool(a $op b)),
                (F64(a), F64(b)) => Ok(Bool(a $op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

macro_rules! eval_ordering {
    ($name:ident, $op_name:literal, $op:tt) => {
        pub fn $name(
            lhs: PrimValue,
            rhs: PrimValue,
        ) -> Result<PrimValue, Error> {
            use PrimValue::*;
            match (lhs, rhs) {
                (U8(a), U8(b)) => Ok(Bool(a $op b)),
                (U16(a), U16(b)) => Ok(Bool(a $op b)),
                (U32(a), U32(b)) => Ok(Bool(a $op b)),
                (U64(a), U64(b)) => Ok(Bool(a $op b)),
                (I8(a), I8(b)) => Ok(Bool(a $op b)),
                (I16(a), I16(b)) => Ok(Bool(a $op b)),
                (I32(a), I32(b)) => Ok(Bool(a $op b)),
                (I64(a), I64(b)) => Ok(Bool(a $op b)),
                (F32(a), F32(b)) => Ok(Bool(a $op b)),
                (F64(a), F64(b)) => Ok(Bool(a $op b)),
                (lhs, rhs) => {
                    Err(Self::binary_kind_error($op_name, lhs, rhs))
                }
            }
        }
    };
}

impl PrimValue {
    eval_wrapping_arith! {eval_add, "add", wrapping_add, +}
    eval_wrapping_arith! {eval_sub, "sub", wrapping_sub, -}
    eval_wrapping_arith! {eval_mul, "mul", wrapping_mul, *}
    eval_wrapping_div! {eval_div, "div", wrapping_div, /}
    eval_wrapping_div! {eval_mod, "mod", wrapping_rem, %}

    eval_bitwise! {eval_bit_and, "bit_and", &}
    eval_bitwise! {eval_bit_or, "bit_or", |}
    eval_bitwise! {eval_bit_xor, "bit_xor", ^}

    eval_boolean! {eval_and, "and", &&}
    eval_boolean! {eval_or, "or", ||}

    eval_equality! {eval_equal, "equal", ==}
    eval_equality! {eval_not_equal, "not_equal", !=}

    eval_ordering! {eval_less_than, "less_than", <}
    eval_ordering! {eval_greater_than, "greater_than", >}
    eval_ordering! {eval_less_than_or_equal, "less_than_or_equal", <=}
    eval_ordering! {eval_greater_than_or_equal, "greater_than_or_equal", >=}

    /// Logical negation for `Bool`, bitwise complement for integers.
    pub fn eval_not(value: PrimValue) -> Result<PrimValue, Error> {
        use PrimValue::*;
        match value {
            Bool(a) => Ok(Bool(!a)),
            U8(a) => Ok(U8(!a)),
            U16(a) => Ok(U16(!a)),
            U32(a) => Ok(U32(!a)),
            U64(a) => Ok(U64(!a)),
            I8(a) => Ok(I8(!a)),
            I16(a) => Ok(I16(!a)),
            I32(a) => Ok(I32(!a)),
            I64(a) => Ok(I64(!a)),
            value => Err(Error::UnsupportedOperandKind {
                op: "not",
                kind: value.kind(),
            }),
        }
    }
}

impl std::cmp::PartialEq for PrimValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Floating-point payloads are compared by their bit
            // representations.  A `PrimValue` stored in the graph is
            // an *input* to later computation, and two inputs are
            // interchangeable exactly when their bits agree, even for
            // NaN.  IEEE comparison is used only when computing the
            // output of a comparison operation.
            (Self::F32(lhs), Self::F32(rhs)) => {
                lhs.to_bits() == rhs.to_bits()
            }
            (Self::F64(lhs), Self::F64(rhs)) => {
                lhs.to_bits() == rhs.to_bits()
            }

            (Self::Bool(lhs), Self::Bool(rhs)) => lhs == rhs,
            (Self::U8(lhs), Self::U8(rhs)) => lhs == rhs,
            (Self::U16(lhs), Self::U16(rhs)) => lhs == rhs,
            (Self::U32(lhs), Self::U32(rhs)) => lhs == rhs,
            (Self::U64(lhs), Self::U64(rhs)) => lhs == rhs,
            (Self::I8(lhs), Self::I8(rhs)) => lhs == rhs,
            (Self::I16(lhs), Self::I16(rhs)) => lhs == rhs,
            (Self::I32(lhs), Self::I32(rhs)) => lhs == rhs,
            (Self::I64(lhs), Self::I64(rhs)) => lhs == rhs,
            _ => false,
        }
    }
}

impl std::cmp::Eq for PrimValue {}

impl std::hash::Hash for PrimValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            // Hashed by bit representation, consistent with the
            // PartialEq implementation above.
            PrimValue::F32(val) => val.to_bits().hash(state),
            PrimValue::F64(val) => val.to_bits().hash(state),

            PrimValue::Bool(val) => val.hash(state),
            PrimValue::U8(val) => val.hash(state),
            PrimValue::U16(val) => val.hash(state),
            PrimValue::U32(val) => val.hash(state),
            PrimValue::U64(val) => val.hash(state),
            PrimValue::I8(val) => val.hash(state),
            PrimValue::I16(val) => val.hash(state),
            PrimValue::I32(val) => val.hash(state),
            PrimValue::I64(val) => val.hash(state),
        }
    }
}

impl std::fmt::Display for PrimValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimValue::Bool(val) => write!(f, "{val}"),
            PrimValue::U8(val) => write!(f, "{val}"),
            PrimValue::U16(val) => write!(f, "{val}"),
            PrimValue::U32(val) => write!(f, "{val}"),
            PrimValue::U64(val) => write!(f, "{val}"),
            PrimValue::I8(val) => write!(f, "{val}"),
            PrimValue::I16(val) => write!(f, "{val}"),
            PrimValue::I32(val) => write!(f, "{val}"),
            PrimValue::I64(val) => write!(f, "{val}"),
            PrimValue::F32(val) => write!(f, "{val}"),
            PrimValue::F64(val) => write!(f, "{val}"),
        }
    }
}

macro_rules! prim_value_from {
    ($prim:ty, $variant:ident) => {
        impl From<$prim> for PrimValue {
            fn from(value: $prim) -> Self {
                Self::$variant(value)
            }
        }
    };
}
prim_value_from!(bool, Bool);
prim_value_from!(u8, U8);
prim_value_from!(u16, U16);
prim_value_from!(u32, U32);
prim_value_from!(u64, U64);
prim_value_from!(i8, I8);
prim_value_from!(i16, I16);
prim_value_from!(i32, I32);
prim_value_from!(i64, I64);
prim_value_from!(f32, F32);
prim_value_from!(f64, F64);
