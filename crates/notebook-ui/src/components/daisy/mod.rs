//! DaisyUI-inspired component wrappers organised with Atomic Design layers.

pub(crate) mod foundations;

pub(crate) mod atoms;
pub(crate) mod molecules;

pub(crate) use atoms::*;
pub(crate) use foundations::*;
pub(crate) use molecules::*;
