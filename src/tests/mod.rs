//! Tests exercising the bound schema end to end.

mod enums;
