//! Declarative macros for binding schema enumeration types.

#[macro_use]
mod enums;
