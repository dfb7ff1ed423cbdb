//! Error conversions kept on the infrastructure side.

mod conversions;
