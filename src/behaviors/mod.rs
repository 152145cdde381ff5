//! The page behaviors, one module per hook.

pub mod caps_lock;
pub mod copy_number;
pub mod flash;
pub mod password_gen;
pub mod password_toggle;
