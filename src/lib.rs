pub mod adb;
pub mod commands;
pub mod icons;
pub mod package;
pub mod runtime;
