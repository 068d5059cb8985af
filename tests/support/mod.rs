#![allow(dead_code)]

pub mod files;
pub mod services;
