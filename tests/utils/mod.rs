#![allow(dead_code)]

pub mod factories;
pub mod fakes;
pub mod stub_server;
