//! Small helpers shared by the report generators and executors

pub mod string;
