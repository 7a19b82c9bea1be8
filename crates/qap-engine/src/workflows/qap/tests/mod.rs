mod common;
mod service_flow;
