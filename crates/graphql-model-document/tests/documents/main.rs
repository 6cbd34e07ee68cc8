#![allow(unused_crate_dependencies)]

mod filter;
mod model_id;
mod mutations;
