//! `domurl decode` / `domurl encode`.

use domurl_core::codec;

pub fn run_decode(text: &str) {
    println!("{}", codec::decode(text));
}

pub fn run_encode(text: &str) {
    println!("{}", codec::encode(text));
}
