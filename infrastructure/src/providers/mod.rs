//! Model-inference provider adapters

pub mod groq;
