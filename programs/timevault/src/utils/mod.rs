pub mod admission;
pub mod fee;
pub mod release;
