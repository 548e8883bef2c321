pub mod processor;
pub mod resistance;
pub mod soc;
pub mod soh;
