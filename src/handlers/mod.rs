// Handlers HTTP
pub mod health;
pub mod sync_anotacoes;

pub use health::*;
pub use sync_anotacoes::*;
