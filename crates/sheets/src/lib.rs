//! Cliente mínimo da API de valores do Google Sheets
//!
//! Cobre o que o job de sincronização precisa: ler um intervalo inteiro como
//! grade de texto e aplicar várias escritas pontuais em um único
//! `values:batchUpdate`. Também expõe os utilitários de notação A1.

pub mod a1;
pub mod client;
pub mod error;
pub mod values;

pub use client::{SheetsClient, DEFAULT_BASE_URL};
pub use error::{Result, SheetsError};
pub use values::{ValueInputOption, ValueRange};
