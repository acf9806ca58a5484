//! Normalização de cabeçalhos de planilha
//!
//! Os cabeçalhos são editados à mão: a ordem muda, aparecem acentos,
//! maiúsculas, hífens e espaços sobrando. A comparação é sempre feita sobre a
//! forma canônica produzida aqui.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Forma canônica de um cabeçalho usando NFKD
///
/// - minúsculas, sem acentos
/// - cada sequência de espaços, `-` ou `_` vira um único `_`
/// - qualquer outro caractere fora de `[a-z0-9_]` é descartado
/// - sem `_` nas pontas
///
/// # Exemplos
/// ```
/// use crm_anotacoes_sync::utils::normalization::normalize_header;
///
/// assert_eq!(normalize_header("Follow Up"), "follow_up");
/// assert_eq!(normalize_header("FOLLOW-UP "), "follow_up");
/// assert_eq!(normalize_header("Follow-up (anotação)"), "follow_up_anotacao");
/// ```
pub fn normalize_header(input: &str) -> String {
    let folded = input
        .nfkd() // Decomposição completa
        .filter(|c| !is_combining_mark(*c)) // Remove acentos
        .collect::<String>()
        .to_lowercase();

    let mut out = String::with_capacity(folded.len());
    let mut pending_separator = false;

    for c in folded.chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(c);
        }
    }

    out
}
