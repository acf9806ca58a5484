//! Reparo de texto UTF-8 decodificado como Latin-1 ("AÃ§Ã£o" → "Ação")

/// Caractere que toda sequência corrompida de acentos latinos contém
const MARKER: char = 'Ã';

/// Byte usado para code points que não cabem em Latin-1.
/// Nunca faz parte de uma sequência multibyte válida, então força o descarte.
const PLACEHOLDER: u8 = 0xFF;

/// Desfaz a dupla codificação quando é seguro.
///
/// Sem o marcador o texto volta intacto. Com o marcador, cada caractere é
/// tratado como um byte e o resultado é decodificado como UTF-8; se a
/// decodificação falhar o texto original é devolvido. `None` vira `""`.
pub fn repair_mojibake(input: Option<&str>) -> String {
    let Some(text) = input else {
        return String::new();
    };

    if !text.contains(MARKER) {
        return text.to_string();
    }

    let bytes: Vec<u8> = text
        .chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(PLACEHOLDER))
        .collect();

    match String::from_utf8(bytes) {
        Ok(repaired) => repaired,
        Err(_) => text.to_string(),
    }
}
