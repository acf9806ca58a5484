//! Notação A1: letras de coluna e prefixo de aba

/// Converte um índice de coluna 1-based em letras (A, B, ..., Z, AA, AB, ...).
///
/// Base 26 bijetiva (sem dígito zero). `0` é tratado como `1` ("A").
///
/// ```
/// use sheets::a1::column_letter;
///
/// assert_eq!(column_letter(1), "A");
/// assert_eq!(column_letter(27), "AA");
/// ```
pub fn column_letter(column: usize) -> String {
    let mut n = column.max(1);
    let mut letters = Vec::new();

    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }

    letters.iter().rev().collect()
}

/// Prefixo `'Nome da aba'!` (aspas simples internas duplicadas).
/// Vazio quando não há aba ou o nome está em branco.
pub fn sheet_prefix(sheet_name: Option<&str>) -> String {
    match sheet_name.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => format!("'{}'!", name.replace('\'', "''")),
        None => String::new(),
    }
}

/// Referência de uma célula, ex.: `'Leads'!C12`
pub fn cell_ref(sheet_name: Option<&str>, column: usize, row: usize) -> String {
    format!("{}{}{}", sheet_prefix(sheet_name), column_letter(column), row)
}

/// Intervalo qualificado pela aba, ex.: `'Leads'!A1:ZZ`
pub fn qualified_range(sheet_name: Option<&str>, range: &str) -> String {
    format!("{}{}", sheet_prefix(sheet_name), range)
}
