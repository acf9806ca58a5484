//! Localiza as colunas do job pelo nome normalizado do cabeçalho

use crate::utils::{normalize_header, AppError, AppResult};

pub const DEAL_ID: &str = "deal_id";
pub const FOLLOW_UP: &str = "follow_up";
pub const FOLLOW_UP_ANOTACAO: &str = "follow_up_anotacao";

/// Índices (0-based) encontrados no cabeçalho
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SheetColumns {
    pub deal_id: Option<usize>,
    pub follow_up: Option<usize>,
    pub follow_up_anotacao: Option<usize>,
}

/// Colunas com as obrigatórias garantidas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredColumns {
    pub deal_id: usize,
    pub follow_up: usize,
    pub follow_up_anotacao: Option<usize>,
}

/// Percorre o cabeçalho uma vez; a primeira coluna (mais à esquerda) vence
pub fn resolve_columns<S: AsRef<str>>(header: &[S]) -> SheetColumns {
    let mut columns = SheetColumns::default();

    for (idx, raw) in header.iter().enumerate() {
        let slot = match normalize_header(raw.as_ref()).as_str() {
            DEAL_ID => &mut columns.deal_id,
            FOLLOW_UP => &mut columns.follow_up,
            FOLLOW_UP_ANOTACAO => &mut columns.follow_up_anotacao,
            _ => continue,
        };
        slot.get_or_insert(idx);
    }

    columns
}

impl SheetColumns {
    /// Exige `deal_id` e `follow_up`; `follow_up_anotacao` é opcional
    pub fn require(self) -> AppResult<RequiredColumns> {
        let deal_id = self
            .deal_id
            .ok_or_else(|| AppError::MissingColumn(DEAL_ID.to_string()))?;
        let follow_up = self
            .follow_up
            .ok_or_else(|| AppError::MissingColumn(FOLLOW_UP.to_string()))?;

        Ok(RequiredColumns {
            deal_id,
            follow_up,
            follow_up_anotacao: self.follow_up_anotacao,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_variants_resolve_to_same_column() {
        for follow_up in ["Follow Up", "follow_up", "FOLLOW-UP", "Fôllow Úp", " FOLLOW-UP "] {
            let header = ["Nome", "Deal ID", follow_up];
            let columns = resolve_columns(&header);
            assert_eq!(columns.follow_up, Some(2), "header {:?}", follow_up);
            assert_eq!(columns.deal_id, Some(1));
        }
    }

    #[test]
    fn test_any_order_and_optional_annotation_column() {
        let header = ["Follow-up Anotação", "Empresa", "follow up", "DEAL_ID"];
        let columns = resolve_columns(&header).require().unwrap();
        assert_eq!(columns.deal_id, 3);
        assert_eq!(columns.follow_up, 2);
        assert_eq!(columns.follow_up_anotacao, Some(0));

        let without = resolve_columns(&["deal_id", "follow_up"]).require().unwrap();
        assert_eq!(without.follow_up_anotacao, None);
    }

    #[test]
    fn test_first_match_wins() {
        let header = ["deal_id", "Follow Up", "FOLLOW_UP", "deal id"];
        let columns = resolve_columns(&header);
        assert_eq!(columns.deal_id, Some(0));
        assert_eq!(columns.follow_up, Some(1));
    }

    #[test]
    fn test_missing_deal_id_fails() {
        let err = resolve_columns(&["Nome", "follow_up"]).require().unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(ref c) if c == DEAL_ID));
    }

    #[test]
    fn test_missing_follow_up_fails() {
        let err = resolve_columns(&["deal_id", "follow_up_anotacao"]).require().unwrap_err();
        assert!(matches!(err, AppError::MissingColumn(ref c) if c == FOLLOW_UP));
    }

    #[test]
    fn test_empty_header() {
        let header: Vec<String> = Vec::new();
        assert_eq!(resolve_columns(&header), SheetColumns::default());
    }
}
