//! The fixed waste-category enumeration shared by the map and form pages.

use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Category codes and their display labels, in display order.
pub const CATEGORIES: [(i32, &str); 6] = [
    (1, "Acúmulo de Pneu"),
    (2, "Descarte de Eletroeletrônicos"),
    (3, "Descartes de Móveis e Colchões"),
    (4, "Descarte de Resíduos Hospitalares"),
    (5, "Pontos Viciados de Resíduos Comum"),
    (6, "Descarte de Entulhos de Obras"),
];

pub fn all_codes() -> Vec<i32> {
    CATEGORIES.iter().map(|(code, _)| *code).collect()
}

/// Display label for a code, `Pin {code}` when the code is not enumerated.
pub fn label(code: i32) -> String {
    CATEGORIES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("Pin {}", code))
}

/// Icon file for a code, relative to the assets root.
pub fn icon_path(code: i32) -> String {
    format!("img/pin_{}.png", code)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub code: i32,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub code: i32,
    pub label: String,
    pub icon_url: String,
}

/// Multi-select options for the sidebar, marking the codes in `selection`.
pub fn filter_options(selection: &[i32]) -> Vec<FilterOption> {
    CATEGORIES
        .iter()
        .map(|(code, label)| FilterOption {
            code: *code,
            text: format!("Pin {} - {}", code, label),
            selected: selection.contains(code),
        })
        .collect()
}

pub fn legend(assets_prefix: &str) -> Vec<LegendEntry> {
    CATEGORIES
        .iter()
        .map(|(code, label)| LegendEntry {
            code: *code,
            label: (*label).to_string(),
            icon_url: format!("{}/{}", assets_prefix, icon_path(*code)),
        })
        .collect()
}

/// Turn the raw `categories` query value into a list of codes.
///
/// Absent means the default selection (every enumerated code); present but
/// blank means nothing is selected.
pub fn parse_selection(raw: Option<&str>) -> AppResult<Vec<i32>> {
    let Some(raw) = raw else {
        return Ok(all_codes());
    };

    let mut codes = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let code = token
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Código de categoria inválido: {}", token)))?;
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    Ok(codes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_fallback() {
        assert_eq!(label(1), "Acúmulo de Pneu");
        assert_eq!(label(6), "Descarte de Entulhos de Obras");
        assert_eq!(label(9), "Pin 9");
    }

    #[test]
    fn test_icon_path() {
        assert_eq!(icon_path(3), "img/pin_3.png");
    }

    #[test]
    fn test_parse_selection_defaults_to_all() {
        assert_eq!(parse_selection(None).unwrap(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_selection_blank_selects_nothing() {
        assert!(parse_selection(Some("")).unwrap().is_empty());
        assert!(parse_selection(Some(" , ")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_selection_list() {
        assert_eq!(parse_selection(Some("2, 5,2,9")).unwrap(), vec![2, 5, 9]);
        assert!(parse_selection(Some("1,x")).is_err());
    }

    #[test]
    fn test_filter_options_marks_selection() {
        let options = filter_options(&[2, 4]);
        assert_eq!(options.len(), 6);
        assert_eq!(options[0].text, "Pin 1 - Acúmulo de Pneu");
        let selected: Vec<i32> = options.iter().filter(|o| o.selected).map(|o| o.code).collect();
        assert_eq!(selected, vec![2, 4]);
    }

    #[test]
    fn test_legend_icon_urls() {
        let legend = legend("/assets");
        assert_eq!(legend[4].icon_url, "/assets/img/pin_5.png");
    }
}
