use crate::domain::model::{Node, Token};
use crate::utils::error::{Result, TokenError};
use std::cmp::Ordering;

/// Turns the artboard's rows into tokens.
///
/// The first child is treated as the header row and skipped. Every other row
/// must hold at least two TEXT nodes; ordered by their x position, the first
/// is the alias and the second the value. Extra text nodes are ignored.
pub fn extract_tokens(artboard: &Node) -> Result<Vec<Token>> {
    artboard
        .children
        .iter()
        .skip(1)
        .enumerate()
        .map(|(index, row)| extract_row(index + 1, row))
        .collect()
}

/// `row` is the 1-based data row number, used in error reports.
pub fn extract_row(row: usize, node: &Node) -> Result<Token> {
    let mut texts = node
        .children
        .iter()
        .filter(|child| child.is_text())
        .map(|child| {
            child
                .absolute_bounding_box
                .map(|bounds| (bounds.x, child))
                .ok_or(TokenError::MissingBoundingBox { row })
        })
        .collect::<Result<Vec<_>>>()?;

    if texts.len() < 2 {
        return Err(TokenError::RowMissingTextNodes {
            row,
            found: texts.len(),
        });
    }

    // stable: equal x (including 0.0 vs -0.0) keeps document order
    texts.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let alias = cell_text(row, texts[0].1)?;
    let value = cell_text(row, texts[1].1)?;
    tracing::trace!("Row {}: {} = {}", row, alias, value);

    Ok(Token { alias, value })
}

/// Trimmed characters of a text node. A byte order mark counts as whitespace.
fn cell_text(row: usize, node: &Node) -> Result<String> {
    node.characters
        .as_deref()
        .map(|text| {
            text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_string()
        })
        .ok_or(TokenError::MissingCharacters { row })
}
