//! HTML table extraction
//!
//! Turns page markup into `Table`s:
//! - `<thead>` rows (or leading all-`<th>` rows) become headers
//! - one header row gives flat columns, two or more give (group, sub) pairs
//! - `colspan` and `rowspan` are expanded so every row lines up
//! - blank header cells get `Unnamed: ...` placeholder labels

use crate::table::{ColumnName, Table};
use scraper::{ElementRef, Html, Selector};

/// Largest `colspan` honoured, as in browsers
const MAX_COLSPAN: usize = 1000;

/// Largest `rowspan` honoured, as in browsers
const MAX_ROWSPAN: usize = 65534;

/// One `<th>`/`<td>` with its span attributes
struct Cell {
    text: String,
    header: bool,
    colspan: usize,
    rowspan: usize,
}

/// Parses every `<table>` in the document, in document order
///
/// # Example
///
/// ```
/// use fantasydata_scraper::table::parse_tables;
///
/// let html = r#"<table><tr><th>Name</th></tr><tr><td>Allen</td></tr></table>"#;
/// let tables = parse_tables(html);
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].row_count(), 1);
/// ```
pub fn parse_tables(html: &str) -> Vec<Table> {
    let document = Html::parse_document(html);
    let (Ok(table_selector), Ok(row_selector), Ok(cell_selector)) = (
        Selector::parse("table"),
        Selector::parse("tr"),
        Selector::parse("th, td"),
    ) else {
        return Vec::new();
    };

    document
        .select(&table_selector)
        .map(|table| parse_table(table, &row_selector, &cell_selector))
        .collect()
}

/// Returns the first table in the document, or an empty table if there is none
pub fn first_table(html: &str) -> Table {
    parse_tables(html).into_iter().next().unwrap_or_default()
}

fn parse_table(
    table: ElementRef<'_>,
    row_selector: &Selector,
    cell_selector: &Selector,
) -> Table {
    let mut head_rows = Vec::new();
    let mut body_rows = Vec::new();

    for row in table.select(row_selector) {
        let cells: Vec<Cell> = row.select(cell_selector).map(read_cell).collect();
        if cells.is_empty() {
            continue;
        }

        let in_thead = row
            .parent()
            .and_then(|p| p.value().as_element().map(|e| e.name() == "thead"))
            .unwrap_or(false);
        let all_header = cells.iter().all(|c| c.header);

        // Without a <thead>, leading rows made only of <th> are the header
        if in_thead || (body_rows.is_empty() && all_header) {
            head_rows.push(cells);
        } else {
            body_rows.push(cells);
        }
    }

    let head = expand_spans(head_rows);
    let body = expand_spans(body_rows);

    let width = head
        .iter()
        .chain(body.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    Table::new(build_columns(&head, width), body)
}

fn read_cell(cell: ElementRef<'_>) -> Cell {
    let span = |name: &str, max: usize| {
        cell.value()
            .attr(name)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .map_or(1, |n| n.min(max))
    };

    Cell {
        text: collapse_whitespace(&cell.text().collect::<Vec<_>>().join(" ")),
        header: cell.value().name() == "th",
        colspan: span("colspan", MAX_COLSPAN),
        rowspan: span("rowspan", MAX_ROWSPAN),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Lays cells out on a grid, repeating spanned cells into every slot they cover
fn expand_spans(rows: Vec<Vec<Cell>>) -> Vec<Vec<String>> {
    // Column index -> (text, rows still covered)
    let mut carried: Vec<Option<(String, usize)>> = Vec::new();
    let mut grid = Vec::with_capacity(rows.len());

    for cells in rows {
        let mut out: Vec<String> = Vec::new();
        let mut cells = cells.into_iter();

        loop {
            if let Some(slot) = carried.get_mut(out.len()) {
                if let Some((text, remaining)) = slot.take() {
                    out.push(text.clone());
                    if remaining > 1 {
                        *slot = Some((text, remaining - 1));
                    }
                    continue;
                }
            }

            let Some(cell) = cells.next() else { break };
            for _ in 0..cell.colspan {
                let col = out.len();
                if cell.rowspan > 1 {
                    if carried.len() <= col {
                        carried.resize(col + 1, None);
                    }
                    carried[col] = Some((cell.text.clone(), cell.rowspan - 1));
                }
                out.push(cell.text.clone());
            }
        }

        grid.push(out);
    }

    grid
}

fn label(row: &[String], index: usize) -> Option<String> {
    row.get(index).filter(|text| !text.is_empty()).cloned()
}

fn build_columns(head: &[Vec<String>], width: usize) -> Vec<ColumnName> {
    match head {
        [] => (0..width).map(|i| ColumnName::Flat(i.to_string())).collect(),
        [only] => (0..width)
            .map(|i| {
                ColumnName::Flat(label(only, i).unwrap_or_else(|| format!("Unnamed: {}", i)))
            })
            .collect(),
        [first, .., last] => (0..width)
            .map(|i| ColumnName::Grouped {
                group: label(first, i).unwrap_or_else(|| format!("Unnamed: {}_level_0", i)),
                sub: label(last, i).unwrap_or_else(|| format!("Unnamed: {}_level_1", i)),
            })
            .collect(),
    }
}
