use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header. Cells beyond the header count are dropped.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(String::len)
                .fold(h.len(), usize::max)
        })
        .collect();

    let mut out = render_row(headers.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&render_row(rule.iter().map(String::as_str), &widths));
    for row in rows {
        out.push_str(&render_row(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    format!("{}\n", line.join("  ").trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_pad_to_widest_cell() {
        let rows = vec![
            vec!["2".to_string(), "100".to_string()],
            vec!["3".to_string(), "116.66666666666667".to_string()],
        ];
        let table = render_table(&["ROW", "KG"], &rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ROW  KG");
        assert_eq!(lines[1], "---  ------------------");
        assert_eq!(lines[2], "2    100");
        assert_eq!(lines[3], "3    116.66666666666667");
    }

    #[test]
    fn empty_rows_render_header_only() {
        let table = render_table(&["ROW", "KG"], &[]);
        assert_eq!(table.lines().count(), 2);
    }
}
