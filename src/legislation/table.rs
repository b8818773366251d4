use super::markers::is_tabular_marker;
use super::node::MarkupNode;
use super::text::normalize_inline;
use crate::model::Table;

const TABLE_REGIONS: [&str; 3] = ["thead", "tbody", "tfoot"];

pub fn extract_table<N: MarkupNode>(node: &N) -> Option<Table> {
    if !is_tabular_marker(node) {
        return None;
    }

    let mut rows = Vec::<Vec<String>>::new();
    for region_name in TABLE_REGIONS {
        if let Some(region) = node.find(|candidate| candidate.name() == Some(region_name)) {
            collect_region_rows(&region, &mut rows);
        }
    }

    Some(Table {
        row_count: rows.len(),
        col_count: rows.first().map(Vec::len).unwrap_or(0),
        name: node.attribute("id").map(ToOwned::to_owned),
        rows,
    })
}

fn collect_region_rows<N: MarkupNode>(region: &N, rows: &mut Vec<Vec<String>>) {
    for row_node in region.children() {
        if row_node.name() != Some("tr") {
            continue;
        }

        let cells = row_node
            .children()
            .iter()
            .map(|cell| normalize_inline(&cell.text()))
            .filter(|text| !text.is_empty())
            .collect::<Vec<String>>();

        if !cells.is_empty() {
            rows.push(cells);
        }
    }
}
