#[cfg(target_arch = "wasm32")]
fn main() {
    periodic::web::start();
}

/// Prints the grid as text, from the dataset file given as the first argument or the
/// bundled table.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use periodic::{ElementTable, GRID_COLS, SlotContent, build_grid, builtin_table};

    let table = match std::env::args().nth(1) {
        Some(path) => ElementTable::from_file(path),
        None => builtin_table(),
    };

    let table = match table {
        Ok(table) => table,
        Err(error) => {
            eprintln!("{error}");
            return std::process::ExitCode::FAILURE;
        }
    };

    for row in build_grid(&table).chunks(usize::from(GRID_COLS)) {
        let line: Vec<String> = row
            .iter()
            .map(|slot| match &slot.content {
                SlotContent::Element(cell) => format!("{:<3}", cell.symbol),
                SlotContent::Placeholder(Some(marker)) => format!("{:<3}", marker.symbol()),
                SlotContent::Placeholder(None) => "   ".to_string(),
            })
            .collect();
        println!("{}", line.join("").trim_end());
    }

    std::process::ExitCode::SUCCESS
}
