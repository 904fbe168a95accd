use crate::record::ClassificationResult;

pub const SEPARATOR: &str = "------------------------------";

/// Lines of the end-of-run report: total first, then one line per category.
pub fn summary_lines(result: &ClassificationResult) -> Vec<String> {
    let header = [
        SEPARATOR.to_string(),
        "Organization complete!".to_string(),
        format!("Total files processed: {}", result.total()),
        "Files by extension:".to_string(),
    ];

    let per_category = result
        .iter()
        .map(|(category, count)| format!("  - {}: {} {}", category, count, plural(count)));

    header
        .into_iter()
        .chain(per_category)
        .chain(std::iter::once(SEPARATOR.to_string()))
        .collect()
}

fn plural(count: usize) -> &'static str {
    match count {
        1 => "file",
        _ => "files",
    }
}
