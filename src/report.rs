use crate::enrich::EnrichedRecord;
use crate::lang::Lang;

const SOURCE_LANG: &str = "en";

/// Renders the console report: one `---`-separated block per record, examples numbered from 1.
pub fn format_report(records: &[EnrichedRecord], target: &Lang) -> String {
    let mut out = String::new();

    for record in records {
        out.push_str("---\n");
        out.push_str(&format!("Word: {}\n", single_line(&record.word)));
        out.push_str(&format!("Translation: {}\n", single_line(&record.translation)));
        push_numbered(&mut out, SOURCE_LANG, &record.examples_source);
        push_numbered(&mut out, target.code(), &record.examples_target);
    }

    out
}

fn push_numbered(out: &mut String, lang: &str, sentences: &[String]) {
    out.push_str(&format!("Examples ({lang}):\n"));
    for (i, sentence) in sentences.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, single_line(sentence)));
    }
}

/// Replaces line breaks so each numbered item stays on one line.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}
