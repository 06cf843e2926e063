use std::env;
use std::fs;
use std::process::ExitCode;

use hornsolve::Engine;

/// Batch driver (spec.md §6): reads `input.txt` (or a path given as the
/// first CLI argument), tells the engine every KB sentence, asks every
/// query, and writes one `TRUE`/`FALSE` line per query to `output.txt`.
fn main() -> ExitCode {
    let path = env::args().nth(1).unwrap_or_else(|| "input.txt".to_string());

    let input = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("{path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut lines = input.lines();
    let mut engine = Engine::new();

    let Some(query_count) = read_count(&mut lines) else {
        eprintln!("{path}: missing or malformed query count");
        return ExitCode::FAILURE;
    };
    let queries: Vec<&str> = (0..query_count).map(|_| lines.next().unwrap_or("")).collect();

    let Some(kb_count) = read_count(&mut lines) else {
        eprintln!("{path}: missing or malformed knowledge-base count");
        return ExitCode::FAILURE;
    };

    for i in 0..kb_count {
        let sentence = lines.next().unwrap_or("");
        // A KB sentence that fails to parse contributes no clauses; it
        // does not abort the batch (spec.md §6, §7).
        if let Err(err) = engine.tell(sentence) {
            eprintln!("KB sentence {}: {err}", i + 1);
        }
    }

    let mut verdicts = Vec::with_capacity(queries.len());
    for (i, query) in queries.iter().enumerate() {
        let verdict = match engine.ask(query) {
            Ok(true) => "TRUE",
            Ok(false) => "FALSE",
            Err(err) => {
                // A query that fails to parse is reported and counted
                // as FALSE so the output still has exactly Q lines
                // (spec.md §6).
                eprintln!("query {}: {err}", i + 1);
                "FALSE"
            }
        };
        verdicts.push(verdict);
    }

    let mut output = verdicts.join("\n");
    if !verdicts.is_empty() {
        output.push('\n');
    }

    if let Err(err) = fs::write("output.txt", output) {
        eprintln!("cannot write output.txt: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn read_count<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Option<usize> {
    lines.next()?.trim().parse().ok()
}
