pub fn normalize_inline(text: &str) -> String {
    let trimmed = text.trim();
    let mut out = String::with_capacity(trimmed.len());
    let mut run = String::new();

    for ch in trimmed.chars() {
        if ch.is_whitespace() {
            run.push(ch);
            continue;
        }

        flush_whitespace_run(&mut out, &mut run);
        out.push(ch);
    }
    flush_whitespace_run(&mut out, &mut run);

    out
}

fn flush_whitespace_run(out: &mut String, run: &mut String) {
    if run.is_empty() {
        return;
    }

    if run.chars().count() >= 2 || run.contains('\n') {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
}

#[allow(dead_code)]
pub fn normalize_block(text: &str) -> String {
    let segments = text.split('\n').collect::<Vec<&str>>();
    let last = segments.len().saturating_sub(1);

    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| {
            let collapsed = collapse_horizontal(segment);
            let mut line = collapsed.as_str();
            if index > 0 {
                line = line.trim_start_matches(' ');
            }
            if index < last {
                line = line.trim_end_matches(' ');
            }
            line.to_string()
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn collapse_horizontal(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut in_run = false;

    for ch in segment.chars() {
        if ch == ' ' || ch == '\t' {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
            continue;
        }

        in_run = false;
        out.push(ch);
    }

    out
}

pub fn first_number(text: &str) -> Option<String> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let digits = text[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect::<String>();

    Some(digits)
}
