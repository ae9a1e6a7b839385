use ferrous_dig_domain::LookupResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Short,
    Json,
}

const HEADER: [&str; 6] = ["NAME", "TYPE", "CLASS", "TTL", "ADDRESS", "NAMESERVER"];

pub fn render(responses: &[LookupResponse], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(responses)),
        OutputFormat::Short => Ok(render_short(responses)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(responses)?),
    }
}

/// One aligned row per answer and per SOA authority, under a header.
/// Authorities show their SOA fields in the address column.
pub fn render_table(responses: &[LookupResponse]) -> String {
    let mut rows: Vec<[&str; 6]> = Vec::new();

    for response in responses {
        let Ok(result) = &response.outcome else {
            continue;
        };
        for answer in &result.answers {
            rows.push([
                answer.name.as_str(),
                answer.record_type.as_str(),
                answer.class.as_str(),
                answer.ttl.as_str(),
                answer.address.as_str(),
                answer.nameserver.as_str(),
            ]);
        }
        for authority in &result.authorities {
            rows.push([
                authority.name.as_str(),
                authority.record_type.as_str(),
                authority.class.as_str(),
                authority.ttl.as_str(),
                authority.mname.as_str(),
                authority.nameserver.as_str(),
            ]);
        }
    }

    if rows.is_empty() {
        return String::new();
    }

    let mut widths = HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&HEADER).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Addresses only, one per line.
pub fn render_short(responses: &[LookupResponse]) -> String {
    responses
        .iter()
        .filter_map(|response| response.outcome.as_ref().ok())
        .flat_map(|result| result.answers.iter())
        .map(|answer| format!("{}\n", answer.address))
        .collect()
}

/// `nameserver: error` lines for lookups that failed outright.
pub fn failures(responses: &[LookupResponse]) -> Vec<String> {
    responses
        .iter()
        .filter_map(|response| {
            response.outcome.as_ref().err().map(|e| {
                format!(
                    "{} ({} {}): {}",
                    response.nameserver,
                    response.question.name,
                    response.question.record_type,
                    e
                )
            })
        })
        .collect()
}
