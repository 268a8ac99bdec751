//! Interactive request-line console.
//!
//! Reads raw request lines ("GET /toasters/42 HTTP/1.1") from stdin, one per
//! line, resolves each against the route table, and prints the outcome.

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::router::{RouteMatch, RouteTable, resolve};

pub async fn run(table: &RouteTable) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match resolve(table.routes(), &line) {
            Ok(Some(found)) => println!("{}", format_match(&found)),
            Ok(None) => println!("no match"),
            Err(e) => {
                tracing::warn!(line = %line, "Malformed request line: {:?}", e);
            }
        }
    }

    Ok(())
}

fn format_match(found: &RouteMatch) -> String {
    if found.params.is_empty() {
        return format!("{} {}", found.method, found.path);
    }

    let mut params: Vec<String> = found
        .params
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();
    params.sort();

    format!("{} {} [{}]", found.method, found.path, params.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn format_match_sorts_params() {
        let mut params = HashMap::new();
        params.insert("slot_id".to_string(), "3".to_string());
        params.insert("toaster_id".to_string(), "42".to_string());

        let found = RouteMatch {
            method: "GET".to_string(),
            path: "/toasters/42/slots/3".to_string(),
            params,
        };

        assert_eq!(
            format_match(&found),
            "GET /toasters/42/slots/3 [slot_id=3, toaster_id=42]"
        );
    }
}
