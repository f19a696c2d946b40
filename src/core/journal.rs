use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use std::fs;
use std::io::ErrorKind;

/// Colour of the operation column, by operation name.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" => Colour::Green,
        "update" => Colour::Yellow,
        _ => Colour::White,
    }
}

pub struct JournalLogic;

impl JournalLogic {
    pub fn print_journal(cfg: &Config) -> AppResult<()> {
        let raw = match fs::read_to_string(&cfg.journal_file) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info("Journal is empty.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        for line in raw.lines() {
            // date <TAB> operation <TAB> target <TAB> revision <TAB> message
            let mut parts = line.splitn(5, '\t');
            let (Some(raw_date), Some(operation), Some(target), Some(revision), Some(message)) = (
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
                parts.next(),
            ) else {
                continue;
            };

            let date = chrono::DateTime::parse_from_rfc3339(raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| raw_date.to_string());

            let op_target = if target.is_empty() {
                operation.to_string()
            } else {
                format!("{operation} ({target})")
            };

            entries.push((
                date,
                operation.to_string(),
                op_target,
                revision.to_string(),
                message.to_string(),
            ));
        }

        if entries.is_empty() {
            info("Journal is empty.");
            return Ok(());
        }

        let n_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|(date, ..)| date.len()).max().unwrap();
        let op_w = entries
            .iter()
            .map(|(_, _, op_target, ..)| op_target.len())
            .max()
            .unwrap();

        println!("📜 Update journal:\n");

        for (n, (date, operation, op_target, revision, message)) in entries.iter().enumerate() {
            let color = color_for_operation(operation);

            // Colour only the operation word; padding is computed on the raw
            // text so ANSI codes never skew the column width.
            let colored = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };
            let padding = " ".repeat(op_w - op_target.len());

            println!(
                "{:>n_w$}: {:<date_w$} | {}{} [{}] => {}",
                n + 1,
                date,
                colored,
                padding,
                revision,
                message,
                n_w = n_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
