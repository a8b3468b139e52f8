//! The `exambank stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use exambank_core::bank::{BankSummary, QuestionFilter};
use exambank_core::config::load_config_from;
use exambank_core::model::ExamQuestion;
use exambank_core::parser::load_document;

const QUESTION_PREVIEW: usize = 60;

pub fn execute(
    document_path: PathBuf,
    filter: QuestionFilter,
    json: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let bank = load_document(&document_path, &config.record_builder())?;

    let summarize = filter == QuestionFilter::default();

    if json {
        let out = if summarize {
            serde_json::to_string_pretty(&bank.summary())?
        } else {
            serde_json::to_string_pretty(&bank.filter(&filter))?
        };
        println!("{out}");
    } else if summarize {
        print_summary(&bank.summary());
    } else {
        let hits = bank.filter(&filter);
        print_questions(&hits);
        println!("{} of {} questions matched.", hits.len(), bank.len());
    }

    Ok(())
}

fn print_summary(summary: &BankSummary) {
    println!("{} questions", summary.total);

    let sections: [(&str, Vec<(String, usize)>); 4] = [
        (
            "Level",
            summary
                .per_level
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        ),
        (
            "Topic",
            summary
                .per_topic
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        ),
        (
            "Difficulty",
            summary
                .per_difficulty
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        ),
        (
            "Type",
            summary
                .per_type
                .iter()
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        ),
    ];

    for (heading, rows) in sections {
        let mut table = Table::new();
        table.set_header(vec![heading, "Questions"]);
        for (key, count) in rows {
            table.add_row(vec![Cell::new(key), Cell::new(count)]);
        }
        println!("\n{table}");
    }
}

fn print_questions(questions: &[&ExamQuestion]) {
    let mut table = Table::new();
    table.set_header(vec!["Id", "Level", "Topic", "Difficulty", "Type", "Question"]);

    for q in questions {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(q.level),
            Cell::new(&q.topic),
            Cell::new(q.difficulty),
            Cell::new(&q.kind),
            Cell::new(preview(&q.question)),
        ]);
    }

    println!("{table}");
}

fn preview(text: &str) -> String {
    if text.chars().count() <= QUESTION_PREVIEW {
        text.to_string()
    } else {
        let cut: String = text.chars().take(QUESTION_PREVIEW - 3).collect();
        format!("{cut}...")
    }
}
