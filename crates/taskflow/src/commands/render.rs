use std::io::{self, Write};

use taskflow_app::EmptyState;
use taskflow_core::{Task, TaskStats};
use time::macros::format_description;

/// Width of the category column (longest category name).
const CATEGORY_WIDTH: usize = 8;

pub fn write_task_table<W: Write>(out: &mut W, tasks: &[Task]) -> io::Result<()> {
    for task in tasks {
        let check = if task.completed { "[x]" } else { "[ ]" };
        writeln!(
            out,
            "{check} {id}  {category:<width$}  {date}  {text}",
            id = task.id.short(),
            category = task.category.as_str(),
            width = CATEGORY_WIDTH,
            date = created_on(task),
            text = task.text,
        )?;
    }
    Ok(())
}

pub fn write_empty<W: Write>(out: &mut W, empty: EmptyState) -> io::Result<()> {
    writeln!(out, "{}", EmptyState::TITLE)?;
    writeln!(out, "{}", empty.hint())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &TaskStats) -> io::Result<()> {
    writeln!(
        out,
        "{} pending, {} completed, total {}",
        stats.pending, stats.completed, stats.total
    )
}

fn created_on(task: &Task) -> String {
    task.created_date()
        .and_then(|date| date.format(format_description!("[year]-[month]-[day]")).ok())
        .unwrap_or_else(|| "----------".to_owned())
}
