use std::io::Write;

use anyhow::{Result, bail};
use taskflow_app::{AppConfig, Intent, Session, SessionEvent, TaskChange};
use taskflow_core::{Task, TaskId};
use taskflow_storage::KeyValueStore;

use crate::{Command, LsFormat, ThemeAction};

mod render;

/// Shortest id prefix accepted on the command line.
const MIN_ID_PREFIX: usize = 4;

pub fn run<K, W>(command: Command, store: K, config: &AppConfig, out: &mut W) -> Result<()>
where
    K: KeyValueStore + Clone,
    W: Write,
{
    let mut session = Session::open(store, config.initial_view());
    match command {
        Command::Add { text, category } => {
            let category = category.unwrap_or_else(|| config.defaults.category());
            let event = session.dispatch(Intent::Add {
                text: text.join(" "),
                category,
            });
            match event {
                Some(SessionEvent::Tasks(TaskChange::Added(id))) => {
                    let task = lookup(&session, id)?;
                    writeln!(out, "added task: {} [{}] {}", id.short(), task.category, task.text)?;
                }
                _ => writeln!(out, "task text must not be empty; nothing added")?,
            }
        }
        Command::Edit { id, text } => {
            let id = resolve_id(session.tasks().tasks(), &id)?;
            match session.dispatch(Intent::Edit {
                id,
                text: text.join(" "),
            }) {
                Some(SessionEvent::Tasks(change)) => {
                    writeln!(out, "updated task: {}", change.task_id().short())?;
                }
                _ => writeln!(out, "task text must not be empty; task left unchanged")?,
            }
        }
        Command::Rm { id } => {
            let id = resolve_id(session.tasks().tasks(), &id)?;
            if let Some(SessionEvent::Tasks(change)) = session.dispatch(Intent::Delete(id)) {
                writeln!(out, "deleted task: {}", change.task_id().short())?;
            }
        }
        Command::Toggle { id } => {
            let id = resolve_id(session.tasks().tasks(), &id)?;
            if let Some(SessionEvent::Tasks(change @ TaskChange::Toggled { completed, .. })) =
                session.dispatch(Intent::Toggle(id))
            {
                let verb = if completed { "completed" } else { "reopened" };
                writeln!(out, "{verb} task: {}", change.task_id().short())?;
            }
        }
        Command::Ls {
            category,
            search,
            sort,
            format,
        } => {
            if let Some(category) = category {
                session.dispatch(Intent::SetCategory(category));
            }
            if let Some(search) = search {
                session.dispatch(Intent::SetSearch(search));
            }
            if let Some(sort) = sort {
                session.dispatch(Intent::SetSort(sort));
            }
            let frame = session.render();
            match format {
                LsFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&frame.visible)?)?,
                LsFormat::Table => {
                    if let Some(empty) = frame.empty {
                        render::write_empty(out, empty)?;
                    } else {
                        render::write_task_table(out, &frame.visible)?;
                    }
                    writeln!(out)?;
                    render::write_stats(out, &frame.stats)?;
                }
            }
        }
        Command::Stats => render::write_stats(out, &session.render().stats)?,
        Command::Theme { action } => match action {
            ThemeAction::Show => writeln!(out, "{}", session.theme())?,
            ThemeAction::Toggle => {
                if let Some(SessionEvent::ThemeChanged(theme)) = session.dispatch(Intent::ToggleTheme) {
                    writeln!(out, "switched to {theme} theme")?;
                }
            }
        },
    }
    Ok(())
}

fn lookup<K: KeyValueStore + Clone>(session: &Session<K>, id: TaskId) -> Result<&Task> {
    match session.tasks().get(id) {
        Some(task) => Ok(task),
        None => bail!("task not found: {id}"),
    }
}

/// Resolve a full id or a unique prefix of at least [`MIN_ID_PREFIX`] characters.
fn resolve_id(tasks: &[Task], token: &str) -> Result<TaskId> {
    let token = token.trim();
    if let Ok(id) = token.parse::<TaskId>() {
        if tasks.iter().any(|task| task.id == id) {
            return Ok(id);
        }
        bail!("task not found: {id}");
    }
    if token.chars().count() < MIN_ID_PREFIX {
        bail!("id prefix '{token}' is too short (need at least {MIN_ID_PREFIX} characters)");
    }

    let mut matches = tasks.iter().filter(|task| task.id.matches_prefix(token));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task.id),
        (None, _) => bail!("no task matches id '{token}'"),
        (Some(_), Some(_)) => {
            let count = 2 + matches.count();
            bail!("id prefix '{token}' is ambiguous ({count} tasks match)")
        }
    }
}
