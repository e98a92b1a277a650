//! Line-oriented operator console: renders the view model and maps typed
//! commands onto core messages.

use center_core::{
    AppState, AppViewModel, CategoryFilter, Msg, ProjectFilter, SessionState, SourceFilter,
};

pub enum Command {
    Dispatch(Vec<Msg>),
    Help,
    Quit,
    Unknown(String),
}

pub fn parse(line: &str, state: &AppState) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Dispatch(Vec::new());
    }

    if let Some(rest) = line.strip_prefix("template ") {
        return parse_template(rest.trim(), state);
    }
    if let Some(token) = line.strip_prefix("category ") {
        return match CategoryFilter::parse(token.trim()) {
            Some(selector) => Command::Dispatch(vec![Msg::CategoryFilterSelected(selector)]),
            None => Command::Unknown(line.to_string()),
        };
    }
    if let Some(token) = line.strip_prefix("source ") {
        return match SourceFilter::parse(token.trim()) {
            Some(selector) => Command::Dispatch(vec![Msg::SourceFilterSelected(selector)]),
            None => Command::Unknown(line.to_string()),
        };
    }
    if let Some(name) = line.strip_prefix("project ") {
        let selector = ProjectFilter::parse(name.trim());
        return Command::Dispatch(vec![Msg::ProjectFilterSelected(selector)]);
    }
    if let Some(rest) = line.strip_prefix("set ") {
        let mut words = rest.split_whitespace();
        if let (Some(id), Some(token)) = (words.next(), words.next()) {
            if let Ok(id) = id.parse() {
                return Command::Dispatch(vec![Msg::CategoryChanged {
                    id,
                    category: token.to_string(),
                }]);
            }
        }
        return Command::Unknown(line.to_string());
    }

    match line {
        "refresh" => Command::Dispatch(vec![Msg::RefreshRequested]),
        "clear" => Command::Dispatch(vec![Msg::FiltersCleared]),
        "dismiss" => Command::Dispatch(vec![Msg::ErrorDismissed]),
        "yes" => Command::Dispatch(vec![Msg::TemplateDeleteConfirmed]),
        "no" => Command::Dispatch(vec![Msg::TemplateDeleteCancelled]),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn parse_template(rest: &str, state: &AppState) -> Command {
    if let Some(text) = rest.strip_prefix("add ") {
        return Command::Dispatch(vec![
            Msg::TemplateInputChanged(text.to_string()),
            Msg::TemplateSubmitted,
        ]);
    }
    if let Some(index) = rest.strip_prefix("rm ") {
        if let Ok(index) = index.trim().parse() {
            return Command::Dispatch(vec![Msg::TemplateDeleteRequested { index }]);
        }
    }
    if let Some(index) = rest.strip_prefix("copy ") {
        if let Ok(index) = index.trim().parse() {
            return Command::Dispatch(vec![Msg::TemplateCopyRequested { index }]);
        }
    }
    if let Some(args) = rest.strip_prefix("mv ") {
        let mut words = args.split_whitespace();
        if let (Some(from), Some(to)) = (words.next(), words.next()) {
            if let (Ok(from), Ok(to)) = (from.parse::<usize>(), to.parse::<usize>()) {
                let entries = state.templates().entries();
                if let (Some(from), Some(to)) = (entries.get(from), entries.get(to)) {
                    return Command::Dispatch(vec![Msg::TemplateMoved {
                        from: from.id,
                        to: to.id,
                    }]);
                }
            }
        }
    }
    Command::Unknown(format!("template {rest}"))
}

pub fn render(view: &AppViewModel) {
    println!();
    println!("== Comms Command Center ==");
    if let Some(error) = &view.error {
        println!("!! {error}  ('dismiss' to clear)");
    }
    match view.session {
        SessionState::Refreshing => println!("Refreshing..."),
        SessionState::Idle => {
            if let Some(ts) = &view.last_refresh {
                println!("Last refresh: {ts}");
            }
        }
    }

    let stats = &view.stats;
    let mut categories = format!(
        "Categories: urgent {} | high_priority {} | routine {} | archive {}",
        stats.urgent, stats.high_priority, stats.routine, stats.archive
    );
    if stats.other_category > 0 {
        categories.push_str(&format!(" | other {}", stats.other_category));
    }
    println!("{categories}");

    let mut sources = format!(
        "Sources: telegram {} | twitter {}",
        stats.telegram, stats.twitter
    );
    if stats.other_source > 0 {
        sources.push_str(&format!(" | other {}", stats.other_source));
    }
    println!("{sources}");

    if !stats.project_mentions.is_empty() {
        let mentions: Vec<String> = stats
            .project_mentions
            .iter()
            .map(|(project, count)| format!("{project} {count}"))
            .collect();
        println!("Mentions: {}", mentions.join(" | "));
    }

    println!(
        "Filter: category={} source={} project={}",
        category_token(&view.filter.category),
        source_token(&view.filter.source),
        project_token(&view.filter.project),
    );

    println!("Messages ({} of {}):", view.messages.len(), view.total_messages);
    for row in &view.messages {
        let mentions = if row.mentions.is_empty() {
            String::new()
        } else {
            format!("  [{}]", row.mentions.join(", "))
        };
        println!(
            "  #{} ({}) {} <{}> {}{}",
            row.id, row.source_token, row.sender, row.category_token, row.body, mentions
        );
    }

    if !view.feeds.is_empty() {
        println!("Project feeds:");
        for feed in &view.feeds {
            println!("  {}:", feed.owner);
            for item in &feed.items {
                let mentions = if item.mentions.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", item.mentions.join(", "))
                };
                println!("    - {}{}", item.content, mentions);
            }
        }
    }

    println!("Templates:");
    for (index, template) in view.templates.iter().enumerate() {
        println!("  {index}. {}", template.content);
    }
    if let Some(index) = view.pending_delete {
        println!("Delete template {index}? ('yes' / 'no')");
    }
}

pub fn print_help() {
    println!("Commands:");
    println!("  refresh                 re-fetch messages and project feeds");
    println!("  category <token|all>    filter by category ('high' selects high_priority)");
    println!("  source <token|all>      filter by source channel");
    println!("  project <name|none>     filter by mentioned project");
    println!("  clear                   drop all filters");
    println!("  set <id> <token>        recategorize one message");
    println!("  template add <text>     append a reply template");
    println!("  template rm <index>     delete a template (asks for confirmation)");
    println!("  template mv <from> <to> move a template to another slot");
    println!("  template copy <index>   copy a template to the clipboard");
    println!("  dismiss                 clear the error banner");
    println!("  quit");
}

fn category_token(filter: &CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "all",
        CategoryFilter::Only(category) => category.as_token(),
    }
}

fn source_token(filter: &SourceFilter) -> &'static str {
    match filter {
        SourceFilter::All => "all",
        SourceFilter::Only(source) => source.as_token(),
    }
}

fn project_token(filter: &ProjectFilter) -> &str {
    match filter {
        ProjectFilter::None => "none",
        ProjectFilter::Named(name) => name,
    }
}
