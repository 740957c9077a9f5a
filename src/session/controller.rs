//! Interactive menu session.
//!
//! `Session` is a plain state machine fed one input line at a time; `run_session`
//! reads stdin line by line and feeds the output writer.

use super::menu::{self, MenuChoice};
use crate::engine::run_query;
use crate::model::{City, Query, QueryOutcome, RunConfig};
use crate::output::{spawn_output_writer, OutputLine};
use crate::text_summary::build_text_summary;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// What the session expects the next input line to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Awaiting {
    Selection,
    StateName,
    CityName,
}

pub(crate) struct Session {
    cities: Vec<City>,
    cfg: RunConfig,
    awaiting: Awaiting,
    finished: bool,
}

impl Session {
    pub(crate) fn new(cfg: RunConfig, cities: Vec<City>) -> Self {
        Self {
            cities,
            cfg,
            awaiting: Awaiting::Selection,
            finished: false,
        }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.finished
    }

    /// Banner, dataset size, menu and the first prompt.
    pub(crate) fn start(&self) -> Vec<OutputLine> {
        let mut out: Vec<OutputLine> = menu::banner().into_iter().map(OutputLine::Stdout).collect();
        out.push(OutputLine::Stdout(format!(
            "\n{} cities in database",
            self.cities.len()
        )));
        out.extend(menu::menu_lines(self.cfg.limit).into_iter().map(OutputLine::Stdout));
        out.push(OutputLine::Prompt(menu::SELECTION_PROMPT.into()));
        out
    }

    /// Feed one line of user input and collect what should be shown in response.
    pub(crate) fn handle_line(&mut self, input: &str) -> Vec<OutputLine> {
        if self.finished {
            return Vec::new();
        }
        let input = input.trim();
        match self.awaiting {
            Awaiting::Selection => self.handle_selection(input),
            Awaiting::StateName => self.handle_named(Query::MostPopulousInState {
                state: input.to_string(),
            }),
            Awaiting::CityName => self.handle_named(Query::CitiesNamed {
                name: input.to_string(),
            }),
        }
    }

    fn handle_selection(&mut self, input: &str) -> Vec<OutputLine> {
        let Some(choice) = MenuChoice::parse(input) else {
            return vec![
                OutputLine::Stdout("Invalid input. Try again".into()),
                OutputLine::Prompt(menu::SELECTION_PROMPT.into()),
            ];
        };
        tracing::debug!(?choice, "menu selection");

        match choice {
            MenuChoice::LeastPopulous => self.run(Query::LeastPopulous),
            MenuChoice::MostPopulous => self.run(Query::MostPopulous),
            MenuChoice::NameAscending => self.run(Query::NameAscending),
            MenuChoice::NameDescending => self.run(Query::NameDescending),
            MenuChoice::MostPopulousInState => {
                self.awaiting = Awaiting::StateName;
                vec![OutputLine::Prompt(format!("\n{}", menu::STATE_PROMPT))]
            }
            MenuChoice::CitiesNamed => {
                self.awaiting = Awaiting::CityName;
                vec![OutputLine::Prompt(format!("\n{}", menu::CITY_PROMPT))]
            }
            MenuChoice::Quit => {
                self.finished = true;
                vec![OutputLine::Stdout(format!("\n{}", menu::FAREWELL))]
            }
        }
    }

    /// State and city queries re-prompt until the name exists in the dataset.
    fn handle_named(&mut self, query: Query) -> Vec<OutputLine> {
        let reprompt = match self.awaiting {
            Awaiting::CityName => menu::CITY_PROMPT,
            _ => menu::STATE_PROMPT,
        };
        match run_query(&mut self.cities, &query, self.cfg.limit) {
            QueryOutcome::Ordered(report) => {
                self.awaiting = Awaiting::Selection;
                let mut out = self.render(&report);
                out.push(OutputLine::Prompt(menu::SELECTION_PROMPT.into()));
                out
            }
            QueryOutcome::UnknownState(name) | QueryOutcome::UnknownCity(name) => vec![
                OutputLine::Stdout(format!("ERROR: {name} is not valid")),
                OutputLine::Prompt(reprompt.into()),
            ],
        }
    }

    fn run(&mut self, query: Query) -> Vec<OutputLine> {
        let mut out = match run_query(&mut self.cities, &query, self.cfg.limit) {
            QueryOutcome::Ordered(report) => self.render(&report),
            // Only the named queries can miss, and those go through handle_named.
            QueryOutcome::UnknownState(name) | QueryOutcome::UnknownCity(name) => {
                vec![OutputLine::Stdout(format!("ERROR: {name} is not valid"))]
            }
        };
        out.push(OutputLine::Prompt(menu::SELECTION_PROMPT.into()));
        out
    }

    fn render(&self, report: &crate::model::QueryReport) -> Vec<OutputLine> {
        build_text_summary(report, self.cfg.summary)
            .lines
            .into_iter()
            .map(OutputLine::Stdout)
            .collect()
    }
}

/// Drive the interactive menu until the user quits or stdin closes.
pub(crate) async fn run_session(cfg: RunConfig, cities: Vec<City>) -> Result<()> {
    let (out_tx, out_handle) = spawn_output_writer();
    let input = BufReader::new(tokio::io::stdin());
    let result = drive_session(Session::new(cfg, cities), input, &out_tx).await;

    drop(out_tx);
    let _ = out_handle.await;
    result
}

/// Feed every input line to `session`, forwarding its output, until quit or EOF.
async fn drive_session<R>(
    mut session: Session,
    input: R,
    out_tx: &mpsc::UnboundedSender<OutputLine>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    for line in session.start() {
        let _ = out_tx.send(line);
    }

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        for line in session.handle_line(&line) {
            let _ = out_tx.send(line);
        }
        if session.is_finished() {
            break;
        }
    }
    if !session.is_finished() {
        tracing::debug!("stdin closed before quit");
        let _ = out_tx.send(OutputLine::Stdout(String::new()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::sample_cities;
    use std::path::PathBuf;

    fn session(limit: usize) -> Session {
        Session::new(
            RunConfig {
                data_path: PathBuf::from("unused.txt"),
                limit,
                summary: false,
            },
            sample_cities(),
        )
    }

    fn stdout_text(out: &[OutputLine]) -> Vec<String> {
        out.iter()
            .filter_map(|l| match l {
                OutputLine::Stdout(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn start_shows_count_menu_and_prompt() {
        let s = session(50);
        let out = s.start();
        let text = stdout_text(&out);
        assert!(text.iter().any(|l| l == "\n20 cities in database"));
        assert!(text.iter().any(|l| l == "9. Quit"));
        assert_eq!(
            out.last(),
            Some(&OutputLine::Prompt(menu::SELECTION_PROMPT.into()))
        );
    }

    #[test]
    fn invalid_selection_reprompts() {
        let mut s = session(5);
        let out = s.handle_line("7");
        assert_eq!(stdout_text(&out), vec!["Invalid input. Try again"]);
        assert!(!s.is_finished());
    }

    #[test]
    fn global_query_prints_limited_table() {
        let mut s = session(3);
        let text = stdout_text(&s.handle_line("2"));
        assert!(text.iter().any(|l| l == "3 most populous cities"));
        assert!(text.iter().any(|l| l.starts_with(" 1: New York")));
        assert!(text.iter().any(|l| l.starts_with(" 3: Texas")));
        assert!(!text.iter().any(|l| l.starts_with(" 4: ")));
    }

    #[test]
    fn state_query_reprompts_until_valid() {
        let mut s = session(50);
        s.handle_line("5");

        let out = s.handle_line("Atlantis");
        assert_eq!(stdout_text(&out), vec!["ERROR: Atlantis is not valid"]);
        assert_eq!(
            out.last(),
            Some(&OutputLine::Prompt(menu::STATE_PROMPT.into()))
        );

        let text = stdout_text(&s.handle_line("texas"));
        assert!(text.iter().any(|l| l == "Fifty most populous cities in texas"));
        assert!(text.iter().any(|l| l.starts_with(" 1: Texas")));
        assert!(text.iter().any(|l| l.contains("El Paso")));

        let back = s.handle_line("9");
        assert!(s.is_finished());
        assert_eq!(stdout_text(&back), vec![format!("\n{}", menu::FAREWELL)]);
    }

    #[test]
    fn city_query_lists_every_match() {
        let mut s = session(1);
        s.handle_line("6");
        let out = s.handle_line("Gotham");
        assert_eq!(stdout_text(&out), vec!["ERROR: Gotham is not valid"]);

        let text = stdout_text(&s.handle_line("Springfield"));
        let rows: Vec<&String> = text.iter().filter(|l| l.contains("Springfield")).collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].contains("Missouri"));
    }

    #[test]
    fn input_after_quit_is_ignored() {
        let mut s = session(5);
        s.handle_line("9");
        assert!(s.handle_line("1").is_empty());
    }

    #[tokio::test]
    async fn input_stream_runs_queries_and_stops_at_quit() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input: &[u8] = b"2\n9\n1\n";
        drive_session(session(2), input, &tx).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        while let Some(line) = rx.recv().await {
            out.push(line);
        }
        let text = stdout_text(&out);
        assert!(text.iter().any(|l| l == "2 most populous cities"));
        assert_eq!(text.last(), Some(&format!("\n{}", menu::FAREWELL)));
        assert!(!text.iter().any(|l| l == "2 least populous cities"));
    }

    #[tokio::test]
    async fn input_stream_ends_cleanly_at_eof() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let input: &[u8] = b"5\nTexas";
        drive_session(session(50), input, &tx).await.unwrap();
        drop(tx);

        let mut out = Vec::new();
        while let Some(line) = rx.recv().await {
            out.push(line);
        }
        let text = stdout_text(&out);
        assert!(text.iter().any(|l| l == "Fifty most populous cities in Texas"));
        assert_eq!(text.last(), Some(&String::new()));
    }
}
