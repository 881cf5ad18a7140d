use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::RosterApi;
use crate::models::NewPlayer;
use crate::view;

const USAGE: &str = "commands:\n\
    \x20 list                      show the roster\n\
    \x20 details <id>              show one player\n\
    \x20 add <name> <breed> <age>  add a player to the roster\n\
    \x20 remove <id>               remove a player from the roster\n\
    \x20 help                      show this message\n\
    \x20 quit                      exit\n";

/// One line of user input, parsed. The `add` arguments stay raw strings here;
/// typing happens when the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Details(u64),
    Add {
        name: String,
        breed: String,
        age: String,
    },
    Remove(u64),
    Help,
    Quit,
}

impl Command {
    /// Whitespace-tokenized parse. The error is the message shown to the user.
    pub fn parse(line: &str) -> Result<Command, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(String::new());
        };
        let rest: Vec<&str> = words.collect();
        match (verb, rest.as_slice()) {
            ("list", []) => Ok(Command::List),
            ("details", [id]) => parse_id(id).map(Command::Details),
            ("add", [name, breed, age]) => Ok(Command::Add {
                name: name.to_string(),
                breed: breed.to_string(),
                age: age.to_string(),
            }),
            ("remove", [id]) => parse_id(id).map(Command::Remove),
            ("help", []) => Ok(Command::Help),
            ("quit" | "exit", []) => Ok(Command::Quit),
            _ => Err(format!("unrecognized command: {}", line.trim())),
        }
    }
}

fn parse_id(word: &str) -> Result<u64, String> {
    word.parse()
        .map_err(|_| format!("not a player id: {word}"))
}

/// The creation form. Fields hold whatever the user typed; `record` is where
/// the age becomes numeric. The form is only cleared after a successful
/// submission, so a failed one leaves the input available for inspection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlayerForm {
    pub name: String,
    pub breed: String,
    pub age: String,
}

impl PlayerForm {
    pub fn filled(name: &str, breed: &str, age: &str) -> Self {
        Self {
            name: name.to_string(),
            breed: breed.to_string(),
            age: age.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.breed.is_empty() && self.age.is_empty()
    }

    /// Builds the creation payload. A non-numeric age cannot be represented
    /// on the wire, so it is rejected here before any request goes out.
    pub fn record(&self) -> Result<NewPlayer, String> {
        let age = self
            .age
            .parse()
            .map_err(|_| format!("age must be a number, got {:?}", self.age))?;
        Ok(NewPlayer {
            name: self.name.clone(),
            breed: self.breed.clone(),
            age,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Ties the roster API to the terminal: renders into `out`, re-fetching and
/// re-rendering the whole roster after every mutation. API failures are
/// logged and leave the screen untouched; nothing unwinds past the loop.
pub struct App<A, W> {
    api: A,
    out: W,
    form: PlayerForm,
}

impl<A: RosterApi, W: Write> App<A, W> {
    pub fn new(api: A, out: W) -> Self {
        Self {
            api,
            out,
            form: PlayerForm::default(),
        }
    }

    pub fn form(&self) -> &PlayerForm {
        &self.form
    }

    pub fn fill_form(&mut self, name: &str, breed: &str, age: &str) {
        self.form = PlayerForm::filled(name, breed, age);
    }

    pub fn out(&self) -> &W {
        &self.out
    }

    /// Bootstrap plus command loop: fetch-all, render-all, then read commands
    /// until EOF or `quit`.
    pub async fn run<R>(&mut self, input: R) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        self.refresh().await?;
        write!(self.out, "\n{USAGE}")?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "\npuppy-bowl> ")?;
            self.out.flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Ok(Command::List) => self.refresh().await?,
                Ok(Command::Details(id)) => self.show_details(id).await?,
                Ok(Command::Add { name, breed, age }) => {
                    self.fill_form(&name, &breed, &age);
                    self.submit_form().await?;
                }
                Ok(Command::Remove(id)) => self.remove_player(id).await?,
                Ok(Command::Help) => write!(self.out, "{USAGE}")?,
                Ok(Command::Quit) => break,
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }
        Ok(())
    }

    /// Fetch-all then render-all. The previous output is only replaced when
    /// the fetch succeeds.
    pub async fn refresh(&mut self) -> io::Result<()> {
        match self.api.list_players().await {
            Ok(players) => write!(self.out, "{}", view::render_roster(&players)),
            Err(error) => {
                tracing::error!(?error, "failed to fetch roster");
                Ok(())
            }
        }
    }

    /// The form controller: build the record, create it, re-fetch and
    /// re-render the whole roster, then clear the form. Any failure along the
    /// way leaves the form filled.
    pub async fn submit_form(&mut self) -> io::Result<()> {
        let record = match self.form.record() {
            Ok(record) => record,
            Err(message) => {
                tracing::error!(%message, "rejecting creation form");
                return Ok(());
            }
        };
        match self.api.create_player(&record).await {
            Ok(created) => {
                tracing::info!(id = created.id, name = %created.name, "player added");
                self.refresh().await?;
                self.form.reset();
            }
            Err(error) => {
                tracing::error!(?error, "failed to add player");
            }
        }
        Ok(())
    }

    pub async fn show_details(&mut self, id: u64) -> io::Result<()> {
        match self.api.get_player(id).await {
            Ok(player) => write!(self.out, "{}", view::render_player(&player)),
            Err(error) => {
                tracing::error!(?error, id, "failed to fetch player");
                Ok(())
            }
        }
    }

    pub async fn remove_player(&mut self, id: u64) -> io::Result<()> {
        match self.api.delete_player(id).await {
            Ok(()) => {
                tracing::info!(id, "player removed");
                self.refresh().await
            }
            Err(error) => {
                tracing::error!(?error, id, "failed to remove player");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_form() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  details 12 "), Ok(Command::Details(12)));
        assert_eq!(
            Command::parse("add Rex Lab 3"),
            Ok(Command::Add {
                name: "Rex".to_string(),
                breed: "Lab".to_string(),
                age: "3".to_string(),
            })
        );
        assert_eq!(Command::parse("remove 7"), Ok(Command::Remove(7)));
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Command::parse("details").is_err());
        assert!(Command::parse("details twelve").is_err());
        assert!(Command::parse("add Rex Lab").is_err());
        assert!(Command::parse("feed Rex").is_err());
    }

    #[test]
    fn form_builds_record_and_resets() {
        let mut form = PlayerForm::filled("Rex", "Lab", "3");
        let record = form.record().unwrap();
        assert_eq!(record.name, "Rex");
        assert_eq!(record.breed, "Lab");
        assert_eq!(record.age, 3);

        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn form_rejects_non_numeric_age() {
        let form = PlayerForm::filled("Rex", "Lab", "three");
        assert!(form.record().is_err());
    }
}
