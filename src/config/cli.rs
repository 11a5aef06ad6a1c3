use crate::utils::logger::LogFormat;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "quizzer")]
#[command(about = "Create and manage quizzes stored in a local YAML file")]
pub struct CliConfig {
    /// Path of the YAML store file
    #[arg(long, global = true, env = "QUIZZER_STORE")]
    pub store: Option<String>,

    /// Optional TOML configuration file
    #[arg(long, global = true, env = "QUIZZER_CONFIG")]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Log output format: compact or json
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Adds a quiz and prints its id
    Add {
        /// Quiz name
        name: String,
    },

    /// Adds a question to an existing quiz
    AddQuestion {
        quiz_id: u64,

        #[arg(long)]
        prompt: String,

        /// The correct answer
        #[arg(long)]
        answer: String,

        /// A wrong answer; repeat for several
        #[arg(long = "wrong")]
        wrong_answers: Vec<String>,
    },

    /// Shows all quizzes
    List {
        #[arg(long)]
        json: bool,
    },

    /// Shows one quiz with its questions
    Show {
        quiz_id: u64,

        /// Hide which option is correct
        #[arg(long)]
        public: bool,

        #[arg(long)]
        json: bool,
    },

    /// Deletes a quiz
    Delete { quiz_id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_question() {
        let cli = CliConfig::try_parse_from([
            "quizzer",
            "--store",
            "q.yaml",
            "add-question",
            "1",
            "--prompt",
            "2+2?",
            "--answer",
            "4",
            "--wrong",
            "3",
            "--wrong",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.store.as_deref(), Some("q.yaml"));
        match cli.command {
            Command::AddQuestion {
                quiz_id,
                prompt,
                answer,
                wrong_answers,
            } => {
                assert_eq!(quiz_id, 1);
                assert_eq!(prompt, "2+2?");
                assert_eq!(answer, "4");
                assert_eq!(wrong_answers, vec!["3", "5"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            CliConfig::try_parse_from(["quizzer", "list", "--json", "-v", "--log-format", "json"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert!(matches!(cli.command, Command::List { json: true }));
    }

    #[test]
    fn test_add_requires_name() {
        assert!(CliConfig::try_parse_from(["quizzer", "add"]).is_err());
    }
}
