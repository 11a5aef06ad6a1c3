use crate::config::Command;
use crate::core::{QuizRepo, QuizService};
use crate::domain::model::{Question, Quiz};
use crate::utils::error::Result;
use std::io::Write;

/// Runs one CLI command against the service and prints its result to `out`.
pub fn execute<R: QuizRepo, W: Write>(
    service: &mut QuizService<R>,
    command: Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Add { name } => {
            let id = service.add(&name)?;
            writeln!(out, "{}", id)?;
        }
        Command::AddQuestion {
            quiz_id,
            prompt,
            answer,
            wrong_answers,
        } => {
            service.add_question_to_quiz(quiz_id, Question::new(prompt, answer, wrong_answers))?;
            writeln!(out, "Question added to quiz {}", quiz_id)?;
        }
        Command::List { json } => {
            let quizzes = service.list()?;
            if json {
                serde_json::to_writer_pretty(&mut *out, &quizzes)?;
                writeln!(out)?;
            } else {
                for quiz in &quizzes {
                    let count = quiz.questions.len();
                    let noun = if count == 1 { "question" } else { "questions" };
                    writeln!(out, "- {}: {} ({} {})", quiz.id, quiz.name, count, noun)?;
                }
            }
        }
        Command::Show {
            quiz_id,
            public,
            json,
        } => {
            let quiz = service.get(quiz_id)?;
            match (public, json) {
                (true, true) => {
                    serde_json::to_writer_pretty(&mut *out, &quiz.to_public())?;
                    writeln!(out)?;
                }
                (false, true) => {
                    serde_json::to_writer_pretty(&mut *out, &quiz)?;
                    writeln!(out)?;
                }
                (true, false) => write_public_quiz(out, &quiz)?,
                (false, false) => write_quiz(out, &quiz)?,
            }
        }
        Command::Delete { quiz_id } => {
            let removed = service.delete(quiz_id)?;
            writeln!(out, "Deleted quiz {}: {}", removed.id, removed.name)?;
        }
    }

    Ok(())
}

fn write_quiz<W: Write>(out: &mut W, quiz: &Quiz) -> Result<()> {
    writeln!(out, "{}: {}", quiz.id, quiz.name)?;
    for (n, question) in quiz.questions.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, question.prompt)?;
        writeln!(out, "   [x] {}", question.answer)?;
        for wrong in &question.wrong_answers {
            writeln!(out, "   [ ] {}", wrong)?;
        }
    }
    Ok(())
}

fn write_public_quiz<W: Write>(out: &mut W, quiz: &Quiz) -> Result<()> {
    let public = quiz.to_public();
    writeln!(out, "{}: {}", public.id, public.name)?;
    for (n, question) in public.questions.iter().enumerate() {
        writeln!(out, "{}. {}", n + 1, question.prompt)?;
        for option in &question.options {
            writeln!(out, "   - {}", option)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryQuizRepo;

    fn run(service: &mut QuizService<InMemoryQuizRepo>, command: Command) -> String {
        let mut out = Vec::new();
        execute(service, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_list_output() {
        let mut service = QuizService::new(InMemoryQuizRepo::new());
        assert_eq!(run(&mut service, Command::Add { name: "Math".into() }), "1\n");
        assert_eq!(
            run(&mut service, Command::Add { name: "History".into() }),
            "2\n"
        );

        let listing = run(&mut service, Command::List { json: false });
        assert_eq!(listing, "- 1: Math (0 questions)\n- 2: History (0 questions)\n");
    }

    #[test]
    fn test_list_pluralizes_question_count() {
        let mut service = QuizService::new(InMemoryQuizRepo::new());
        run(&mut service, Command::Add { name: "Math".into() });
        let question = |prompt: &str| Command::AddQuestion {
            quiz_id: 1,
            prompt: prompt.into(),
            answer: "4".into(),
            wrong_answers: vec!["3".into()],
        };

        run(&mut service, question("2+2?"));
        let listing = run(&mut service, Command::List { json: false });
        assert_eq!(listing, "- 1: Math (1 question)\n");

        run(&mut service, question("1+3?"));
        let listing = run(&mut service, Command::List { json: false });
        assert_eq!(listing, "- 1: Math (2 questions)\n");
    }

    #[test]
    fn test_show_public_hides_answer_marker() {
        let mut service = QuizService::new(InMemoryQuizRepo::new());
        run(&mut service, Command::Add { name: "Math".into() });
        run(
            &mut service,
            Command::AddQuestion {
                quiz_id: 1,
                prompt: "2+2?".into(),
                answer: "4".into(),
                wrong_answers: vec!["5".into(), "3".into()],
            },
        );

        let private = run(
            &mut service,
            Command::Show {
                quiz_id: 1,
                public: false,
                json: false,
            },
        );
        assert!(private.contains("[x] 4"));

        let public = run(
            &mut service,
            Command::Show {
                quiz_id: 1,
                public: true,
                json: false,
            },
        );
        assert_eq!(public, "1: Math\n1. 2+2?\n   - 3\n   - 4\n   - 5\n");
    }

    #[test]
    fn test_list_json() {
        let mut service = QuizService::new(InMemoryQuizRepo::new());
        run(&mut service, Command::Add { name: "Math".into() });

        let output = run(&mut service, Command::List { json: true });
        let parsed: Vec<Quiz> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Math");
    }
}
