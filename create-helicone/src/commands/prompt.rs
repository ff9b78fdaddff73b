//! Interactive questions asked when no project directory is given.
//!
//! Questions are plain data so the answer flow can be driven by a scripted
//! [`Prompter`] in tests; [`TerminalPrompter`] asks them through dialoguer.

use std::io;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use helicone_messages::{msg, MESSAGES};
use helicone_scaffold::CreationRequest;
use helicone_templates::CATALOG;
use tracing::debug;

use crate::error::AppError;

/// Field of the [`CreationRequest`] an answer fills in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKey {
    ProjectName,
    Template,
    InitGit,
    Install,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    Text {
        key: AnswerKey,
        prompt: String,
        default: String,
    },
    Select {
        key: AnswerKey,
        prompt: String,
        /// `(value, label)` pairs.
        choices: Vec<(String, String)>,
        default: usize,
    },
    Confirm {
        key: AnswerKey,
        prompt: String,
        default: bool,
    },
}

pub enum PromptOutcome {
    Answered(CreationRequest),
    Cancelled,
}

/// Asks one question at a time. `Ok(None)` means the user backed out.
pub trait Prompter {
    fn text(&mut self, prompt: &str, default: &str) -> Result<Option<String>, dialoguer::Error>;
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, dialoguer::Error>;
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, dialoguer::Error>;
}

/// The questions, in the order they are asked. Flags given on the command
/// line become the defaults.
pub fn creation_questions(
    template_default: &str,
    git_default: bool,
    install_default: bool,
) -> Vec<Question> {
    let choices: Vec<(String, String)> = CATALOG
        .iter()
        .map(|t| {
            (
                t.name.to_string(),
                msg!(
                    MESSAGES.prompt_template_item,
                    name = t.name,
                    description = t.description
                ),
            )
        })
        .collect();
    let default = CATALOG
        .iter()
        .position(|t| t.name == template_default)
        .unwrap_or(0);

    vec![
        Question::Text {
            key: AnswerKey::ProjectName,
            prompt: MESSAGES.prompt_project_name.to_string(),
            default: MESSAGES.prompt_project_name_default.to_string(),
        },
        Question::Select {
            key: AnswerKey::Template,
            prompt: MESSAGES.prompt_template.to_string(),
            choices,
            default,
        },
        Question::Confirm {
            key: AnswerKey::InitGit,
            prompt: MESSAGES.prompt_git.to_string(),
            default: git_default,
        },
        Question::Confirm {
            key: AnswerKey::Install,
            prompt: MESSAGES.prompt_install.to_string(),
            default: install_default,
        },
    ]
}

/// Asks every question in turn and builds the request from the answers.
pub fn collect_answers(
    questions: &[Question],
    prompter: &mut dyn Prompter,
) -> Result<PromptOutcome, AppError> {
    let mut request = CreationRequest {
        project_name: MESSAGES.prompt_project_name_default.to_string(),
        template: helicone_templates::DEFAULT_TEMPLATE.to_string(),
        install_dependencies: false,
        initialize_version_control: false,
    };

    for question in questions {
        match question {
            Question::Text {
                key,
                prompt,
                default,
            } => {
                let Some(answer) = prompter.text(prompt, default)? else {
                    return Ok(PromptOutcome::Cancelled);
                };
                set_text(&mut request, *key, answer.trim().to_string());
            }
            Question::Select {
                key,
                prompt,
                choices,
                default,
            } => {
                let labels: Vec<String> = choices.iter().map(|(_, label)| label.clone()).collect();
                let Some(index) = prompter.select(prompt, &labels, *default)? else {
                    return Ok(PromptOutcome::Cancelled);
                };
                let Some((value, _)) = choices.get(index) else {
                    return Ok(PromptOutcome::Cancelled);
                };
                set_text(&mut request, *key, value.clone());
            }
            Question::Confirm {
                key,
                prompt,
                default,
            } => {
                let Some(answer) = prompter.confirm(prompt, *default)? else {
                    return Ok(PromptOutcome::Cancelled);
                };
                set_flag(&mut request, *key, answer);
            }
        }
    }

    debug!(?request, "Collected interactive answers");
    Ok(PromptOutcome::Answered(request))
}

fn set_text(request: &mut CreationRequest, key: AnswerKey, value: String) {
    match key {
        AnswerKey::ProjectName => request.project_name = value,
        AnswerKey::Template => request.template = value,
        AnswerKey::InitGit | AnswerKey::Install => {}
    }
}

fn set_flag(request: &mut CreationRequest, key: AnswerKey, value: bool) {
    match key {
        AnswerKey::InitGit => request.initialize_version_control = value,
        AnswerKey::Install => request.install_dependencies = value,
        AnswerKey::ProjectName | AnswerKey::Template => {}
    }
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn text(&mut self, prompt: &str, default: &str) -> Result<Option<String>, dialoguer::Error> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default.to_string())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Project name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(Some);

        cancel_on_interrupt(answer)
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, dialoguer::Error> {
        let answer = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt();

        cancel_on_interrupt(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, dialoguer::Error> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt();

        cancel_on_interrupt(answer)
    }
}

/// Ctrl-C surfaces as an interrupted read; treat it like Esc.
fn cancel_on_interrupt<T>(
    answer: Result<Option<T>, dialoguer::Error>,
) -> Result<Option<T>, dialoguer::Error> {
    match answer {
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    enum Answer {
        Text(&'static str),
        Index(usize),
        Flag(bool),
        Escape,
    }

    struct ScriptedPrompter {
        answers: VecDeque<Answer>,
        asked: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                asked: Vec::new(),
            }
        }

        fn next(&mut self, prompt: &str) -> Answer {
            self.asked.push(prompt.to_string());
            self.answers.pop_front().unwrap_or(Answer::Escape)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn text(&mut self, prompt: &str, _default: &str) -> Result<Option<String>, dialoguer::Error> {
            Ok(match self.next(prompt) {
                Answer::Text(value) => Some(value.to_string()),
                _ => None,
            })
        }

        fn select(
            &mut self,
            prompt: &str,
            _items: &[String],
            _default: usize,
        ) -> Result<Option<usize>, dialoguer::Error> {
            Ok(match self.next(prompt) {
                Answer::Index(index) => Some(index),
                _ => None,
            })
        }

        fn confirm(&mut self, prompt: &str, _default: bool) -> Result<Option<bool>, dialoguer::Error> {
            Ok(match self.next(prompt) {
                Answer::Flag(value) => Some(value),
                _ => None,
            })
        }
    }

    #[test]
    fn test_questions_follow_flags() {
        let questions = creation_questions("python-fastapi", true, false);
        assert_eq!(questions.len(), 4);
        assert!(matches!(
            &questions[0],
            Question::Text { key: AnswerKey::ProjectName, default, .. } if default == "my-helicone-app"
        ));
        assert!(matches!(
            &questions[1],
            Question::Select { key: AnswerKey::Template, default: 0, .. }
        ));
        assert!(matches!(
            &questions[2],
            Question::Confirm { key: AnswerKey::InitGit, default: true, .. }
        ));
        assert!(matches!(
            &questions[3],
            Question::Confirm { key: AnswerKey::Install, default: false, .. }
        ));
    }

    #[test]
    fn test_answers_build_request_in_order() {
        let questions = creation_questions("python-fastapi", false, false);
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Text("  chat-bot "),
            Answer::Index(0),
            Answer::Flag(true),
            Answer::Flag(false),
        ]);

        let outcome = collect_answers(&questions, &mut prompter).unwrap();

        let PromptOutcome::Answered(request) = outcome else {
            panic!("expected answers");
        };
        assert_eq!(request.project_name, "chat-bot");
        assert_eq!(request.template, "python-fastapi");
        assert!(request.initialize_version_control);
        assert!(!request.install_dependencies);
        assert_eq!(
            prompter.asked,
            vec![
                MESSAGES.prompt_project_name,
                MESSAGES.prompt_template,
                MESSAGES.prompt_git,
                MESSAGES.prompt_install,
            ]
        );
    }

    #[test]
    fn test_escape_cancels_and_stops_asking() {
        let questions = creation_questions("python-fastapi", false, false);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Text("chat-bot"), Answer::Escape]);

        let outcome = collect_answers(&questions, &mut prompter).unwrap();

        assert!(matches!(outcome, PromptOutcome::Cancelled));
        assert_eq!(prompter.asked.len(), 2);
    }

    #[test]
    fn test_interrupt_is_a_cancellation() {
        let interrupted: Result<Option<bool>, dialoguer::Error> = Err(dialoguer::Error::IO(
            io::Error::new(io::ErrorKind::Interrupted, "read interrupted"),
        ));
        assert!(matches!(cancel_on_interrupt(interrupted), Ok(None)));

        let broken: Result<Option<usize>, dialoguer::Error> = Err(dialoguer::Error::IO(
            io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"),
        ));
        assert!(cancel_on_interrupt(broken).is_err());

        assert!(matches!(cancel_on_interrupt(Ok(Some(3usize))), Ok(Some(3))));
    }

    #[test]
    fn test_out_of_range_selection_cancels() {
        let questions = creation_questions("python-fastapi", false, false);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Text("app"), Answer::Index(99)]);

        let outcome = collect_answers(&questions, &mut prompter).unwrap();

        assert!(matches!(outcome, PromptOutcome::Cancelled));
    }
}
