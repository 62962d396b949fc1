use crate::mvi::Reducer;
use crate::ui::dialog::intent::DialogIntent;
use crate::ui::dialog::state::DialogState;

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DialogIntent::AskDelete { target, label } => {
                DialogState::ConfirmDelete { target, label }
            }
            DialogIntent::AskName { purpose, initial } => DialogState::NameInput {
                purpose,
                input: initial,
                error: None,
            },
            DialogIntent::PickFolder { options, current } => {
                let selected = options
                    .iter()
                    .position(|option| option.id == current)
                    .unwrap_or(0);
                DialogState::FolderPicker { options, selected }
            }
            DialogIntent::OpenSearch { initial } => DialogState::Search { input: initial },
            DialogIntent::InsertChar(ch) => match state {
                DialogState::NameInput {
                    purpose, mut input, ..
                } => {
                    input.push(ch);
                    DialogState::NameInput {
                        purpose,
                        input,
                        error: None,
                    }
                }
                DialogState::Search { mut input } => {
                    input.push(ch);
                    DialogState::Search { input }
                }
                other => other,
            },
            DialogIntent::Backspace => match state {
                DialogState::NameInput {
                    purpose,
                    mut input,
                    error,
                } => {
                    input.pop();
                    DialogState::NameInput {
                        purpose,
                        input,
                        error,
                    }
                }
                DialogState::Search { mut input } => {
                    input.pop();
                    DialogState::Search { input }
                }
                other => other,
            },
            DialogIntent::ClearInput => match state {
                DialogState::NameInput { purpose, .. } => DialogState::NameInput {
                    purpose,
                    input: String::new(),
                    error: None,
                },
                DialogState::Search { .. } => DialogState::Search {
                    input: String::new(),
                },
                other => other,
            },
            DialogIntent::MoveUp => match state {
                DialogState::FolderPicker { options, selected } => {
                    let selected = if selected == 0 {
                        options.len().saturating_sub(1)
                    } else {
                        selected - 1
                    };
                    DialogState::FolderPicker { options, selected }
                }
                other => other,
            },
            DialogIntent::MoveDown => match state {
                DialogState::FolderPicker { options, selected } => {
                    let selected = if selected + 1 >= options.len() {
                        0
                    } else {
                        selected + 1
                    };
                    DialogState::FolderPicker { options, selected }
                }
                other => other,
            },
            DialogIntent::RejectEmptyName => match state {
                DialogState::NameInput { purpose, input, .. } => DialogState::NameInput {
                    purpose,
                    input,
                    error: Some("Name cannot be empty".to_string()),
                },
                other => other,
            },
            DialogIntent::Close => DialogState::Hidden,
        }
    }
}
