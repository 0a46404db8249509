use crate::utils::*;
use kelime_core::Difficulty;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Player preferences kept across visits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
}

impl StorageKey for Settings {
    const KEY: &'static str = "kelime:settings";
}

pub(crate) fn difficulty_caption(difficulty: Difficulty) -> String {
    format!("{} ({} Harf)", difficulty.label(), difficulty.word_length())
}

#[derive(Properties, PartialEq)]
pub(crate) struct DifficultyPickerProps {
    pub selected: Difficulty,
    pub onselect: Callback<Difficulty>,
}

#[function_component]
pub(crate) fn DifficultyPicker(props: &DifficultyPickerProps) -> Html {
    html! {
        <nav class="difficulty">
            {
                for Difficulty::ALL.into_iter().map(|difficulty| {
                    let onselect = props.onselect.clone();
                    let onclick = Callback::from(move |_: MouseEvent| onselect.emit(difficulty));
                    let class = classes!(
                        "difficulty-btn",
                        (difficulty == props.selected).then_some("active")
                    );
                    html! {
                        <button {class} {onclick}>{difficulty_caption(difficulty)}</button>
                    }
                })
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_names_the_letter_count() {
        assert_eq!(difficulty_caption(Difficulty::Medium), "Orta (5 Harf)");
        assert_eq!(difficulty_caption(Difficulty::Expert), "Uzman (7 Harf)");
    }

    #[test]
    fn storage_key_uses_project_namespace() {
        assert_eq!(<Settings as StorageKey>::KEY, "kelime:settings");
    }
}
