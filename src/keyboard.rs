use crossterm::event::KeyCode;

use crate::state::QuizState;

/// Which screen currently has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Quiz,
    Browser,
}

/// Everything the presentation layer may ask of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select the option at this position (0-based) of the current question.
    SelectOption(usize),
    Advance,
    Retreat,
    Reset,
    SwitchScreen,
    Quit,
    BrowseUp,
    BrowseDown,
    BrowseNextSubject,
    BrowsePrevSubject,
}

/// Maps a key press to an intent, given what the user is looking at.
///
/// This is where the "must answer before advancing" policy lives: the engine
/// itself accepts `advance` at any time, but the next-question keys only fire
/// once the current question has an answer. Retreating is unconditional.
pub fn intent_for(key: KeyCode, screen: Screen, state: &QuizState) -> Option<Intent> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Intent::Quit),
        KeyCode::Tab => return Some(Intent::SwitchScreen),
        _ => {}
    }

    match screen {
        Screen::Quiz if state.completed => match key {
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Reset),
            _ => None,
        },
        Screen::Quiz => match key {
            KeyCode::Char(c @ '1'..='4') => {
                Some(Intent::SelectOption(c as usize - '1' as usize))
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right
                if state.is_answered(state.index) =>
            {
                Some(Intent::Advance)
            }
            KeyCode::Left => Some(Intent::Retreat),
            _ => None,
        },
        Screen::Browser => match key {
            KeyCode::Up | KeyCode::Char('k') => Some(Intent::BrowseUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Intent::BrowseDown),
            KeyCode::Right | KeyCode::Char('l') => Some(Intent::BrowseNextSubject),
            KeyCode::Left | KeyCode::Char('h') => Some(Intent::BrowsePrevSubject),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unanswered() -> QuizState {
        QuizState::fresh()
    }

    fn answered() -> QuizState {
        let mut state = QuizState::fresh();
        state.answered.insert(0, "a".to_string());
        state
    }

    fn completed() -> QuizState {
        let mut state = QuizState::fresh();
        state.completed = true;
        state
    }

    #[test]
    fn digits_map_to_option_positions() {
        let state = unanswered();
        for (c, position) in [('1', 0), ('2', 1), ('3', 2), ('4', 3)] {
            assert_eq!(
                intent_for(KeyCode::Char(c), Screen::Quiz, &state),
                Some(Intent::SelectOption(position))
            );
        }
        assert_eq!(intent_for(KeyCode::Char('5'), Screen::Quiz, &state), None);
    }

    #[test]
    fn advance_requires_an_answer() {
        let state = unanswered();
        for key in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Right] {
            assert_eq!(intent_for(key, Screen::Quiz, &state), None);
        }

        let state = answered();
        for key in [KeyCode::Enter, KeyCode::Char(' '), KeyCode::Right] {
            assert_eq!(intent_for(key, Screen::Quiz, &state), Some(Intent::Advance));
        }
    }

    #[test]
    fn retreat_is_unconditional() {
        assert_eq!(
            intent_for(KeyCode::Left, Screen::Quiz, &unanswered()),
            Some(Intent::Retreat)
        );
    }

    #[test]
    fn reset_only_on_the_completed_screen() {
        assert_eq!(
            intent_for(KeyCode::Char('r'), Screen::Quiz, &completed()),
            Some(Intent::Reset)
        );
        assert_eq!(intent_for(KeyCode::Char('r'), Screen::Quiz, &unanswered()), None);
    }

    #[test]
    fn completed_screen_ignores_quiz_keys() {
        let state = completed();
        assert_eq!(intent_for(KeyCode::Char('1'), Screen::Quiz, &state), None);
        assert_eq!(intent_for(KeyCode::Enter, Screen::Quiz, &state), None);
        assert_eq!(intent_for(KeyCode::Left, Screen::Quiz, &state), None);
    }

    #[test]
    fn quit_and_switch_work_everywhere() {
        for screen in [Screen::Quiz, Screen::Browser] {
            for state in [unanswered(), completed()] {
                assert_eq!(intent_for(KeyCode::Char('q'), screen, &state), Some(Intent::Quit));
                assert_eq!(intent_for(KeyCode::Esc, screen, &state), Some(Intent::Quit));
                assert_eq!(
                    intent_for(KeyCode::Tab, screen, &state),
                    Some(Intent::SwitchScreen)
                );
            }
        }
    }

    #[test]
    fn browser_screen_maps_cursor_keys() {
        let state = unanswered();
        assert_eq!(
            intent_for(KeyCode::Up, Screen::Browser, &state),
            Some(Intent::BrowseUp)
        );
        assert_eq!(
            intent_for(KeyCode::Down, Screen::Browser, &state),
            Some(Intent::BrowseDown)
        );
        assert_eq!(
            intent_for(KeyCode::Right, Screen::Browser, &state),
            Some(Intent::BrowseNextSubject)
        );
        assert_eq!(
            intent_for(KeyCode::Left, Screen::Browser, &state),
            Some(Intent::BrowsePrevSubject)
        );
        // digit keys mean nothing here
        assert_eq!(intent_for(KeyCode::Char('1'), Screen::Browser, &state), None);
    }
}
