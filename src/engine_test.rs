use super::*;

use crate::chat::{FALLBACK_REPLY, Sender};
use crate::contact::{FormFields, STATUS_FALLBACK, STATUS_OPENING};
use crate::scrollspy::Section;

fn page() -> PageCore {
    PageCore::new(
        vec![
            Section { id: "services".to_owned(), top: 0.0, height: 600.0 },
            Section { id: "contact".to_owned(), top: 600.0, height: 600.0 },
        ],
        3,
    )
}

#[test]
fn features_start_in_their_initial_states() {
    let core = page();
    assert!(!core.nav.is_open());
    assert_eq!(core.accordion.expanded(), None);
    assert!(!core.chat.is_open());
    assert!(core.chat.transcript().is_empty());
}

#[test]
fn form_fallback_task_flips_the_status_line() {
    let mut core = page();

    let effects = core.task_fired(Task::FormFallback);
    assert_eq!(effects, vec![Effect::FormStatus(STATUS_FALLBACK)]);
}

#[test]
fn bot_reply_task_lands_in_the_chat_transcript() {
    let mut core = page();
    core.chat.launcher_clicked();

    let effects = core.task_fired(Task::BotReply(FALLBACK_REPLY.to_owned()));
    assert_eq!(effects.len(), 1);
    assert_eq!(core.chat.transcript().last().map(|m| m.sender), Some(Sender::Bot));
}

#[test]
fn submit_then_fired_task_round_trip() {
    // The Schedule effect a submission emits carries exactly the task that,
    // once fired, produces the follow-up effect.
    let mut core = page();

    let effects = contact::submit(&FormFields::default(), "ts", "page");
    assert_eq!(effects[0], Effect::FormStatus(STATUS_OPENING));
    let Some(Effect::Schedule { task, .. }) = effects.last().cloned() else {
        panic!("submission ends with a scheduled task");
    };

    assert_eq!(core.task_fired(task), vec![Effect::FormStatus(STATUS_FALLBACK)]);
}

#[test]
fn features_do_not_interact() {
    let mut core = page();
    core.nav.toggle();
    core.accordion.click(1);
    core.chat.launcher_clicked();

    // Scroll handling leaves every other feature untouched.
    let _ = core.spy.on_scroll(700.0);
    assert!(core.nav.is_open());
    assert_eq!(core.accordion.expanded(), Some(1));
    assert!(core.chat.is_open());
}
