use super::*;

fn scheduled_reply(effects: &[Effect]) -> Option<&str> {
    effects.iter().find_map(|e| match e {
        Effect::Schedule { task: Task::BotReply(text), .. } => Some(text.as_str()),
        _ => None,
    })
}

// =============================================================
// bot_reply: rule table matching
// =============================================================

#[test]
fn pricing_question_gets_the_pricing_answer() {
    assert_eq!(bot_reply("What's your pricing?"), RULES[0].answer);
}

#[test]
fn tool_question_gets_the_tools_answer() {
    assert_eq!(bot_reply("do you use Power BI?"), RULES[3].answer);
}

#[test]
fn unmatched_input_gets_the_generic_prompt() {
    assert_eq!(bot_reply("hello"), FALLBACK_REPLY);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(bot_reply("COST estimate please"), RULES[0].answer);
}

#[test]
fn matching_is_substring_containment() {
    // "timeline" is found inside a longer word run.
    assert_eq!(bot_reply("what's the timeline-ish estimate"), RULES[2].answer);
}

#[test]
fn first_rule_in_table_order_wins() {
    // "cost" (rule 0) and "inventory" (rule 1) both match.
    assert_eq!(bot_reply("cost of inventory reports"), RULES[0].answer);
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escapes_all_five_special_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
    );
}

#[test]
fn script_tags_never_survive_escaping() {
    let escaped = escape_html("<script>alert(1)</script>");
    assert!(!escaped.contains('<'));
    assert!(!escaped.contains('>'));
    assert_eq!(escaped, "&lt;script&gt;alert(1)&lt;/script&gt;");
}

#[test]
fn plain_text_passes_through_unchanged() {
    assert_eq!(escape_html("hello there"), "hello there");
}

// =============================================================
// ChatWidget state machine
// =============================================================

#[test]
fn starts_closed_and_empty() {
    let chat = ChatWidget::new();
    assert!(!chat.is_open());
    assert!(chat.transcript().is_empty());
}

#[test]
fn launcher_opens_with_greeting_and_focus() {
    let mut chat = ChatWidget::new();

    let effects = chat.launcher_clicked();
    assert!(chat.is_open());
    assert_eq!(effects[0], Effect::ChatVisible(true));
    assert!(matches!(
        &effects[1],
        Effect::AppendMessage(ChatMessage { text, sender: Sender::Bot }) if text == GREETING
    ));
    assert_eq!(effects[2], Effect::FocusChatInput);
}

#[test]
fn launcher_while_open_closes_and_clears() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();
    chat.submit("hello");

    let effects = chat.launcher_clicked();
    assert!(!chat.is_open());
    assert!(chat.transcript().is_empty());
    assert_eq!(effects, vec![Effect::ClearTranscript, Effect::ChatVisible(false)]);
}

#[test]
fn close_control_clears_the_transcript() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();

    chat.close_clicked();
    assert!(!chat.is_open());
    assert!(chat.transcript().is_empty());
}

#[test]
fn reopen_after_close_shows_only_the_fresh_greeting() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();
    chat.submit("what tools do you use?");
    chat.close_clicked();

    chat.launcher_clicked();
    let transcript = chat.transcript();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].text, GREETING);
    assert_eq!(transcript[0].sender, Sender::Bot);
}

#[test]
fn submit_appends_user_message_and_schedules_reply() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();

    let effects = chat.submit("what's your pricing?");
    assert!(matches!(
        &effects[0],
        Effect::AppendMessage(ChatMessage { text, sender: Sender::User })
            if text == "what's your pricing?"
    ));
    assert_eq!(effects[1], Effect::ClearChatInput);
    assert_eq!(
        effects[2],
        Effect::Schedule {
            delay_ms: BOT_REPLY_DELAY_MS,
            task: Task::BotReply(RULES[0].answer.to_owned()),
        }
    );
}

#[test]
fn submit_trims_input_before_matching() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();

    let effects = chat.submit("  pricing?  ");
    assert!(matches!(
        &effects[0],
        Effect::AppendMessage(ChatMessage { text, .. }) if text == "pricing?"
    ));
    assert_eq!(scheduled_reply(&effects), Some(RULES[0].answer));
}

#[test]
fn blank_submit_is_ignored() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();

    assert!(chat.submit("   ").is_empty());
    assert_eq!(chat.transcript().len(), 1); // greeting only
}

#[test]
fn bot_arrival_appends_exactly_one_bot_message() {
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();
    chat.submit("hello");

    let effects = chat.bot_arrived(FALLBACK_REPLY.to_owned());
    assert_eq!(effects.len(), 1);
    assert_eq!(chat.transcript().len(), 3);
    assert_eq!(chat.transcript()[2].sender, Sender::Bot);
    assert_eq!(chat.transcript()[2].text, FALLBACK_REPLY);
}

#[test]
fn reply_in_flight_lands_in_a_cleared_transcript() {
    // Closing does not cancel a pending reply; it arrives in the fresh
    // (cleared) transcript. Accepted behavior, preserved deliberately.
    let mut chat = ChatWidget::new();
    chat.launcher_clicked();
    chat.submit("hello");
    chat.close_clicked();

    chat.bot_arrived(FALLBACK_REPLY.to_owned());
    assert_eq!(chat.transcript().len(), 1);
    assert_eq!(chat.transcript()[0].sender, Sender::Bot);
}
