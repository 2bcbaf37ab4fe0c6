use cineframe::{
    ChatState, FALLBACK_REPLY, MessageEntry, RESPONSE_RULES, Sender, WELCOME_MESSAGE,
    match_response,
};

#[test]
fn widget_walkthrough_from_reveal_to_replies() {
    let mut chat = ChatState::new();

    // The toggle stays hidden until the anchor crosses 80% of the viewport,
    // then reveals exactly once.
    assert!(!chat.evaluate_scroll_trigger(1400.0, 1000.0));
    assert!(chat.evaluate_scroll_trigger(640.0, 1000.0));
    assert!(!chat.evaluate_scroll_trigger(640.0, 1000.0));

    // First open greets; later opens do not.
    let welcome = chat.open().expect("first open adds the welcome entry");
    assert_eq!(welcome.text, WELCOME_MESSAGE);
    chat.close();
    assert!(chat.open().is_none());

    // A question lands as a user entry, then its canned reply is delivered.
    let reply = chat
        .submit_user_message("What about color?")
        .expect("input is accepted");
    chat.push_bot_reply(reply);

    let transcript = chat.transcript();
    assert_eq!(transcript.len(), 4);
    assert_eq!(
        transcript[2],
        MessageEntry {
            sender: Sender::User,
            text: "What about color?".to_string(),
        }
    );
    assert_eq!(transcript[3].sender, Sender::Bot);
    assert_eq!(transcript[3].text, RESPONSE_RULES[4].reply);

    // Blank input never grows the transcript.
    assert!(chat.submit_user_message("").is_none());
    assert!(chat.submit_user_message("   ").is_none());
    assert_eq!(chat.transcript().len(), 4);
}

#[test]
fn declared_rule_order_decides_ties() {
    // "cinematic" is declared before "tarantino"; both appear in the input.
    assert_eq!(
        match_response("Is Tarantino's framing cinematic?"),
        RESPONSE_RULES[0].reply
    );

    // "tarantino" is declared before "lighting".
    assert_eq!(
        match_response("I love the lighting in Tarantino films"),
        RESPONSE_RULES[1].reply
    );
}

#[test]
fn every_rule_is_reachable_and_unmatched_input_falls_back() {
    let probes = [
        ("show me a cinematic frame", 0),
        ("what would tarantino do", 1),
        ("soft lighting tips", 2),
        ("is the rule of thirds overrated", 3),
        ("why is the color so green", 4),
        ("which camera angle works here", 5),
    ];

    for (input, rule_index) in probes {
        assert_eq!(match_response(input), RESPONSE_RULES[rule_index].reply);
    }

    assert_eq!(match_response("recommend me a snack"), FALLBACK_REPLY);
}
