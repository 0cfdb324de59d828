//! Integration tests for the feedback conversation flow
//!
//! These drive a full session end to end: scripted utterance channel in,
//! transcript and JSON record out.

use std::sync::Arc;

use feedback_agent_agent::{ConversationDriver, DriverConfig, EndReason, QuestionScript};
use feedback_agent_channel::ScriptedChannel;
use feedback_agent_core::{AnswerValue, RatingValue, YesNoValue};
use feedback_agent_persistence::FileFeedbackStore;

fn driver_with_store(dir: &std::path::Path) -> ConversationDriver {
    let store = Arc::new(FileFeedbackStore::new(dir));
    ConversationDriver::new(
        QuestionScript::hinglish_default(),
        DriverConfig::default(),
        store,
    )
    .unwrap()
}

fn rating(n: u8) -> AnswerValue {
    AnswerValue::Rating(RatingValue::new(n).unwrap())
}

fn yes_no(v: YesNoValue) -> AnswerValue {
    AnswerValue::YesNo(v)
}

#[tokio::test]
async fn test_happy_path_hinglish_replies() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    let mut channel = ScriptedChannel::new([
        "haan",
        "paanch",
        "nahi",
        "4",
        "haan",
        "Bahut achhi service",
    ]);

    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Completed);
    let answers = &outcome.record.answers;
    assert_eq!(answers["q1_overall_rating_1to5"], rating(5));
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::No));
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(4));
    assert_eq!(answers["q4_promised_time_yesno"], yes_no(YesNoValue::Yes));
    assert_eq!(
        answers["q5_additional_comments_text"],
        AnswerValue::Text("Bahut achhi service".to_string())
    );

    // Greeting + reply, five question/answer pairs, farewell
    assert_eq!(channel.spoken().len(), 7);
    assert!(outcome.artifacts.is_ok());
}

#[tokio::test]
async fn test_happy_path_mixed_replies() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    let mut channel = ScriptedChannel::new([
        "yes",
        "teen",
        "nahi",
        "chaar",
        "haan",
        "Advisor thoda rude tha",
    ]);

    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Completed);
    let answers = &outcome.record.answers;
    assert_eq!(answers["q1_overall_rating_1to5"], rating(3));
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::No));
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(4));
    assert_eq!(answers["q4_promised_time_yesno"], yes_no(YesNoValue::Yes));
    assert_eq!(
        answers["q5_additional_comments_text"],
        AnswerValue::Text("Advisor thoda rude tha".to_string())
    );
}

#[tokio::test]
async fn test_decline_at_greeting() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());
    let call_id = driver.call_id().to_string();

    let mut channel = ScriptedChannel::new(["Nahi, abhi busy hoon"]);
    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Declined);

    // No question was ever asked
    assert_eq!(channel.spoken().len(), 2); // greeting + decline farewell

    // Record is fully sentinel-filled but structurally complete
    let answers = &outcome.record.answers;
    assert_eq!(answers.len(), 5);
    assert_eq!(answers["q1_overall_rating_1to5"], rating(0));
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::Unknown));
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(0));
    assert_eq!(answers["q4_promised_time_yesno"], yes_no(YesNoValue::Unknown));
    assert_eq!(
        answers["q5_additional_comments_text"],
        AnswerValue::Text(String::new())
    );

    // Both artifacts still exist on disk
    let artifacts = outcome.artifacts.unwrap();
    assert!(artifacts.transcript_path.exists());
    assert!(artifacts.record_path.exists());

    let transcript = std::fs::read_to_string(&artifacts.transcript_path).unwrap();
    assert_eq!(transcript.lines().count(), 3); // greeting, reply, farewell
    assert!(transcript.contains("User: Nahi, abhi busy hoon"));

    assert_eq!(outcome.record.call_id, call_id);
}

#[tokio::test]
async fn test_retry_budget_exhaustion_stores_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    // Two consecutive unintelligible rating replies, then normal answers
    let mut channel = ScriptedChannel::new([
        "haan",
        "hmm kya bolun",
        "pata nahi yaar",
        "haan",
        "paanch",
        "nahi",
        "theek thi",
    ]);

    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Completed);
    let answers = &outcome.record.answers;
    // q1 exhausted its single re-prompt and fell back to UNSET
    assert_eq!(answers["q1_overall_rating_1to5"], rating(0));
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::Yes));
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(5));
    assert_eq!(answers["q4_promised_time_yesno"], yes_no(YesNoValue::No));
    assert_eq!(
        answers["q5_additional_comments_text"],
        AnswerValue::Text("theek thi".to_string())
    );

    // q1 was asked exactly twice (original + one clarification)
    let q1_prompts = channel
        .spoken()
        .iter()
        .filter(|line| line.contains("overall service ka rating"))
        .count();
    assert_eq!(q1_prompts, 2);
}

#[tokio::test]
async fn test_yes_no_retry_falls_back_to_unknown() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    let mut channel = ScriptedChannel::new([
        "haan",
        "3",
        "haan nahi dono", // both vocabularies -> unresolved
        "matlab kya",     // neither -> unresolved, budget exhausted
        "2",
        "nahi",
        "",
    ]);

    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Completed);
    let answers = &outcome.record.answers;
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::Unknown));
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(2));
    assert_eq!(
        answers["q5_additional_comments_text"],
        AnswerValue::Text(String::new())
    );
}

#[tokio::test]
async fn test_hangup_mid_session_keeps_partial_answers() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    // Channel dies after the second question's answer
    let mut channel = ScriptedChannel::new(["haan", "paanch", "haan"]);

    let outcome = driver.run(&mut channel).await;

    assert_eq!(outcome.end_reason, EndReason::Disconnected);
    let answers = &outcome.record.answers;
    assert_eq!(answers["q1_overall_rating_1to5"], rating(5));
    assert_eq!(answers["q2_washing_yesno"], yes_no(YesNoValue::Yes));
    // Unreached questions keep their sentinels
    assert_eq!(answers["q3_advisor_behavior_1to5"], rating(0));
    assert_eq!(answers["q4_promised_time_yesno"], yes_no(YesNoValue::Unknown));

    // Partial data still persisted
    let artifacts = outcome.artifacts.unwrap();
    assert!(artifacts.transcript_path.exists());
    assert!(artifacts.record_path.exists());
}

#[tokio::test]
async fn test_transcript_is_ordered_and_complete() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    let mut channel = ScriptedChannel::new(["haan", "1", "haan", "2", "nahi", "sab theek"]);
    let outcome = driver.run(&mut channel).await;

    let artifacts = outcome.artifacts.unwrap();
    let transcript = std::fs::read_to_string(&artifacts.transcript_path).unwrap();
    let lines: Vec<&str> = transcript.lines().collect();

    // 6 exchanged turns (greeting + 5 questions) x 2 speakers + farewell
    assert_eq!(lines.len(), 13);
    let agent_lines = lines.iter().filter(|l| l.starts_with("Riya: ")).count();
    let user_lines = lines.iter().filter(|l| l.starts_with("User: ")).count();
    assert_eq!((agent_lines, user_lines), (7, 6));

    // Strict agent/user alternation until the final farewell
    for (i, line) in lines.iter().enumerate().take(12) {
        if i % 2 == 0 {
            assert!(line.starts_with("Riya: "), "line {i}: {line}");
        } else {
            assert!(line.starts_with("User: "), "line {i}: {line}");
        }
    }
    assert!(lines[12].starts_with("Riya: "));
}

#[tokio::test]
async fn test_record_json_matches_wire_contract() {
    let dir = tempfile::tempdir().unwrap();
    let driver = driver_with_store(dir.path());

    let mut channel = ScriptedChannel::new(["haan", "paanch", "nahi", "4", "haan", "sab badiya"]);
    let outcome = driver.run(&mut channel).await;

    let artifacts = outcome.artifacts.unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&artifacts.record_path).unwrap()).unwrap();

    assert_eq!(json["language"], "hinglish");
    assert_eq!(json["call_id"], outcome.record.call_id.as_str());
    assert_eq!(json["answers"]["q1_overall_rating_1to5"], 5);
    assert_eq!(json["answers"]["q2_washing_yesno"], "no");
    assert_eq!(json["answers"]["q3_advisor_behavior_1to5"], 4);
    assert_eq!(json["answers"]["q4_promised_time_yesno"], "yes");
    assert_eq!(json["answers"]["q5_additional_comments_text"], "sab badiya");

    // Timestamp shape: YYYY-MM-DD HH:MM:SS
    let ts = json["timestamp_ist"].as_str().unwrap();
    assert_eq!(ts.len(), 19);

    let path = json["transcript_path"].as_str().unwrap();
    assert!(path.ends_with(&format!("{}.txt", outcome.record.call_id)));
}

#[tokio::test]
async fn test_storage_failure_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "x").unwrap();

    let store = Arc::new(FileFeedbackStore::new(&blocker));
    let driver = ConversationDriver::new(
        QuestionScript::hinglish_default(),
        DriverConfig::default(),
        store,
    )
    .unwrap();

    let mut channel = ScriptedChannel::new(["haan", "5", "haan", "5", "haan", "great"]);
    let outcome = driver.run(&mut channel).await;

    // Conversation completed; only the write failed
    assert_eq!(outcome.end_reason, EndReason::Completed);
    assert!(outcome.artifacts.is_err());
    assert_eq!(
        outcome.record.answers["q1_overall_rating_1to5"],
        rating(5)
    );
}
